//! `datetime-http` is an async HTTP client for datetime servers.
//!
//! [`DateTimeClient::fetch`] sends `GET <endpoint>/datetime` and retries
//! transport failures with a fixed delay ([`RetryPolicy`]). The raw body is
//! returned as-is; [`decode_datetime`] turns it into text.

mod client;
mod config;
mod decode;
mod error;
mod retry;
mod types;

pub use client::{DateTimeClient, ACCEPT_DATETIME, DATETIME_PATH};
pub use config::{ClientConfig, PORT_ENV, SERVER_URL_ENV};
pub use decode::decode_datetime;
pub use error::DateTimeError;
pub use retry::{RetriesExhausted, Retrier, RetryPolicy};
pub use types::{DateTimePayload, DecodedDateTime, PayloadFormat};

pub type Result<T> = std::result::Result<T, DateTimeError>;
