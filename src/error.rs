use crate::RetriesExhausted;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    /// Invalid client configuration or retry policy.
    #[error("config error: {0}")]
    Config(String),
    /// The request could not be constructed. Never retried.
    #[error("invalid request: {0}")]
    Request(String),
    /// Every attempt failed at the transport level.
    ///
    /// The per-attempt errors are kept in attempt order.
    #[error(transparent)]
    RetriesExhausted(RetriesExhausted<reqwest::Error>),
    /// Reading the response body failed after headers were received.
    #[error("body read error: {0}")]
    Body(reqwest::Error),
    /// Payload could not be decoded as a datetime string.
    #[error("decode error: {0}")]
    Decode(String),
}
