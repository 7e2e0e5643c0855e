use std::time::Duration;

use reqwest::Url;

use crate::{DateTimeError, Result};

/// Environment variable holding the server base URL.
pub const SERVER_URL_ENV: &str = "SERVER_URL";
/// Environment variable holding the server port.
pub const PORT_ENV: &str = "PORT";

/// Resolved endpoint and per-attempt timeout for a [`crate::DateTimeClient`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
    endpoint: Url,
    timeout: Duration,
}

impl ClientConfig {
    /// Suggested per-attempt timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

    /// Creates a config from an already resolved base URL.
    ///
    /// Example: `"http://localhost:8080"`; requests go to `<endpoint>/datetime`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint.trim())
            .map_err(|err| DateTimeError::Config(format!("invalid endpoint {endpoint:?}: {err}")))?;
        if timeout.is_zero() {
            return Err(DateTimeError::Config(
                "per-attempt timeout must be greater than zero".to_owned(),
            ));
        }
        Ok(Self { endpoint, timeout })
    }

    /// Resolves a config from explicit values, falling back to the environment.
    ///
    /// Reads:
    /// - `SERVER_URL` when `base_url` is absent or empty
    /// - `PORT` when `port` is absent or empty
    pub fn resolve(base_url: Option<&str>, port: Option<&str>, timeout: Duration) -> Result<Self> {
        Self::resolve_with(base_url, port, timeout, |name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::resolve`] with a caller-supplied variable lookup.
    pub fn resolve_with<F>(
        base_url: Option<&str>,
        port: Option<&str>,
        timeout: Duration,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = explicit_or_lookup(base_url, SERVER_URL_ENV, &lookup).ok_or_else(|| {
            DateTimeError::Config(format!(
                "missing base URL: pass one explicitly or set {SERVER_URL_ENV}"
            ))
        })?;
        let port = explicit_or_lookup(port, PORT_ENV, &lookup);

        let mut config = Self::new(&base_url, timeout)?;
        if let Some(port) = port {
            config.set_port(&port)?;
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Deadline for a single HTTP attempt.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn set_port(&mut self, port: &str) -> Result<()> {
        let port = port
            .parse::<u16>()
            .map_err(|err| DateTimeError::Config(format!("invalid port {port:?}: {err}")))?;
        self.endpoint.set_port(Some(port)).map_err(|()| {
            DateTimeError::Config(format!("endpoint {} cannot carry a port", self.endpoint))
        })
    }
}

fn explicit_or_lookup<F>(explicit: Option<&str>, name: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .or_else(|| lookup(name))
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
