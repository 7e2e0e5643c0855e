use reqwest::{
    header::{self, HeaderValue},
    Method, Url,
};

use crate::{ClientConfig, DateTimeError, DateTimePayload, Result, Retrier, RetryPolicy};

/// Path segment appended to the configured endpoint.
pub const DATETIME_PATH: &str = "datetime";

/// `Accept` header sent with every request.
pub const ACCEPT_DATETIME: &str = "text/plain;charset=UTF-8, application/json";

#[derive(Clone, Debug)]
/// HTTP client for a datetime server's `/datetime` endpoint.
pub struct DateTimeClient {
    http: reqwest::Client,
    config: ClientConfig,
    retrier: Retrier,
}

impl DateTimeClient {
    /// Creates a client with the default retry policy.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use datetime_http::{ClientConfig, DateTimeClient};
    ///
    /// # async fn run() -> datetime_http::Result<()> {
    /// let config = ClientConfig::new("http://localhost:8080", Duration::from_secs(1))?;
    /// let _payload = DateTimeClient::new(config).fetch().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            retrier: Retrier::default(),
        }
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retrier = Retrier::new(policy);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        self.retrier.policy()
    }

    /// Full request URL: the endpoint with `/datetime` appended.
    ///
    /// Any query or fragment on the endpoint is dropped.
    ///
    /// Fails with [`DateTimeError::Request`] for endpoints that cannot carry
    /// an HTTP path.
    pub fn datetime_url(&self) -> Result<Url> {
        let mut url = self.config.endpoint().clone();
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DateTimeError::Request(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| {
                DateTimeError::Request(format!(
                    "endpoint {} cannot be a base URL",
                    self.config.endpoint()
                ))
            })?
            .pop_if_empty()
            .push(DATETIME_PATH);
        Ok(url)
    }

    /// Fetches the current datetime as raw bytes.
    ///
    /// Only sending the request and receiving the response headers is
    /// retried. Any HTTP status counts as a successful attempt. Reading the
    /// body happens once, after the retries.
    pub async fn fetch(&self) -> Result<DateTimePayload> {
        let url = self.datetime_url()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "fetching datetime");

        let response = self
            .retrier
            .run(|| self.http.execute(self.build_request(&url)))
            .await
            .map_err(DateTimeError::RetriesExhausted)?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await.map_err(DateTimeError::Body)?;

        Ok(DateTimePayload {
            body: body.to_vec(),
            content_type,
        })
    }

    fn build_request(&self, url: &Url) -> reqwest::Request {
        let mut request = reqwest::Request::new(Method::GET, url.clone());
        request
            .headers_mut()
            .insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_DATETIME));
        *request.timeout_mut() = Some(self.config.timeout());
        request
    }
}
