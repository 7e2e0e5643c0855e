use datetime_http::{decode_datetime, ClientConfig, DateTimeClient, PORT_ENV, SERVER_URL_ENV};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::resolve_with(None, None, ClientConfig::DEFAULT_TIMEOUT, |name| {
        std::env::var(name).ok().or_else(|| match name {
            SERVER_URL_ENV => Some("http://localhost".to_owned()),
            PORT_ENV => Some("8080".to_owned()),
            _ => None,
        })
    })?;

    let client = DateTimeClient::new(config);
    let payload = client.fetch().await?;
    let decoded = decode_datetime(&payload)?;

    tracing::info!(format = ?decoded.format, "{}", decoded.value);
    Ok(())
}
