use std::time::Duration;

use datetime_http::{decode_datetime, ClientConfig, DateTimeClient, RetryPolicy, SERVER_URL_ENV};

fn load_live_config() -> Result<ClientConfig, String> {
    if std::env::var(SERVER_URL_ENV).is_err() {
        return Err(format!("{SERVER_URL_ENV} is required"));
    }
    ClientConfig::resolve(None, None, Duration::from_secs(2)).map_err(|err| err.to_string())
}

#[tokio::test]
async fn live_fetch_returns_decodable_datetime() {
    let config = match load_live_config() {
        Ok(config) => config,
        Err(reason) => {
            eprintln!("skipping live test: {reason}");
            return;
        }
    };

    let policy =
        RetryPolicy::new(Duration::from_millis(250), 3).expect("live policy must be valid");
    let client = DateTimeClient::new(config).with_retry_policy(policy);

    let payload = client.fetch().await.expect("live fetch must succeed");
    assert!(!payload.body.is_empty());

    let decoded = decode_datetime(&payload).expect("live payload must decode");
    assert!(!decoded.value.is_empty());
}
