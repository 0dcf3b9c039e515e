use crate::config;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why a candidate download was dropped
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("status {0}")]
    Status(StatusCode),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Build the shared download client: generic user agent, short timeout
pub fn build_client(timeout_secs: u64) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(config::USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Download raw image bytes. Only a 200 response is accepted; anything
/// else drops the candidate with no retry.
pub async fn fetch_image(client: &Client, url: &Url) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url.as_str()).send().await?;

    if response.status() != StatusCode::OK {
        return Err(FetchError::Status(response.status()));
    }

    Ok(response.bytes().await?.to_vec())
}
