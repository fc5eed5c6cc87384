//! Client for the DeBank Pro OpenAPI

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::types::{DebankError, Protocol};
use crate::config::Config;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client around the single endpoint this tool consumes
pub struct DebankClient {
    client: Client,
    api_url: Url,
    access_key: String,
}

impl DebankClient {
    pub fn new(config: &Config) -> Result<Self, DebankError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            access_key: config.access_key.clone(),
        })
    }

    /// Fetch all complex protocol positions for a wallet.
    ///
    /// GET `<base>/user/all_complex_protocol_list?id=<address>` with the
    /// access key in the `AccessKey` header. The body is decoded once into
    /// the typed protocol model; transport, status, and decode failures each
    /// map to their own [`DebankError`] variant so callers can tell a failed
    /// fetch apart from an empty portfolio.
    pub async fn fetch_protocols(&self, address: &str) -> Result<Vec<Protocol>, DebankError> {
        let url = format!(
            "{}/user/all_complex_protocol_list",
            self.api_url.as_str().trim_end_matches('/')
        );
        debug!("GET {} id={}", url, address);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .header("AccessKey", &self.access_key)
            .query(&[("id", address)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DebankError::Status { status, body });
        }

        let body = response.text().await?;
        let protocols: Vec<Protocol> = serde_json::from_str(&body)?;
        debug!("Received {} protocols", protocols.len());

        Ok(protocols)
    }
}
