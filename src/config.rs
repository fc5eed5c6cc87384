//! Runtime configuration sourced from the environment

use anyhow::{anyhow, Context, Result};
use url::Url;

/// Production base URL of the DeBank Pro OpenAPI
pub const DEFAULT_API_URL: &str = "https://pro-openapi.debank.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the DeBank API (overridable via `DEBANK_API_URL`)
    pub api_url: Url,

    /// Access key sent in the `AccessKey` header (never hard-coded)
    pub access_key: String,
}

impl Config {
    pub fn new(api_url: Url, access_key: String) -> Self {
        Self {
            api_url,
            access_key,
        }
    }

    /// Read configuration from the environment (`.env` files are loaded at
    /// startup via dotenvy).
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("DEBANK_ACCESS_KEY").ok(),
            std::env::var("DEBANK_API_URL").ok(),
        )
    }

    fn from_vars(access_key: Option<String>, api_url: Option<String>) -> Result<Self> {
        let access_key = access_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow!("DEBANK_ACCESS_KEY is not set. Export it or add it to a .env file")
            })?;

        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url)
            .with_context(|| format!("Invalid DEBANK_API_URL: {}", api_url))?;

        Ok(Self::new(api_url, access_key))
    }
}
