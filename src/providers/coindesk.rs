use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::EndpointConfig;
use crate::index_provider::PriceIndexProvider;
use crate::inspect;

pub const FETCH_ERROR_CONTEXT: &str = "Error fetching data from API";

const INDEX_PATH: &str = "/v1/bpi/currentprice.json";

// CoindeskProvider implementation for PriceIndexProvider
pub struct CoindeskProvider {
    base_url: String,
    timeout: Duration,
}

impl CoindeskProvider {
    pub fn new(base_url: &str) -> Self {
        CoindeskProvider {
            base_url: base_url.to_string(),
            timeout: EndpointConfig::default().timeout(),
        }
    }

    pub fn from_config(config: &EndpointConfig) -> Self {
        CoindeskProvider {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        }
    }

    async fn request_index(&self) -> Result<Value> {
        let url = format!("{}{}", self.base_url, INDEX_PATH);
        debug!("Requesting price index from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("cpix/1.0")
            .timeout(self.timeout)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        debug!(response = ?response, "Received index response");

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for URL: {}",
                response.status(),
                url
            ));
        }

        let text = response.text().await?;

        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response from {}: {}", url, e))?;

        Ok(payload)
    }
}

#[async_trait]
impl PriceIndexProvider for CoindeskProvider {
    #[instrument(
        name = "IndexFetch",
        skip(self),
        fields(base_url = %self.base_url)
    )]
    async fn fetch_index(&self) -> Result<Value> {
        match self.request_index().await {
            Ok(payload) => {
                inspect::analyze_structure(&payload);
                Ok(payload)
            }
            Err(err) => {
                inspect::log_error(FETCH_ERROR_CONTEXT, &err);
                Err(err.context(FETCH_ERROR_CONTEXT))
            }
        }
    }
}
