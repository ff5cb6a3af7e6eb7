pub mod config;
pub mod index_provider;
pub mod inspect;
pub mod log;
pub mod providers;

use crate::index_provider::PriceIndexProvider;
use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info};

/// Fetches the current price index and returns the decoded payload.
///
/// A `url` argument overrides the configured endpoint base URL.
pub async fn run(config_path: Option<&str>, url: Option<&str>) -> Result<Value> {
    info!("Price index fetch starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut endpoint = config.endpoint;
    if let Some(url) = url {
        endpoint.base_url = url.to_string();
    }

    let provider = providers::coindesk::CoindeskProvider::from_config(&endpoint);
    provider.fetch_index().await
}
