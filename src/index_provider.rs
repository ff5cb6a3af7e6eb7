//! Provides the current price index payload for the application.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait PriceIndexProvider: Send + Sync {
    async fn fetch_index(&self) -> Result<Value>;
}
