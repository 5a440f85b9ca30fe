use async_trait::async_trait;
use thiserror::Error;

use crate::entities::UpcItem;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream returned malformed JSON: {0}")]
    MalformedBody(String),
}

/// Fetches one item from the upstream UPC database.
#[async_trait]
pub trait ItemLookup: Send + Sync {
    async fn fetch_item(&self, api_key: &str, upc: &str) -> Result<UpcItem, LookupError>;
}
