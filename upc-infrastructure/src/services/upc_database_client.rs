use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use upc_domain::ports::{ItemLookup, LookupError};
use upc_domain::{UpcItem, UpstreamConfig};

use crate::config::validate_base_url;

/// `ItemLookup` backed by the upcdatabase.org JSON API.
pub struct UpcDatabaseClient {
    client: Client,
    base_url: Url,
}

impl UpcDatabaseClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let base_url = validate_base_url(&config.base_url)?;
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// `<base_url>/<api_key>/<upc>`, with both segments percent-encoded.
    pub fn item_url(&self, api_key: &str, upc: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(api_key)
            .push(upc);
        Ok(url)
    }
}

#[async_trait]
impl ItemLookup for UpcDatabaseClient {
    async fn fetch_item(&self, api_key: &str, upc: &str) -> Result<UpcItem, LookupError> {
        let url = self.item_url(api_key, upc)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;
        debug!(status = %response.status(), upc = %upc, "upstream responded");
        let body = response
            .text()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;
        parse_item(&body)
    }
}

pub fn parse_item(body: &str) -> Result<UpcItem, LookupError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| LookupError::MalformedBody(err.to_string()))?;
    if !value.is_object() {
        return Err(LookupError::MalformedBody(
            "expected a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|err| LookupError::MalformedBody(err.to_string()))
}
