use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use upc_application::{AppState, Metrics};
use upc_infrastructure::{AppConfig, UpcDatabaseClient};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let upstream_config = config.to_upstream_config();
        info!(
            bind_addr = %runtime_config.bind_addr,
            graphql_path = %runtime_config.graphql_path,
            graphiql = runtime_config.graphiql,
            upstream_base_url = %upstream_config.base_url,
            upstream_timeout_seconds = ?upstream_config.timeout_seconds,
            "config loaded"
        );

        let lookup = Arc::new(UpcDatabaseClient::new(&upstream_config)?);
        let state = AppState {
            config: runtime_config,
            lookup,
            metrics: Arc::new(Metrics::default()),
        };
        Ok(Self { state })
    }
}
