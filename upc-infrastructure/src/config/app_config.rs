use std::env;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use upc_domain::{RuntimeConfig, UpstreamConfig};

use crate::config::validation::{validate_base_url, validate_graphql_path};

pub const CONFIG_ENV: &str = "UPC_GRAPHQL_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub graphql_path: String,
    pub graphiql: bool,
    pub upstream_base_url: String,
    pub upstream_timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            graphql_path: "/".to_string(),
            graphiql: true,
            upstream_base_url: "http://api.upcdatabase.org/json".to_string(),
            upstream_timeout_seconds: None,
            user_agent: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path)
                .await
                .with_context(|| format!("failed to read {}", path))?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config file: {}", err))
    }

    pub fn normalize(&mut self) {
        if let Some(agent) = &self.user_agent {
            if agent.trim().is_empty() {
                self.user_agent = None;
            }
        }
        self.graphql_path = self.graphql_path.trim().to_string();
        if self.graphql_path.len() > 1 && self.graphql_path.ends_with('/') {
            self.graphql_path = self.graphql_path.trim_end_matches('/').to_string();
            if self.graphql_path.is_empty() {
                self.graphql_path = "/".to_string();
            }
        }
        self.upstream_base_url = self.upstream_base_url.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_graphql_path(&self.graphql_path)?;
        validate_base_url(&self.upstream_base_url)?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.upstream_timeout_seconds == Some(0) {
            return Err(anyhow!("upstream_timeout_seconds must be greater than 0"));
        }
        if self.request_timeout_seconds == Some(0) {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            graphql_path: self.graphql_path.clone(),
            graphiql: self.graphiql,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.upstream_base_url.clone(),
            timeout_seconds: self.upstream_timeout_seconds,
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| format!("upc-graphql/{}", env!("CARGO_PKG_VERSION"))),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("UPC_GRAPHQL_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("UPC_GRAPHQL_PATH") {
            self.graphql_path = value;
        }
        if let Some(value) = lookup("UPC_GRAPHQL_GRAPHIQL") {
            self.graphiql = parse_env("UPC_GRAPHQL_GRAPHIQL", &value)?;
        }
        if let Some(value) = lookup("UPC_GRAPHQL_UPSTREAM_BASE_URL") {
            self.upstream_base_url = value;
        }
        if let Some(value) = lookup("UPC_GRAPHQL_UPSTREAM_TIMEOUT_SECONDS") {
            self.upstream_timeout_seconds =
                Some(parse_env("UPC_GRAPHQL_UPSTREAM_TIMEOUT_SECONDS", &value)?);
        }
        if let Some(value) = lookup("UPC_GRAPHQL_USER_AGENT") {
            self.user_agent = Some(value);
        }
        if let Some(value) = lookup("UPC_GRAPHQL_MAX_BODY_BYTES") {
            self.max_body_bytes = parse_env("UPC_GRAPHQL_MAX_BODY_BYTES", &value)?;
        }
        if let Some(value) = lookup("UPC_GRAPHQL_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds =
                Some(parse_env("UPC_GRAPHQL_REQUEST_TIMEOUT_SECONDS", &value)?);
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid {}: '{}'", key, value))
}
