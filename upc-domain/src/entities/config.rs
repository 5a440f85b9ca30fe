// Runtime configuration handed to the application and interface layers

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub graphql_path: String,
    pub graphiql: bool,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
