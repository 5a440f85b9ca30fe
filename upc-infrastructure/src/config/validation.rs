use anyhow::{anyhow, Result};
use reqwest::Url;

pub fn validate_graphql_path(value: &str) -> Result<()> {
    if !value.starts_with('/') {
        return Err(anyhow!("graphql_path must start with '/'"));
    }
    if value == "/ops" || value.starts_with("/ops/") {
        return Err(anyhow!("graphql_path must not be under /ops"));
    }
    Ok(())
}

pub fn validate_base_url(value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|err| anyhow!("invalid upstream_base_url: {}", err))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("upstream_base_url must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(anyhow!("upstream_base_url cannot carry path segments"));
    }
    Ok(url)
}
