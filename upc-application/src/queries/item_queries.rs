use tracing::{debug, warn};

use upc_domain::UpcItem;

use crate::{AppError, AppState};

/// Resolves the root `item` field: one upstream call, no retry.
pub async fn lookup_item(state: &AppState, api_key: &str, upc: &str) -> Result<UpcItem, AppError> {
    state.metrics.record_lookup();
    debug!(upc = %upc, api_key = %redact(api_key), "upstream item lookup");
    match state.lookup.fetch_item(api_key, upc).await {
        Ok(item) => Ok(item),
        Err(err) => {
            state.metrics.record_lookup_error();
            warn!(upc = %upc, "upstream item lookup failed: {}", err);
            Err(err.into())
        }
    }
}

fn redact(api_key: &str) -> String {
    let visible: String = api_key.chars().take(4).collect();
    if visible.len() == api_key.len() {
        return "****".to_string();
    }
    format!("{}****", visible)
}
