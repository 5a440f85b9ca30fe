use std::sync::Arc;

use upc_domain::ports::ItemLookup;
use upc_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub lookup: Arc<dyn ItemLookup>,
    pub metrics: Arc<Metrics>,
}
