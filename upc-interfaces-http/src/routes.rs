use async_graphql::dynamic::{Schema, SchemaError};
use axum::routing::get;
use axum::Router;

use upc_application::AppState;

use crate::graphql::build_schema;
use crate::handlers::{graphql_handlers, ops_handlers};

#[derive(Clone)]
pub struct ApiState {
    pub app: AppState,
    pub schema: Schema,
}

pub fn build_router(state: AppState) -> Result<Router, SchemaError> {
    let schema = build_schema(state.clone())?;
    let graphql_path = state.config.graphql_path.clone();
    let api = ApiState { app: state, schema };

    Ok(Router::new()
        .route(
            &graphql_path,
            get(graphql_handlers::graphql_get).post(graphql_handlers::graphql_post),
        )
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(api))
}
