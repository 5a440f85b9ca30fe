use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::routes::ApiState;

pub async fn health_live() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn metrics_prometheus(State(state): State<ApiState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.app.metrics.render_prometheus(),
    )
}
