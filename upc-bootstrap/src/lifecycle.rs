use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use upc_application::AppState;
use upc_interfaces_http::build_router;

use crate::context::AppContext;

/// The GraphQL router with CORS, body limit, optional timeout and tracing.
pub fn build_app(state: AppState) -> Result<Router> {
    let mut app = build_router(state.clone())
        .map_err(|err| anyhow::anyhow!("graphql schema build failed: {}", err))?
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(
            usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX),
        ));
    if let Some(seconds) = state.config.request_timeout_seconds {
        app = app.layer(TimeoutLayer::new(Duration::from_secs(seconds)));
    }
    Ok(app.layer(TraceLayer::new_for_http()))
}

pub async fn run_standalone() -> Result<()> {
    let context = AppContext::new().await?;
    let state = context.state;
    let app = build_app(state.clone())?;

    let addr: std::net::SocketAddr = state
        .config
        .bind_addr
        .parse()
        .context("invalid bind_addr")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(
        "GraphiQL testing server listening on {}{}",
        addr, state.config.graphql_path
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
