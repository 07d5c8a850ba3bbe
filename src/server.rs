//! HTTP wiring for the search endpoint.
//!
//! There is exactly one handler. Every path and method falls through to it, and
//! every response carries `Access-Control-Allow-Origin: *` so browser front-ends
//! on other origins can call it directly.

use crate::catalog::types::Catalog;
use crate::search::handlers::handle_search;
use crate::search::types::SearchSettings;
use axum::http::{HeaderValue, header};
use axum::{Extension, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router around a loaded catalog.
pub fn router(catalog: Arc<Catalog>, settings: SearchSettings) -> Router {
    Router::new()
        .fallback(handle_search)
        .layer(Extension(catalog))
        .layer(Extension(settings))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serves `app` on `listener` until Ctrl+C, letting in-flight requests finish.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested, draining connections");
}
