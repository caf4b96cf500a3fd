//! Router assembly.
#![forbid(unsafe_code)]

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::handlers;

/// Build the service router with request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/recommend", get(handlers::recommend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
