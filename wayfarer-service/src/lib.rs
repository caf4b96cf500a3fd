//! HTTP interface to the Wayfarer collaborative filter.
//!
//! Routes:
//! - `GET /health` answers `{"status":"ok"}`.
//! - `GET /recommend?user_id=N&top_n=M` answers
//!   `{"user_id":N,"recommendations":[...]}`; `top_n` defaults to 5.
//!
//! Non-positive or non-integer parameters are rejected with `400`. Failures
//! inside the recommender, including a panicking worker, become `500` with an
//! opaque message. Every error body has the shape `{"error":"..."}`.
//!
//! Each request runs on a blocking worker because the recommender reads its
//! interaction store synchronously.

#![forbid(unsafe_code)]

mod error;
mod handlers;
mod routes;
mod state;

use std::net::SocketAddr;

use tracing::info;

pub use error::ServiceError;
pub use handlers::{DEFAULT_TOP_N, RecommendParams, RecommendResponse};
pub use routes::create_router;
pub use state::AppState;

/// Serve `state` on `addr` until Ctrl-C is received.
///
/// # Errors
/// Returns [`ServiceError::Bind`] when the address cannot be bound and
/// [`ServiceError::Serve`] when the server stops with an I/O error.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), ServiceError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })?;
    let local = listener
        .local_addr()
        .map_err(|source| ServiceError::Bind { addr, source })?;
    info!(%local, "recommendation service listening");
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServiceError::Serve { source })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down recommendation service");
}
