//! Service errors and their HTTP mapping.
#![forbid(unsafe_code)]

use std::net::SocketAddr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use wayfarer_cf::RecommendError;

/// Errors raised while serving requests or running the server.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required query parameter was absent.
    #[error("{name} is required")]
    MissingParameter {
        /// Parameter name.
        name: &'static str,
    },
    /// A query parameter was not an integer.
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Raw value supplied by the caller.
        value: String,
    },
    /// The recommender rejected or failed the request.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// The blocking worker panicked or was cancelled.
    #[error("recommendation worker failed")]
    Worker {
        /// Source error from `tokio`.
        #[source]
        source: tokio::task::JoinError,
    },
    /// Binding the listener failed.
    #[error("failed to bind {addr}")]
    Bind {
        /// Requested address.
        addr: SocketAddr,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server terminated unexpectedly")]
    Serve {
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

impl ServiceError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Recommend(err) if err.is_invalid_input() => StatusCode::BAD_REQUEST,
            Self::Recommend(_) | Self::Worker { .. } | Self::Bind { .. } | Self::Serve { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = ?self, "recommendation request failed");
            String::from("internal server error")
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
