//! Request handlers.
#![forbid(unsafe_code)]

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::{AppState, ServiceError};

/// Result count used when `top_n` is omitted.
pub const DEFAULT_TOP_N: i64 = 5;

/// Raw `/recommend` query parameters.
///
/// Values stay as text so malformed integers are reported in the service's
/// own error format.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendParams {
    /// Target user identifier.
    pub user_id: Option<String>,
    /// Maximum number of recommendations.
    pub top_n: Option<String>,
}

/// Body of a successful `/recommend` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// Echoed user identifier.
    pub user_id: i64,
    /// Recommended place identifiers, best first.
    pub recommendations: Vec<u64>,
}

/// `GET /health`
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /recommend?user_id=N&top_n=M`
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>, ServiceError> {
    let user_id = match params.user_id.as_deref() {
        Some(raw) => parse_integer("user_id", raw)?,
        None => return Err(ServiceError::MissingParameter { name: "user_id" }),
    };
    let top_n = match params.top_n.as_deref() {
        Some(raw) => parse_integer("top_n", raw)?,
        None => DEFAULT_TOP_N,
    };

    let filter = state.filter.clone();
    let recommendations =
        tokio::task::spawn_blocking(move || filter.recommend_for_user(user_id, top_n))
            .await
            .map_err(|source| ServiceError::Worker { source })??;
    debug!(user_id, count = recommendations.len(), "served recommendations");
    Ok(Json(RecommendResponse {
        user_id,
        recommendations,
    }))
}

fn parse_integer(name: &'static str, raw: &str) -> Result<i64, ServiceError> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::InvalidParameter {
            name,
            value: raw.to_owned(),
        })
}
