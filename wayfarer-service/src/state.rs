//! Shared application state.
#![forbid(unsafe_code)]

use std::sync::Arc;

use wayfarer_cf::CollaborativeFilter;

/// State handed to every handler.
///
/// The filter holds no per-request data, so a single shared instance serves
/// concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Recommender shared across requests.
    pub filter: Arc<CollaborativeFilter>,
}

impl AppState {
    /// Wrap a recommender for sharing.
    pub fn new(filter: CollaborativeFilter) -> Self {
        Self {
            filter: Arc::new(filter),
        }
    }
}
