//! Error types raised by collaborative filtering.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while computing user similarities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// Two interaction rows had different lengths.
    #[error("cannot compare vectors of length {left} and {right}")]
    DimensionMismatch {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },
}

/// Errors raised by [`CollaborativeFilter::recommend_for_user`].
///
/// Falling back to the popular list is a successful outcome and never
/// surfaces here.
///
/// [`CollaborativeFilter::recommend_for_user`]: crate::CollaborativeFilter::recommend_for_user
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The requested user identifier was not positive.
    #[error("user_id must be a positive integer, got {user_id}")]
    InvalidUserId {
        /// Identifier supplied by the caller.
        user_id: i64,
    },
    /// The requested result count was not positive.
    #[error("top_n must be a positive integer, got {top_n}")]
    InvalidCount {
        /// Count supplied by the caller.
        top_n: i64,
    },
    /// Similarity computation failed unexpectedly.
    #[error("failed to compute recommendations")]
    Computation {
        /// Underlying similarity failure.
        #[source]
        source: SimilarityError,
    },
}

impl RecommendError {
    /// Report whether the caller supplied invalid input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidUserId { .. } | Self::InvalidCount { .. })
    }
}
