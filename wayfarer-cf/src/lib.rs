//! User-based collaborative filtering for Wayfarer.
//!
//! Every request walks the same pipeline:
//! 1. Load interactions through an [`InteractionFeed`], which prefers the
//!    live store and substitutes the injected fallback set when the store is
//!    missing, unreachable, or empty.
//! 2. Build a binary [`UserItemMatrix`].
//! 3. Serve the popular list to users absent from the matrix.
//! 4. Compute pairwise [`cosine_similarity`] into a [`SimilarityMatrix`].
//! 5. Sum neighbour similarities for every place the user has not seen.
//!
//! When no neighbour is similar or none offers anything new, the popular list
//! from [`FallbackConfig`] is returned instead of an empty result.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod error;
mod matrix;
mod recommender;
mod similarity;
mod source;

pub use config::{DEFAULT_TOP_RATED, FallbackConfig};
pub use error::{RecommendError, SimilarityError};
pub use matrix::UserItemMatrix;
pub use recommender::CollaborativeFilter;
pub use similarity::{SimilarityMatrix, cosine_similarity};
pub use source::{FallbackSource, InteractionFeed, SelectedSource, SourceStrategy};
