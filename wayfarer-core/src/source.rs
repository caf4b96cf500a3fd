//! Data access traits for places and interactions.
//!
//! Loaders normalise heterogeneous rows (CSV columns, SQL result rows) into
//! domain records. Malformed individual records are skipped by the loader;
//! only whole-source failures surface as [`SourceError`].

use std::error::Error as StdError;

use thiserror::Error;

use crate::{Interaction, Place};

/// Boxed cause carried by [`SourceError`].
pub type BoxedSourceCause = Box<dyn StdError + Send + Sync + 'static>;

/// Error raised when a data source cannot be read at all.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not be reached or opened.
    #[error("{source_name} is unavailable: {cause}")]
    Unavailable {
        /// Human-readable name of the source (file path, table name).
        source_name: String,
        /// Underlying failure.
        #[source]
        cause: BoxedSourceCause,
    },
    /// The source was reachable but its layout was unusable.
    #[error("{source_name} has an unusable layout: {reason}")]
    Layout {
        /// Human-readable name of the source.
        source_name: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl SourceError {
    /// Wrap an arbitrary error as [`SourceError::Unavailable`].
    pub fn unavailable(source_name: impl Into<String>, cause: impl Into<BoxedSourceCause>) -> Self {
        Self::Unavailable {
            source_name: source_name.into(),
            cause: cause.into(),
        }
    }
}

/// Read access to a collection of places.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{Place, PlaceSource, SourceError};
///
/// struct Fixed(Vec<Place>);
///
/// impl PlaceSource for Fixed {
///     fn load_places(&self) -> Result<Vec<Place>, SourceError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let place = Place::builder("p1", "Gardens by the Bay").build().unwrap();
/// let source = Fixed(vec![place.clone()]);
/// assert_eq!(source.load_places().unwrap(), vec![place]);
/// ```
pub trait PlaceSource {
    /// Load every well-formed place the source holds.
    fn load_places(&self) -> Result<Vec<Place>, SourceError>;
}

/// Read access to recorded user-place interactions.
///
/// Implementations must be thread-safe so a shared recommender can serve
/// concurrent requests.
pub trait InteractionSource: Send + Sync {
    /// Load every well-formed interaction the source holds.
    fn load_interactions(&self) -> Result<Vec<Interaction>, SourceError>;

    /// Short label used in log messages.
    fn describe(&self) -> String {
        String::from("interaction source")
    }
}
