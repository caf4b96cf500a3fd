//! Core domain types for the Wayfarer recommendation pipeline.
//!
//! The crate defines the records every other component exchanges:
//! [`Place`] for points of interest, [`Interaction`] for user touchpoints,
//! the [`Category`] taxonomy, great-circle distance via [`haversine_km`], and
//! the [`PlaceSource`] / [`InteractionSource`] traits loaders implement.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod distance;
mod interaction;
mod place;
mod source;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::Category;
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use interaction::{Interaction, InteractionKind};
pub use place::{MAX_RATING, Place, PlaceBuilder, PlaceError};
pub use source::{BoxedSourceCause, InteractionSource, PlaceSource, SourceError};
