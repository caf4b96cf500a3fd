//! Facade crate for the Wayfarer recommendation engine.
//!
//! This crate re-exports the core domain types, the ranking views and the
//! collaborative filter, and exposes the CSV and SQLite loaders behind the
//! `store-sqlite` feature.
//!
//! ```
//! use wayfarer_engine::{Place, top_places};
//!
//! let places = vec![
//!     Place::builder("a", "Hawker Centre").rating(4.5).rating_count(100).build().unwrap(),
//!     Place::builder("b", "Bistro").rating(5.0).rating_count(1).build().unwrap(),
//! ];
//! let best = top_places(&places, None, 1, 0);
//! assert_eq!(best[0].id, "a");
//! ```

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Category, EARTH_RADIUS_KM, Interaction, InteractionKind, InteractionSource, Place,
    PlaceBuilder, PlaceError, PlaceSource, SourceError, haversine_km,
};

pub use wayfarer_ranking::{
    CategoryFilter, DailyPick, JsonStyle, NearbyPlace, RankedPlace, RankingError,
    daily_recommendations, nearest_places, place_score, render_json, sort_places, top_places,
    write_ranking_file,
};

pub use wayfarer_cf::{
    CollaborativeFilter, FallbackConfig, RecommendError, SelectedSource, SourceStrategy,
};

#[cfg(feature = "store-sqlite")]
pub use wayfarer_data::{
    CsvPlaceSource, SqliteInteractionSource, SqlitePlaceSource, categorize_types,
};
