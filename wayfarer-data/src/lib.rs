//! Data loaders feeding the Wayfarer ranking and recommendation engines.
//!
//! Responsibilities:
//! - Normalise CSV exports and `SQLite` tables into [`Place`] records.
//! - Read recorded interactions from `SQLite` for collaborative filtering.
//! - Tag provider place types with the category taxonomy.
//!
//! Boundaries:
//! - Do not encode ranking or recommendation rules (they live in
//!   `wayfarer-ranking` and `wayfarer-cf`).
//! - Skip malformed rows with a warning; only whole-source failures surface
//!   as [`SourceError`](wayfarer_core::SourceError).
//!
//! [`Place`]: wayfarer_core::Place

#![forbid(unsafe_code)]

mod categorize;
mod csv_places;
mod identifiers;
mod record;
mod sqlite;
mod sqlite_interactions;
mod sqlite_places;

pub use categorize::{categorize_types, parse_types_list};
pub use csv_places::CsvPlaceSource;
pub use identifiers::{IdentifierError, validate_identifier};
pub use record::RowError;
pub use sqlite_interactions::{DEFAULT_INTERACTIONS_TABLE, SqliteInteractionSource};
pub use sqlite_places::{DEFAULT_PLACES_TABLE, SqlitePlaceSource};
