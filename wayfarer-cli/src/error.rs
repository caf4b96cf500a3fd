//! Error types emitted by the Wayfarer CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfarer_cf::RecommendError;
use wayfarer_core::SourceError;
use wayfarer_data::IdentifierError;
use wayfarer_ranking::RankingError;
use wayfarer_service::ServiceError;

/// Errors emitted by the Wayfarer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The query point for `nearby` lies outside valid latitude/longitude ranges.
    #[error("origin ({latitude}, {longitude}) is not a valid coordinate")]
    InvalidOrigin { latitude: f64, longitude: f64 },
    /// A table name failed identifier validation.
    #[error("invalid {field}: {source}")]
    InvalidTable {
        field: &'static str,
        #[source]
        source: IdentifierError,
    },
    /// Filtering or emitting rankings failed.
    #[error(transparent)]
    Ranking(#[from] RankingError),
    /// The place source could not be read.
    #[error("failed to load places: {source}")]
    LoadPlaces {
        #[source]
        source: SourceError,
    },
    /// The place source held no usable rows.
    #[error("no valid places found in {origin}")]
    NoPlaces { origin: String },
    /// The recommender rejected the request or failed internally.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serialising recommendation identifiers failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseRecommendations(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// The async runtime for `serve` could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The HTTP service stopped with an error.
    #[error(transparent)]
    Serve(#[from] ServiceError),
}
