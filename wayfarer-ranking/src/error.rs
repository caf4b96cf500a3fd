//! Error types raised while filtering or emitting rankings.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the ranking views and their output helpers.
#[derive(Debug, Error)]
pub enum RankingError {
    /// A category filter was empty or whitespace.
    #[error("category filter must not be blank")]
    BlankCategory,
    /// Encoding the ranked records as JSON failed.
    #[error("failed to serialise ranked places")]
    Serialise {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the parent directory for the output file failed.
    #[error("failed to create parent directory {path}")]
    CreateParent {
        /// Path of the directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the ranking file failed.
    #[error("failed to write ranking file at {path}")]
    WriteFile {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
