//! Place loader for `SQLite` tables.
#![forbid(unsafe_code)]

use std::num::NonZeroU32;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use rusqlite::types::Value;
use wayfarer_core::{Place, PlaceSource, SourceError};

use crate::identifiers::{IdentifierError, validate_identifier};
use crate::record::ColumnMap;
use crate::sqlite::{open_read_only, value_text};

/// Table read when none is configured.
pub const DEFAULT_PLACES_TABLE: &str = "places";

/// Reads places from a table with the same columns as the CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlitePlaceSource {
    path: Utf8PathBuf,
    table: String,
    limit: Option<NonZeroU32>,
}

impl SqlitePlaceSource {
    /// Create a loader reading every row of [`DEFAULT_PLACES_TABLE`].
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: DEFAULT_PLACES_TABLE.to_owned(),
            limit: None,
        }
    }

    /// Read from `table` instead of the default.
    ///
    /// # Errors
    /// Returns [`IdentifierError`] when the name is empty or contains
    /// characters outside `[A-Za-z0-9_.]`.
    pub fn with_table(mut self, table: &str) -> Result<Self, IdentifierError> {
        self.table = validate_identifier(table, "table")?.to_owned();
        Ok(self)
    }

    /// Read at most `limit` rows.
    pub fn with_limit(mut self, limit: Option<NonZeroU32>) -> Self {
        self.limit = limit;
        self
    }

    /// Database path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    fn source_name(&self) -> String {
        format!("{} ({})", self.path(), self.table())
    }
}

impl PlaceSource for SqlitePlaceSource {
    fn load_places(&self) -> Result<Vec<Place>, SourceError> {
        let connection = open_read_only(&self.path)?;
        let sql = match self.limit {
            Some(_) => format!("SELECT * FROM {} LIMIT ?1", self.table),
            None => format!("SELECT * FROM {}", self.table),
        };
        let mut statement = connection
            .prepare(&sql)
            .map_err(|err| SourceError::unavailable(self.source_name(), err))?;
        let headers: Vec<String> = statement
            .column_names()
            .into_iter()
            .map(str::to_owned)
            .collect();
        let columns = ColumnMap::from_headers(headers.iter().map(String::as_str));
        let missing = columns.missing_required();
        if !missing.is_empty() {
            return Err(SourceError::Layout {
                source_name: self.source_name(),
                reason: format!("missing column(s): {}", missing.join(", ")),
            });
        }

        let width = headers.len();
        let mut rows = match self.limit {
            Some(limit) => statement.query([limit.get()]),
            None => statement.query([]),
        }
        .map_err(|err| SourceError::unavailable(self.source_name(), err))?;

        let mut places = Vec::new();
        let mut skipped = 0_usize;
        loop {
            let row = match rows.next() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(err) => return Err(SourceError::unavailable(self.source_name(), err)),
            };
            let cells: Vec<Option<String>> = (0..width)
                .map(|position| row.get::<_, Value>(position).ok().and_then(value_text))
                .collect();
            match columns.place_from(|position| cells.get(position).and_then(Option::as_deref)) {
                Ok(place) => places.push(place),
                Err(err) => {
                    warn!("{}: skipping row: {err}", self.source_name());
                    skipped += 1;
                }
            }
        }
        debug!(
            "loaded {} place(s) from {} ({skipped} skipped)",
            places.len(),
            self.source_name()
        );
        Ok(places)
    }
}
