//! Live interaction store backed by an `SQLite` table.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use rusqlite::types::Value;
use wayfarer_core::{Interaction, InteractionKind, InteractionSource, SourceError};

use crate::identifiers::{IdentifierError, validate_identifier};
use crate::sqlite::{open_read_only, positive_id};

/// Table read when none is configured.
pub const DEFAULT_INTERACTIONS_TABLE: &str = "interactions";

/// Reads `(user_id, place_id, interaction_type)` rows.
///
/// A fresh connection is opened for every load so concurrent recommendation
/// requests never share database state. Rows whose identifiers are not
/// positive integers are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteInteractionSource {
    path: Utf8PathBuf,
    table: String,
}

impl SqliteInteractionSource {
    /// Create a source reading [`DEFAULT_INTERACTIONS_TABLE`].
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: DEFAULT_INTERACTIONS_TABLE.to_owned(),
        }
    }

    /// Read from `table` instead of the default.
    ///
    /// # Errors
    /// Returns [`IdentifierError`] for unsafe table names.
    pub fn with_table(mut self, table: &str) -> Result<Self, IdentifierError> {
        self.table = validate_identifier(table, "table")?.to_owned();
        Ok(self)
    }

    /// Database path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl InteractionSource for SqliteInteractionSource {
    fn load_interactions(&self) -> Result<Vec<Interaction>, SourceError> {
        let connection = open_read_only(&self.path)?;
        let sql = format!(
            "SELECT user_id, place_id, interaction_type FROM {}",
            self.table
        );
        let mut statement = connection
            .prepare(&sql)
            .map_err(|err| SourceError::unavailable(self.describe(), err))?;
        let rows = statement
            .query_map([], |row| {
                Ok((
                    row.get::<_, Value>(0)?,
                    row.get::<_, Value>(1)?,
                    row.get::<_, Value>(2)?,
                ))
            })
            .map_err(|err| SourceError::unavailable(self.describe(), err))?;

        let mut interactions = Vec::new();
        let mut skipped = 0_usize;
        for row in rows {
            let (user, place, kind) =
                row.map_err(|err| SourceError::unavailable(self.describe(), err))?;
            let (Some(user_id), Some(place_id)) = (positive_id(&user), positive_id(&place)) else {
                skipped += 1;
                continue;
            };
            let kind = match kind {
                Value::Text(label) => InteractionKind::from_label(&label),
                _ => InteractionKind::Other,
            };
            interactions.push(Interaction::new(user_id, place_id, kind));
        }
        if skipped > 0 {
            warn!(
                "{}: skipped {skipped} row(s) without positive identifiers",
                self.describe()
            );
        }
        debug!(
            "loaded {} interaction(s) from {}",
            interactions.len(),
            self.describe()
        );
        Ok(interactions)
    }

    fn describe(&self) -> String {
        format!("SQLite interactions at {} ({})", self.path(), self.table)
    }
}
