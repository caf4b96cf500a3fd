//! Interaction store selection shared by `recommend` and `serve`.

use camino::Utf8PathBuf;
use tracing::info;
use wayfarer_cf::{CollaborativeFilter, FallbackConfig, SourceStrategy};
use wayfarer_data::{DEFAULT_INTERACTIONS_TABLE, SqliteInteractionSource};

use crate::{ARG_INTERACTIONS_TABLE, CliError};

/// Location of the live interaction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InteractionStore {
    /// SQLite database holding interactions.
    pub(crate) path: Utf8PathBuf,
    /// Table name inside the database.
    pub(crate) table: String,
}

impl InteractionStore {
    /// Resolve the merged options; no database means fallback data only.
    pub(crate) fn from_parts(db: Option<Utf8PathBuf>, table: Option<String>) -> Option<Self> {
        db.map(|path| Self {
            path,
            table: table.unwrap_or_else(|| DEFAULT_INTERACTIONS_TABLE.to_owned()),
        })
    }
}

/// Builds the recommender for the current invocation.
pub(crate) trait FilterBuilder {
    fn build(&self, store: Option<&InteractionStore>) -> Result<CollaborativeFilter, CliError>;
}

pub(crate) struct DefaultFilterBuilder;

impl FilterBuilder for DefaultFilterBuilder {
    fn build(&self, store: Option<&InteractionStore>) -> Result<CollaborativeFilter, CliError> {
        let Some(store) = store else {
            info!("no interaction store configured, using fallback interactions");
            return Ok(CollaborativeFilter::new(
                None,
                FallbackConfig::default(),
                SourceStrategy::FallbackOnly,
            ));
        };
        let live = SqliteInteractionSource::new(store.path.clone())
            .with_table(&store.table)
            .map_err(|source| CliError::InvalidTable {
                field: ARG_INTERACTIONS_TABLE,
                source,
            })?;
        info!(path = %store.path, table = %store.table, "reading live interactions");
        Ok(CollaborativeFilter::new(
            Some(Box::new(live)),
            FallbackConfig::default(),
            SourceStrategy::PreferLive,
        ))
    }
}
