//! Recommend command implementation for the Wayfarer CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfarer_service::DEFAULT_TOP_N;

use crate::interactions::{DefaultFilterBuilder, FilterBuilder, InteractionStore};
use crate::{
    ARG_INTERACTIONS_DB, ARG_INTERACTIONS_TABLE, ARG_TOP_N, ARG_USER_ID, CliError, ENV_USER_ID,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute collaborative-filtering recommendations for one \
                 user. Interactions are read from a SQLite table when \
                 --interactions-db is given; otherwise, or when that store \
                 is unusable, built-in fallback interactions are used.",
    about = "Recommend places for a user"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct RecommendArgs {
    /// Identifier of the user to recommend for.
    #[arg(long = ARG_USER_ID, value_name = "id", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) user_id: Option<i64>,
    /// Maximum number of recommendations (default: 5).
    #[arg(long = ARG_TOP_N, value_name = "count", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) top_n: Option<i64>,
    /// SQLite database holding recorded interactions.
    #[arg(long = ARG_INTERACTIONS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) interactions_db: Option<Utf8PathBuf>,
    /// Table holding interaction rows (default: interactions).
    #[arg(long = ARG_INTERACTIONS_TABLE, value_name = "name")]
    #[serde(default)]
    pub(crate) interactions_table: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) user_id: i64,
    pub(crate) top_n: i64,
    pub(crate) store: Option<InteractionStore>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let user_id = args.user_id.ok_or(CliError::MissingArgument {
            field: ARG_USER_ID,
            env: ENV_USER_ID,
        })?;
        Ok(Self {
            user_id,
            top_n: args.top_n.unwrap_or(DEFAULT_TOP_N),
            store: InteractionStore::from_parts(args.interactions_db, args.interactions_table),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &DefaultFilterBuilder, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn FilterBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let filter = builder.build(config.store.as_ref())?;
    let picks = filter.recommend_for_user(config.user_id, config.top_n)?;
    debug!(user_id = config.user_id, count = picks.len(), "computed recommendations");
    let payload = serde_json::to_string(&picks).map_err(CliError::SerialiseRecommendations)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
