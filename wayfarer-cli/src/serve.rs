//! Serve command implementation for the Wayfarer CLI.

use std::net::SocketAddr;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_service::AppState;

use crate::interactions::{DefaultFilterBuilder, FilterBuilder, InteractionStore};
use crate::{ARG_BIND, ARG_INTERACTIONS_DB, ARG_INTERACTIONS_TABLE, CliError};

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Run the HTTP recommendation service exposing /health and \
                 /recommend until interrupted with Ctrl-C.",
    about = "Serve recommendations over HTTP"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct ServeArgs {
    /// Address to listen on (default: 127.0.0.1:8000).
    #[arg(long = ARG_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<SocketAddr>,
    /// SQLite database holding recorded interactions.
    #[arg(long = ARG_INTERACTIONS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) interactions_db: Option<Utf8PathBuf>,
    /// Table holding interaction rows (default: interactions).
    #[arg(long = ARG_INTERACTIONS_TABLE, value_name = "name")]
    #[serde(default)]
    pub(crate) interactions_table: Option<String>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ServeConfig::from(merged))
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    pub(crate) bind: SocketAddr,
    pub(crate) store: Option<InteractionStore>,
}

impl From<ServeArgs> for ServeConfig {
    fn from(args: ServeArgs) -> Self {
        let bind = args.bind.unwrap_or_else(default_bind);
        Self {
            bind,
            store: InteractionStore::from_parts(args.interactions_db, args.interactions_table),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

pub(crate) fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let filter = DefaultFilterBuilder.build(config.store.as_ref())?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(wayfarer_service::serve(config.bind, AppState::new(filter)))?;
    Ok(())
}
