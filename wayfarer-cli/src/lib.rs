//! Command-line interface for the Wayfarer recommendation engine.
//!
//! Three subcommands are exposed:
//! - `rank` loads places from CSV or SQLite and prints a ranking view as JSON;
//! - `recommend` prints collaborative-filtering picks for one user;
//! - `serve` runs the HTTP recommendation service.
//!
//! Every option can also be supplied through `WAYFARER_`-prefixed environment
//! variables or configuration files via `ortho_config`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod interactions;
mod rank;
mod recommend;
mod serve;

pub use error::CliError;

use rank::{RankArgs, run_rank};
use recommend::{RecommendArgs, run_recommend};
use serve::{ServeArgs, run_serve};

const ARG_CSV: &str = "csv";
const ARG_DB: &str = "db";
const ARG_TABLE: &str = "table";
const ARG_LIMIT: &str = "limit";
const ARG_MODE: &str = "mode";
const ARG_CATEGORY: &str = "category";
const ARG_TOPK: &str = "topk";
const ARG_MIN_REVIEWS: &str = "min-reviews";
const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_OUTPUT: &str = "output";
const ARG_PRETTY: &str = "pretty";
const ARG_USER_ID: &str = "user-id";
const ARG_TOP_N: &str = "top-n";
const ARG_INTERACTIONS_DB: &str = "interactions-db";
const ARG_INTERACTIONS_TABLE: &str = "interactions-table";
const ARG_BIND: &str = "bind";
const ENV_LATITUDE: &str = "WAYFARER_CMDS_RANK_LATITUDE";
const ENV_LONGITUDE: &str = "WAYFARER_CMDS_RANK_LONGITUDE";
const ENV_USER_ID: &str = "WAYFARER_CMDS_RECOMMEND_USER_ID";

/// Default CSV dataset read by `rank` when no source is configured.
const DEFAULT_CSV: &str = "places.csv";

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, data
/// loading, or the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Serve(args) => run_serve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Rank places and serve recommendations for the Wayfarer engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank places from a CSV file or SQLite table.
    Rank(RankArgs),
    /// Recommend places for one user from recorded interactions.
    Recommend(RecommendArgs),
    /// Serve recommendations over HTTP.
    Serve(ServeArgs),
}

#[cfg(test)]
mod tests;
