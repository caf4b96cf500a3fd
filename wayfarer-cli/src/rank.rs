//! Rank command implementation for the Wayfarer CLI.

use std::fmt;
use std::io::Write;
use std::num::NonZeroU32;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tracing::info;
use wayfarer_core::{Place, PlaceSource};
use wayfarer_data::{CsvPlaceSource, DEFAULT_PLACES_TABLE, SqlitePlaceSource};
use wayfarer_ranking::{
    CategoryFilter, JsonStyle, RankedPlace, daily_recommendations, nearest_places, render_json,
    top_places, write_ranking_file,
};

use crate::{
    ARG_CATEGORY, ARG_CSV, ARG_DB, ARG_LATITUDE, ARG_LIMIT, ARG_LONGITUDE, ARG_MIN_REVIEWS,
    ARG_MODE, ARG_OUTPUT, ARG_PRETTY, ARG_TABLE, ARG_TOPK, CliError, DEFAULT_CSV, ENV_LATITUDE,
    ENV_LONGITUDE,
};

const DEFAULT_TOPK: usize = 5;

/// Ranking view selected with `--mode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RankMode {
    /// Best place per category.
    #[default]
    Daily,
    /// Best places overall.
    Top,
    /// Closest places to a point.
    Nearby,
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load places from a CSV file (default places.csv) or, when \
                 --db is given, from a SQLite table, then print the selected \
                 ranking view as a JSON array.",
    about = "Rank places by rating and review volume"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct RankArgs {
    /// Path to the CSV dataset.
    #[arg(long = ARG_CSV, value_name = "path")]
    #[serde(default)]
    pub(crate) csv: Option<Utf8PathBuf>,
    /// Path to a SQLite database; takes precedence over `--csv`.
    #[arg(long = ARG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) db: Option<Utf8PathBuf>,
    /// Table holding place rows (default: places).
    #[arg(long = ARG_TABLE, value_name = "name")]
    #[serde(default)]
    pub(crate) table: Option<String>,
    /// Maximum number of rows read from the database.
    #[arg(long = ARG_LIMIT, value_name = "rows")]
    #[serde(default)]
    pub(crate) limit: Option<NonZeroU32>,
    /// Ranking view to compute.
    #[arg(long = ARG_MODE, value_enum, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<RankMode>,
    /// Restrict results to one category (case insensitive).
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Number of places to return.
    #[arg(long = ARG_TOPK, value_name = "count")]
    #[serde(default)]
    pub(crate) topk: Option<usize>,
    /// Minimum review count a place needs to qualify.
    #[arg(long = ARG_MIN_REVIEWS, value_name = "count")]
    #[serde(default)]
    pub(crate) min_reviews: Option<u32>,
    /// Latitude of the query point (nearby mode).
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the query point (nearby mode).
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Write the JSON payload to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Indent the JSON payload.
    #[arg(
        long = ARG_PRETTY,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) pretty: Option<bool>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Where `rank` reads its places from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlaceInput {
    Csv(Utf8PathBuf),
    Sqlite {
        path: Utf8PathBuf,
        table: String,
        limit: Option<NonZeroU32>,
    },
}

impl PlaceInput {
    fn path(&self) -> (&Utf8Path, &'static str) {
        match self {
            Self::Csv(path) => (path, ARG_CSV),
            Self::Sqlite { path, .. } => (path, ARG_DB),
        }
    }
}

impl fmt::Display for PlaceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(path) => write!(f, "CSV file {path}"),
            Self::Sqlite { path, table, .. } => write!(f, "table {table} of {path}"),
        }
    }
}

/// Ranking view with the inputs it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RankView {
    Daily,
    Top,
    Nearby { origin: Coord<f64> },
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) input: PlaceInput,
    pub(crate) view: RankView,
    pub(crate) category: Option<CategoryFilter>,
    pub(crate) topk: usize,
    pub(crate) min_reviews: u32,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) style: JsonStyle,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let (path, field) = self.input.path();
        require_existing(path, field)
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match wayfarer_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let input = match args.db {
            Some(path) => PlaceInput::Sqlite {
                path,
                table: args
                    .table
                    .unwrap_or_else(|| DEFAULT_PLACES_TABLE.to_owned()),
                limit: args.limit,
            },
            None => PlaceInput::Csv(args.csv.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CSV))),
        };

        let view = match args.mode.unwrap_or_default() {
            RankMode::Daily => RankView::Daily,
            RankMode::Top => RankView::Top,
            RankMode::Nearby => {
                let latitude = args.latitude.ok_or(CliError::MissingArgument {
                    field: ARG_LATITUDE,
                    env: ENV_LATITUDE,
                })?;
                let longitude = args.longitude.ok_or(CliError::MissingArgument {
                    field: ARG_LONGITUDE,
                    env: ENV_LONGITUDE,
                })?;
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(CliError::InvalidOrigin {
                        latitude,
                        longitude,
                    });
                }
                RankView::Nearby {
                    origin: Coord {
                        x: longitude,
                        y: latitude,
                    },
                }
            }
        };

        let category = args.category.map(CategoryFilter::new).transpose()?;

        Ok(Self {
            input,
            view,
            category,
            topk: args.topk.unwrap_or(DEFAULT_TOPK),
            min_reviews: args.min_reviews.unwrap_or(0),
            output: args.output,
            style: JsonStyle::from_flag(args.pretty.unwrap_or(false)),
        })
    }
}

/// Builds a place source for the current rank invocation.
pub(crate) trait PlaceSourceBuilder {
    fn build(&self, input: &PlaceInput) -> Result<Box<dyn PlaceSource>, CliError>;
}

pub(crate) struct DefaultPlaceSourceBuilder;

impl PlaceSourceBuilder for DefaultPlaceSourceBuilder {
    fn build(&self, input: &PlaceInput) -> Result<Box<dyn PlaceSource>, CliError> {
        match input {
            PlaceInput::Csv(path) => Ok(Box::new(CsvPlaceSource::new(path.clone()))),
            PlaceInput::Sqlite { path, table, limit } => {
                let source = SqlitePlaceSource::new(path.clone())
                    .with_table(table)
                    .map_err(|source| CliError::InvalidTable {
                        field: ARG_TABLE,
                        source,
                    })?
                    .with_limit(*limit);
                Ok(Box::new(source))
            }
        }
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &DefaultPlaceSourceBuilder, &mut stdout)
}

pub(crate) fn run_rank_with(
    args: RankArgs,
    builder: &dyn PlaceSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let source = builder.build(&config.input)?;
    let mut places = source
        .load_places()
        .map_err(|source| CliError::LoadPlaces { source })?;
    if places.is_empty() {
        return Err(CliError::NoPlaces {
            origin: config.input.to_string(),
        });
    }
    info!(count = places.len(), input = %config.input, "loaded places");

    // Daily picks span every category, so a filter narrows the input instead.
    if let (RankView::Daily, Some(filter)) = (config.view, config.category.as_ref()) {
        places.retain(|place| filter.matches(place));
    }
    let records = rank_records(&places, &config);
    emit_records(&records, &config, writer)
}

fn rank_records<'a>(places: &'a [Place], config: &RankConfig) -> Vec<RankedPlace<'a>> {
    let category = config.category.as_ref();
    match config.view {
        RankView::Daily => daily_recommendations(places, config.topk, config.min_reviews)
            .into_iter()
            .map(RankedPlace::from)
            .collect(),
        RankView::Top => top_places(places, category, config.topk, config.min_reviews)
            .into_iter()
            .map(RankedPlace::from)
            .collect(),
        RankView::Nearby { origin } => {
            nearest_places(places, origin, category, config.topk, config.min_reviews)
                .into_iter()
                .map(RankedPlace::from)
                .collect()
        }
    }
}

fn emit_records(
    records: &[RankedPlace<'_>],
    config: &RankConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(path) = &config.output {
        write_ranking_file(path, records, config.style)?;
        info!(%path, count = records.len(), "wrote ranking");
        return Ok(());
    }
    let payload = render_json(records, config.style)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
