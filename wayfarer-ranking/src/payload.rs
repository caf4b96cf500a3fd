//! Serialisable result records and JSON emission.
#![forbid(unsafe_code)]

use std::io::{BufWriter, Write};

use camino::Utf8Path;
use serde::Serialize;
use wayfarer_core::Place;
use wayfarer_fs::{create_utf8_file, ensure_parent_dir};

use crate::RankingError;
use crate::score::place_score;
use crate::views::{DailyPick, NearbyPlace};

const SCORE_DECIMALS: usize = 4;
const DISTANCE_DECIMALS: usize = 3;

/// One ranked place as emitted to callers.
///
/// `score` is rounded to four decimal places and `distance_km` to three.
/// `distance_km` is only present for nearest-place queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlace<'a> {
    /// Place identifier.
    pub place_id: &'a str,
    /// Display name.
    pub name: &'a str,
    /// Category label.
    pub category: &'a str,
    /// WGS84 latitude, if known.
    pub latitude: Option<f64>,
    /// WGS84 longitude, if known.
    pub longitude: Option<f64>,
    /// Average rating.
    pub rating: Option<f64>,
    /// Number of ratings.
    pub user_ratings_total: u32,
    /// Price level, if known.
    pub price_level: Option<u8>,
    /// Postal address.
    pub formatted_address: &'a str,
    /// Rounded popularity score.
    pub score: f64,
    /// Rounded distance from the query point in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl<'a> RankedPlace<'a> {
    /// Build a record without a distance.
    #[must_use]
    pub fn from_place(place: &'a Place) -> Self {
        Self {
            place_id: &place.id,
            name: &place.name,
            category: &place.category,
            latitude: place.latitude(),
            longitude: place.longitude(),
            rating: place.rating,
            user_ratings_total: place.rating_count,
            price_level: place.price_level,
            formatted_address: &place.formatted_address,
            score: round_to(place_score(place), SCORE_DECIMALS),
            distance_km: None,
        }
    }
}

impl<'a> From<&'a Place> for RankedPlace<'a> {
    fn from(place: &'a Place) -> Self {
        Self::from_place(place)
    }
}

impl<'a> From<DailyPick<'a>> for RankedPlace<'a> {
    fn from(pick: DailyPick<'a>) -> Self {
        Self::from_place(pick.place)
    }
}

impl<'a> From<NearbyPlace<'a>> for RankedPlace<'a> {
    fn from(hit: NearbyPlace<'a>) -> Self {
        Self {
            distance_km: Some(round_to(hit.distance_km, DISTANCE_DECIMALS)),
            ..Self::from_place(hit.place)
        }
    }
}

/// Layout of emitted JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Single-line output.
    #[default]
    Compact,
    /// Indented output.
    Pretty,
}

impl JsonStyle {
    /// Select [`JsonStyle::Pretty`] when `pretty` is set.
    #[must_use]
    pub const fn from_flag(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Compact }
    }
}

/// Round to `decimals` places from the exact binary value of `value`.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Render `records` as a JSON array.
///
/// # Errors
/// Returns [`RankingError::Serialise`] when encoding fails.
pub fn render_json(records: &[RankedPlace<'_>], style: JsonStyle) -> Result<String, RankingError> {
    let rendered = match style {
        JsonStyle::Compact => serde_json::to_string(records),
        JsonStyle::Pretty => serde_json::to_string_pretty(records),
    };
    rendered.map_err(|source| RankingError::Serialise { source })
}

/// Write `records` to `output_path` as a JSON array followed by a newline.
///
/// Missing parent directories are created.
///
/// # Errors
/// Returns [`RankingError`] when the directory or file cannot be created, or
/// when encoding fails.
pub fn write_ranking_file(
    output_path: &Utf8Path,
    records: &[RankedPlace<'_>],
    style: JsonStyle,
) -> Result<(), RankingError> {
    ensure_parent_dir(output_path).map_err(|source| RankingError::CreateParent {
        path: output_path
            .parent()
            .map_or_else(|| Utf8Path::new(".").to_path_buf(), Utf8Path::to_path_buf),
        source,
    })?;
    let file = create_utf8_file(output_path).map_err(|source| RankingError::WriteFile {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let encoded = match style {
        JsonStyle::Compact => serde_json::to_writer(&mut writer, records),
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, records),
    };
    encoded.map_err(|source| RankingError::Serialise { source })?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .map_err(|source| RankingError::WriteFile {
            path: output_path.to_path_buf(),
            source,
        })
}
