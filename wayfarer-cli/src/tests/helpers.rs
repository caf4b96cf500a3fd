//! Test helpers for composing rank datasets and stub builders.

use std::cell::RefCell;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use wayfarer_cf::{CollaborativeFilter, FallbackConfig, SourceStrategy};
use wayfarer_core::test_support::{MemoryInteractions, MemoryPlaces, rated_place};
use wayfarer_core::{Place, PlaceSource};

use super::*;
use crate::interactions::{FilterBuilder, InteractionStore};
use crate::rank::{PlaceInput, PlaceSourceBuilder};

pub(super) const PLACES_CSV: &str = "\
place_id,name,category,latitude,longitude,rating,user_ratings_total,price_level,formatted_address
m1,Lau Pa Sat,Food and Beverage,1.2806,103.8504,4.3,21000,1,18 Raffles Quay
m2,Sri Mariamman Temple,Place of Worship,1.2826,103.8452,4.6,9000,,244 South Bridge Rd
m3,National Museum,Attractions & Activities,1.2966,103.8485,4.7,12000,2,93 Stamford Rd
m4,Hawker Kiosk,Food and Beverage,1.3000,103.8000,4.9,3,,
m5,Unrated Stall,Shopping,1.2900,103.8500,,,,
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write file");
}

pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn seed_places_db(path: &Utf8Path) {
    let conn = rusqlite::Connection::open(path.as_std_path()).expect("open db");
    conn.execute_batch(
        "CREATE TABLE places (
            place_id TEXT, name TEXT, category TEXT, latitude REAL,
            longitude REAL, rating REAL, user_ratings_total INTEGER,
            price_level INTEGER, formatted_address TEXT
         );
         INSERT INTO places VALUES
            ('d1', 'Merlion Park', 'Attractions & Activities', 1.2868, 103.8545, 4.7, 60000, NULL, 'One Fullerton'),
            ('d2', 'Maxwell Food Centre', 'Food and Beverage', 1.2803, 103.8447, 4.4, 15000, 1, '1 Kadayanallur St'),
            ('d3', 'Thian Hock Keng', 'Place of Worship', 1.2807, 103.8474, 4.6, 4000, NULL, '158 Telok Ayer St');",
    )
    .expect("seed places");
}

pub(super) fn seed_interactions_db(path: &Utf8Path) {
    let conn = rusqlite::Connection::open(path.as_std_path()).expect("open db");
    conn.execute_batch(
        "CREATE TABLE interactions (user_id INTEGER, place_id INTEGER, interaction_type TEXT);
         INSERT INTO interactions VALUES
            (1, 101, 'click'),
            (1, 102, 'save'),
            (2, 101, 'click');",
    )
    .expect("seed interactions");
}

pub(super) fn parse(argv: &[&str]) -> Result<Command, CliError> {
    Cli::try_parse_from(argv)
        .map(|cli| cli.command)
        .map_err(CliError::from)
}

/// Serves a fixed set of places and records the input it was asked for.
#[derive(Debug, Default)]
pub(super) struct StaticPlaceBuilder {
    places: Vec<Place>,
    pub(super) requested: RefCell<Option<PlaceInput>>,
}

impl StaticPlaceBuilder {
    pub(super) fn new(places: Vec<Place>) -> Self {
        Self {
            places,
            requested: RefCell::new(None),
        }
    }

    pub(super) fn city() -> Self {
        Self::new(vec![
            rated_place("c1", "Food and Beverage", Some(4.5), 100, (1.30, 103.80)),
            rated_place("c2", "Food and Beverage", Some(4.0), 1000, (1.31, 103.81)),
            rated_place("c3", "Shopping", Some(4.8), 10, (1.35, 103.90)),
            rated_place("c4", "Others", None, 0, (1.3001, 103.8001)),
        ])
    }
}

impl PlaceSourceBuilder for StaticPlaceBuilder {
    fn build(&self, input: &PlaceInput) -> Result<Box<dyn PlaceSource>, CliError> {
        self.requested.replace(Some(input.clone()));
        Ok(Box::new(MemoryPlaces::with_places(self.places.clone())))
    }
}

/// Builds a filter over in-memory click pairs, ignoring the configured store.
#[derive(Debug, Default)]
pub(super) struct MemoryFilterBuilder {
    pub(super) pairs: Vec<(u64, u64)>,
    pub(super) requested: RefCell<Option<Option<InteractionStore>>>,
}

impl FilterBuilder for MemoryFilterBuilder {
    fn build(&self, store: Option<&InteractionStore>) -> Result<CollaborativeFilter, CliError> {
        self.requested.replace(Some(store.cloned()));
        Ok(CollaborativeFilter::new(
            Some(Box::new(MemoryInteractions::from_pairs(self.pairs.clone()))),
            FallbackConfig::new(vec![901, 902, 903, 904, 905, 906], Vec::new()),
            SourceStrategy::PreferLive,
        ))
    }
}
