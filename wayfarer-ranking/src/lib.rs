//! Rating-weighted ranking of Wayfarer places.
//!
//! Every view builds on [`place_score`], which rewards review volume with
//! logarithmic dampening: `rating * (1 + log10(max(rating_count, 1)))`.
//! Three views are offered over a loaded place list:
//! - [`top_places`] returns the best places, optionally within one category.
//! - [`daily_recommendations`] picks the single best place per category and
//!   ranks those winners.
//! - [`nearest_places`] returns the places closest to a coordinate.
//!
//! Results convert into [`RankedPlace`] records for JSON output.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::Place;
//! use wayfarer_ranking::{CategoryFilter, RankedPlace, top_places};
//!
//! let places = vec![
//!     Place::builder("A", "Lau Pa Sat")
//!         .category("food")
//!         .rating(4.5)
//!         .rating_count(100)
//!         .build()
//!         .unwrap(),
//!     Place::builder("B", "New Stall")
//!         .category("food")
//!         .rating(5.0)
//!         .rating_count(1)
//!         .build()
//!         .unwrap(),
//! ];
//! let food = CategoryFilter::new("food").unwrap();
//! let ranked: Vec<RankedPlace<'_>> = top_places(&places, Some(&food), 2, 0)
//!     .into_iter()
//!     .map(RankedPlace::from)
//!     .collect();
//! assert_eq!(ranked[0].place_id, "A");
//! assert_eq!(ranked[0].score, 13.5);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod filter;
mod payload;
mod score;
mod views;

pub use error::RankingError;
pub use filter::CategoryFilter;
pub use payload::{JsonStyle, RankedPlace, render_json, write_ranking_file};
pub use score::{place_score, sort_places};
pub use views::{DailyPick, NearbyPlace, daily_recommendations, nearest_places, top_places};
