//! The three ranking views: top-K, one pick per category, and nearest-K.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use geo::Coord;
use log::debug;
use wayfarer_core::{Place, haversine_km};

use crate::filter::{CategoryFilter, admits};
use crate::score::{place_score, rank_order, sort_places};

/// The best place of one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPick<'a> {
    /// Category label the pick won.
    pub category: &'a str,
    /// Winning place.
    pub place: &'a Place,
}

/// A place paired with its distance from the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyPlace<'a> {
    /// Candidate place.
    pub place: &'a Place,
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
}

const fn meets_review_threshold(place: &Place, min_reviews: u32) -> bool {
    place.rating_count >= min_reviews
}

/// Return the best `topk` rated places, optionally within one category.
///
/// Places without a rating or with fewer than `min_reviews` ratings are
/// dropped. Fewer than `topk` results are returned when not enough places
/// qualify.
#[must_use]
pub fn top_places<'a>(
    places: &'a [Place],
    category: Option<&CategoryFilter>,
    topk: usize,
    min_reviews: u32,
) -> Vec<&'a Place> {
    let qualifying = places.iter().filter(|place| {
        admits(category, place)
            && place.rating.is_some()
            && meets_review_threshold(place, min_reviews)
    });
    let mut ranked = sort_places(qualifying);
    ranked.truncate(topk);
    debug!(
        "top places: {} result(s) for category {:?}",
        ranked.len(),
        category.map(CategoryFilter::as_str)
    );
    ranked
}

/// Pick the single best place per category, then return the best `topk` picks.
///
/// Categories with no qualifying place are absent from the output. Picks that
/// tie on score keep the order in which their categories first appeared.
#[must_use]
pub fn daily_recommendations(
    places: &[Place],
    topk: usize,
    min_reviews: u32,
) -> Vec<DailyPick<'_>> {
    let mut bucket_index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(&str, Vec<&Place>)> = Vec::new();
    for place in places {
        if place.rating.is_none() || !meets_review_threshold(place, min_reviews) {
            continue;
        }
        let category = place.category.as_str();
        let slot = match bucket_index.get(category) {
            Some(&existing) => existing,
            None => {
                let created = buckets.len();
                bucket_index.insert(category, created);
                buckets.push((category, Vec::new()));
                created
            }
        };
        if let Some((_, members)) = buckets.get_mut(slot) {
            members.push(place);
        }
    }

    let mut picks: Vec<DailyPick<'_>> = buckets
        .into_iter()
        .filter_map(|(category, members)| {
            best_of(&members).map(|place| DailyPick { category, place })
        })
        .collect();
    picks.sort_by(|a, b| place_score(b.place).total_cmp(&place_score(a.place)));
    picks.truncate(topk);
    debug!("daily recommendations: {} category pick(s)", picks.len());
    picks
}

/// Return the `topk` places closest to `origin`.
///
/// `origin` uses `x = longitude`, `y = latitude`. Ratings are not required,
/// but places without coordinates are skipped. Results are ordered by
/// ascending distance, then by descending score.
#[must_use]
pub fn nearest_places<'a>(
    places: &'a [Place],
    origin: Coord<f64>,
    category: Option<&CategoryFilter>,
    topk: usize,
    min_reviews: u32,
) -> Vec<NearbyPlace<'a>> {
    let mut candidates: Vec<NearbyPlace<'a>> = places
        .iter()
        .filter(|place| admits(category, place) && meets_review_threshold(place, min_reviews))
        .filter_map(|place| {
            place.location.map(|location| NearbyPlace {
                place,
                distance_km: haversine_km(origin, location),
            })
        })
        .collect();
    candidates.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| place_score(b.place).total_cmp(&place_score(a.place)))
    });
    candidates.truncate(topk);
    candidates
}

/// First place in ranking order; ties resolve to the earliest member.
fn best_of<'a>(members: &[&'a Place]) -> Option<&'a Place> {
    members.iter().copied().min_by(|a, b| rank_order(a, b))
}
