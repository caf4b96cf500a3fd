//! Rating-weighted popularity score and the canonical ranking order.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use wayfarer_core::Place;

/// Popularity score of a place.
///
/// `score = rating * (1 + log10(max(rating_count, 1)))`, so review volume is
/// rewarded with logarithmic dampening. Unrated places score `0.0`.
///
/// # Examples
/// ```
/// use wayfarer_core::Place;
/// use wayfarer_ranking::place_score;
///
/// let place = Place::builder("a", "Chinatown Complex")
///     .rating(4.5)
///     .rating_count(100)
///     .build()
///     .unwrap();
/// assert!((place_score(&place) - 13.5).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the score is a weighted product of the rating"
)]
pub fn place_score(place: &Place) -> f64 {
    let Some(rating) = place.rating else {
        return 0.0;
    };
    let count = f64::from(place.rating_count.max(1));
    rating * (1.0 + count.log10())
}

/// Descending ranking comparator over `(score, rating, rating_count)`.
///
/// Unrated places sort below any rated place with the same score.
pub(crate) fn rank_order(a: &Place, b: &Place) -> Ordering {
    place_score(b)
        .total_cmp(&place_score(a))
        .then_with(|| rating_key(b).total_cmp(&rating_key(a)))
        .then_with(|| b.rating_count.cmp(&a.rating_count))
}

fn rating_key(place: &Place) -> f64 {
    place.rating.unwrap_or(f64::NEG_INFINITY)
}

/// Sort places best-first.
///
/// The order is descending by score, then raw rating, then rating count. The
/// sort is stable: places that tie on all three keep their input order.
#[must_use]
pub fn sort_places<'a, I>(places: I) -> Vec<&'a Place>
where
    I: IntoIterator<Item = &'a Place>,
{
    let mut ranked: Vec<&Place> = places.into_iter().collect();
    ranked.sort_by(|a, b| rank_order(a, b));
    ranked
}
