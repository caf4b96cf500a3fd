//! Neighbourhood-based collaborative filtering.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use log::debug;
use wayfarer_core::InteractionSource;

use crate::{
    FallbackConfig, FallbackSource, InteractionFeed, RecommendError, SelectedSource,
    SimilarityMatrix, SourceStrategy, UserItemMatrix,
};

/// User-based collaborative filter.
///
/// Each request rebuilds the user-item and similarity matrices from a fresh
/// interaction load, so a shared instance serves concurrent callers without
/// locking.
///
/// # Examples
/// ```
/// use wayfarer_cf::{CollaborativeFilter, FallbackConfig, SourceStrategy};
/// use wayfarer_core::Interaction;
///
/// let config = FallbackConfig::new(
///     vec![900, 901, 902],
///     vec![
///         Interaction::click(1, 101),
///         Interaction::click(1, 102),
///         Interaction::click(2, 101),
///     ],
/// );
/// let filter = CollaborativeFilter::new(None, config, SourceStrategy::FallbackOnly);
/// assert_eq!(filter.recommend_for_user(2, 5).unwrap(), vec![102]);
/// assert_eq!(filter.recommend_for_user(999, 2).unwrap(), vec![900, 901]);
/// ```
#[derive(Debug)]
pub struct CollaborativeFilter {
    feed: InteractionFeed,
    fallback: FallbackConfig,
}

impl CollaborativeFilter {
    /// Build a filter over an optional live source.
    #[must_use]
    pub fn new(
        live: Option<Box<dyn InteractionSource>>,
        fallback: FallbackConfig,
        strategy: SourceStrategy,
    ) -> Self {
        let fallback_source = FallbackSource::new(fallback.interactions.clone());
        Self {
            feed: InteractionFeed::new(live, fallback_source, strategy),
            fallback,
        }
    }

    /// Recommend up to `top_n` places `user_id` has not interacted with.
    ///
    /// Users unknown to the interaction matrix, users without a positively
    /// similar neighbour, and users whose neighbours offer nothing new all
    /// receive the first `top_n` fallback places.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidUserId`] or
    /// [`RecommendError::InvalidCount`] for non-positive inputs, and
    /// [`RecommendError::Computation`] when similarity computation fails.
    pub fn recommend_for_user(
        &self,
        user_id: i64,
        top_n: i64,
    ) -> Result<Vec<u64>, RecommendError> {
        let user = u64::try_from(user_id)
            .ok()
            .filter(|&id| id > 0)
            .ok_or(RecommendError::InvalidUserId { user_id })?;
        let count = usize::try_from(top_n)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(RecommendError::InvalidCount { top_n })?;

        let (interactions, selected) = self.feed.load();
        let matrix = UserItemMatrix::from_interactions(&interactions);
        if !matrix.contains_user(user) {
            debug!(
                "user {user} is unknown to the {}; serving popular places",
                source_label(selected)
            );
            return Ok(self.fallback.popular(count));
        }

        let similarities = SimilarityMatrix::compute(&matrix)
            .map_err(|source| RecommendError::Computation { source })?;
        let neighbours = similarities.neighbours(user);
        if neighbours.is_empty() {
            debug!("user {user} has no similar users; serving popular places");
            return Ok(self.fallback.popular(count));
        }

        let ranked = aggregate(&matrix, user, &neighbours, count);
        if ranked.is_empty() {
            debug!("neighbours of user {user} offer nothing new; serving popular places");
            return Ok(self.fallback.popular(count));
        }
        debug!(
            "recommended {} place(s) to user {user} from {} neighbour(s) ({})",
            ranked.len(),
            neighbours.len(),
            source_label(selected)
        );
        Ok(ranked)
    }
}

const fn source_label(selected: SelectedSource) -> &'static str {
    match selected {
        SelectedSource::Live => "live interactions",
        SelectedSource::Fallback => "fallback interactions",
    }
}

/// Sum neighbour similarities per unseen item and keep the best `count`.
///
/// Scores are raw sums, neither normalised by neighbour count nor capped.
/// Equal scores order by ascending place identifier.
#[expect(
    clippy::float_arithmetic,
    reason = "recommendation scores accumulate similarity weights"
)]
fn aggregate(
    matrix: &UserItemMatrix,
    user: u64,
    neighbours: &[(u64, f64)],
    count: usize,
) -> Vec<u64> {
    let seen = matrix.items_for(user);
    let mut scores: HashMap<u64, f64> = HashMap::new();
    for &(neighbour, similarity) in neighbours {
        for item in matrix.items_for(neighbour) {
            if !seen.contains(&item) {
                *scores.entry(item).or_insert(0.0) += similarity;
            }
        }
    }
    let mut ranked: Vec<(u64, f64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(count).map(|(item, _)| item).collect()
}
