//! Fallback data used when no personalised signal exists.
#![forbid(unsafe_code)]

use wayfarer_core::Interaction;

/// Popular places returned to cold-start users, best first.
pub const DEFAULT_TOP_RATED: [u64; 10] = [101, 102, 103, 104, 105, 106, 107, 108, 109, 110];

const DEFAULT_INTERACTIONS: [(u64, u64); 12] = [
    (1, 101),
    (1, 102),
    (1, 103),
    (2, 101),
    (2, 104),
    (3, 102),
    (3, 103),
    (3, 105),
    (4, 104),
    (4, 106),
    (5, 101),
    (5, 107),
];

/// Fallback data injected into the recommender.
///
/// `top_rated` answers cold-start and exhausted requests; `interactions`
/// stands in for the live store when it is unreachable or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackConfig {
    /// Popular place identifiers, best first.
    pub top_rated: Vec<u64>,
    /// Interactions used in place of the live store.
    pub interactions: Vec<Interaction>,
}

impl FallbackConfig {
    /// Build a configuration from explicit lists.
    #[must_use]
    pub const fn new(top_rated: Vec<u64>, interactions: Vec<Interaction>) -> Self {
        Self {
            top_rated,
            interactions,
        }
    }

    /// The first `top_n` popular places.
    #[must_use]
    pub fn popular(&self, top_n: usize) -> Vec<u64> {
        self.top_rated.iter().take(top_n).copied().collect()
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOP_RATED.to_vec(),
            DEFAULT_INTERACTIONS
                .iter()
                .map(|&(user, place)| Interaction::click(user, place))
                .collect(),
        )
    }
}
