//! Selection between the live interaction store and the fallback set.
#![forbid(unsafe_code)]

use log::{debug, warn};
use wayfarer_core::{Interaction, InteractionSource, SourceError};

/// Interaction source backed by a fixed, in-memory set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackSource {
    interactions: Vec<Interaction>,
}

impl FallbackSource {
    /// Wrap a fixed interaction set.
    #[must_use]
    pub const fn new(interactions: Vec<Interaction>) -> Self {
        Self { interactions }
    }
}

impl InteractionSource for FallbackSource {
    fn load_interactions(&self) -> Result<Vec<Interaction>, SourceError> {
        Ok(self.interactions.clone())
    }

    fn describe(&self) -> String {
        String::from("fallback interactions")
    }
}

/// How the recommender chooses where interactions come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceStrategy {
    /// Read the live source; use the fallback set when it is missing,
    /// unreachable, or empty.
    #[default]
    PreferLive,
    /// Always use the fallback set.
    FallbackOnly,
}

/// Which source supplied a batch of interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedSource {
    /// The live store.
    Live,
    /// The fixed fallback set.
    Fallback,
}

/// Live and fallback sources plus the strategy choosing between them.
pub struct InteractionFeed {
    live: Option<Box<dyn InteractionSource>>,
    fallback: FallbackSource,
    strategy: SourceStrategy,
}

impl InteractionFeed {
    /// Assemble a feed.
    #[must_use]
    pub fn new(
        live: Option<Box<dyn InteractionSource>>,
        fallback: FallbackSource,
        strategy: SourceStrategy,
    ) -> Self {
        Self {
            live,
            fallback,
            strategy,
        }
    }

    /// Strategy in force.
    #[must_use]
    pub const fn strategy(&self) -> SourceStrategy {
        self.strategy
    }

    /// Load interactions according to the strategy.
    ///
    /// Live-store failures are logged and answered from the fallback set,
    /// so loading never fails.
    pub fn load(&self) -> (Vec<Interaction>, SelectedSource) {
        let live = match (self.strategy, self.live.as_deref()) {
            (SourceStrategy::PreferLive, Some(live)) => live,
            (SourceStrategy::PreferLive, None) | (SourceStrategy::FallbackOnly, _) => {
                return (self.fallback_interactions(), SelectedSource::Fallback);
            }
        };
        match live.load_interactions() {
            Ok(interactions) if !interactions.is_empty() => {
                debug!(
                    "loaded {} interaction(s) from {}",
                    interactions.len(),
                    live.describe()
                );
                (interactions, SelectedSource::Live)
            }
            Ok(_) => {
                warn!("{} returned no interactions; using fallback set", live.describe());
                (self.fallback_interactions(), SelectedSource::Fallback)
            }
            Err(err) => {
                warn!("{err}; using fallback set");
                (self.fallback_interactions(), SelectedSource::Fallback)
            }
        }
    }

    fn fallback_interactions(&self) -> Vec<Interaction> {
        self.fallback.interactions.clone()
    }
}

impl std::fmt::Debug for InteractionFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionFeed")
            .field("live", &self.live.as_ref().map(|live| live.describe()))
            .field("fallback", &self.fallback)
            .field("strategy", &self.strategy())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use wayfarer_core::test_support::{MemoryInteractions, UnreachableInteractions};

    use super::*;

    fn fallback() -> FallbackSource {
        FallbackSource::new(vec![Interaction::click(1, 101)])
    }

    #[rstest]
    fn live_rows_are_preferred() {
        let live = MemoryInteractions::from_pairs([(8, 800)]);
        let feed = InteractionFeed::new(Some(Box::new(live)), fallback(), SourceStrategy::PreferLive);
        let (rows, selected) = feed.load();
        assert_eq!(selected, SelectedSource::Live);
        assert_eq!(rows, vec![Interaction::click(8, 800)]);
    }

    #[rstest]
    fn unreachable_store_falls_back() {
        let feed = InteractionFeed::new(
            Some(Box::new(UnreachableInteractions)),
            fallback(),
            SourceStrategy::PreferLive,
        );
        assert_eq!(feed.load().1, SelectedSource::Fallback);
    }

    #[rstest]
    fn empty_store_falls_back() {
        let live = MemoryInteractions::from_pairs([]);
        let feed = InteractionFeed::new(Some(Box::new(live)), fallback(), SourceStrategy::PreferLive);
        let (rows, selected) = feed.load();
        assert_eq!(selected, SelectedSource::Fallback);
        assert_eq!(rows, vec![Interaction::click(1, 101)]);
    }

    #[rstest]
    #[case(SourceStrategy::PreferLive, None)]
    #[case(SourceStrategy::FallbackOnly, Some((8, 800)))]
    fn strategy_without_live_uses_fallback(
        #[case] strategy: SourceStrategy,
        #[case] live_pair: Option<(u64, u64)>,
    ) {
        let live = live_pair.map(|pair| {
            Box::new(MemoryInteractions::from_pairs([pair])) as Box<dyn InteractionSource>
        });
        let feed = InteractionFeed::new(live, fallback(), strategy);
        assert_eq!(feed.strategy(), strategy);
        assert_eq!(feed.load().1, SelectedSource::Fallback);
    }
}
