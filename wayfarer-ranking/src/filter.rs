//! Validated category filter shared by the ranking views.
#![forbid(unsafe_code)]

use wayfarer_core::Place;

use crate::RankingError;

/// Case-insensitive category filter.
///
/// Construction rejects blank labels so a malformed filter never silently
/// matches nothing.
///
/// # Examples
/// ```
/// use wayfarer_ranking::CategoryFilter;
///
/// let filter = CategoryFilter::new("food and beverage").unwrap();
/// assert_eq!(filter.as_str(), "food and beverage");
/// assert!(CategoryFilter::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    label: String,
}

impl CategoryFilter {
    /// Validate and build a filter from a category label.
    ///
    /// # Errors
    /// Returns [`RankingError::BlankCategory`] when the label is empty or
    /// whitespace.
    pub fn new(label: impl Into<String>) -> Result<Self, RankingError> {
        let raw = label.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RankingError::BlankCategory);
        }
        Ok(Self {
            label: trimmed.to_lowercase(),
        })
    }

    /// Return the normalised (lowercase) label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Report whether `place` falls in this category.
    #[must_use]
    pub fn matches(&self, place: &Place) -> bool {
        place.matches_category(Some(&self.label))
    }
}

/// Apply an optional filter; `None` admits every place.
pub(crate) fn admits(filter: Option<&CategoryFilter>, place: &Place) -> bool {
    filter.is_none_or(|wanted| wanted.matches(place))
}
