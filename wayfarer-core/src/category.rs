//! The fixed category taxonomy places are tagged with.
//!
//! Category labels travel as plain strings on [`Place`](crate::Place) so that
//! data from older exports still ranks; this enum names the labels the
//! pipeline itself produces.
//!
//! # Examples
//! ```
//! use wayfarer_core::Category;
//!
//! assert_eq!(Category::FoodAndBeverage.as_str(), "Food and Beverage");
//! assert_eq!("shopping".parse::<Category>(), Ok(Category::Shopping));
//! ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Restaurants, cafes, bars and other food outlets.
    FoodAndBeverage,
    /// Temples, churches, mosques and cemeteries.
    PlaceOfWorship,
    /// Hotels, hostels and other lodging.
    StaysAndAccommodations,
    /// Museums, parks, zoos and landmarks.
    AttractionsAndActivities,
    /// Malls, markets and stores.
    Shopping,
    /// Gyms, spas and stadiums.
    SportsAndWellness,
    /// Anything the taxonomy does not cover.
    Others,
}

impl Category {
    /// Every category, in the priority order used by keyword tagging.
    pub const ALL: [Self; 7] = [
        Self::FoodAndBeverage,
        Self::PlaceOfWorship,
        Self::StaysAndAccommodations,
        Self::AttractionsAndActivities,
        Self::Shopping,
        Self::SportsAndWellness,
        Self::Others,
    ];

    /// Return the display label stored on places.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndBeverage => "Food and Beverage",
            Self::PlaceOfWorship => "Place of Worship",
            Self::StaysAndAccommodations => "Stays & Accommodations",
            Self::AttractionsAndActivities => "Attractions & Activities",
            Self::Shopping => "Shopping",
            Self::SportsAndWellness => "Sports & Wellness",
            Self::Others => "Others",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}
