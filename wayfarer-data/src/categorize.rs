//! Keyword tagging of provider place types into the category taxonomy.
#![forbid(unsafe_code)]

use wayfarer_core::Category;

const FOOD: &[&str] = &[
    "bakery",
    "bar",
    "cafe",
    "food",
    "liquor_store",
    "meal_delivery",
    "meal_takeaway",
    "night_club",
    "restaurant",
];
const WORSHIP: &[&str] = &[
    "cemetery",
    "church",
    "hindu_temple",
    "mosque",
    "place_of_worship",
];
const STAYS: &[&str] = &[
    "lodging",
    "hotel",
    "motel",
    "hostel",
    "resort",
    "accommodation",
    "campground",
    "rv_park",
];
const ATTRACTIONS: &[&str] = &[
    "amusement_park",
    "aquarium",
    "art_gallery",
    "library",
    "movie_theater",
    "museum",
    "natural_feature",
    "park",
    "tourist_attraction",
    "zoo",
    "landmark",
];
const SHOPPING: &[&str] = &[
    "bicycle_store",
    "book_store",
    "clothing_store",
    "convenience_store",
    "department_store",
    "electronics_store",
    "florist",
    "furniture_store",
    "grocery_or_supermarket",
    "home_goods_store",
    "jewelry_store",
    "shoe_store",
    "shopping_mall",
    "store",
    "supermarket",
];
const SPORTS: &[&str] = &[
    "beauty_salon",
    "spa",
    "gym",
    "health",
    "bowling_alley",
    "stadium",
];

/// Keyword lists in tagging priority order.
const RULES: [(Category, &[&str]); 6] = [
    (Category::FoodAndBeverage, FOOD),
    (Category::PlaceOfWorship, WORSHIP),
    (Category::StaysAndAccommodations, STAYS),
    (Category::AttractionsAndActivities, ATTRACTIONS),
    (Category::Shopping, SHOPPING),
    (Category::SportsAndWellness, SPORTS),
];

/// Tag a list of provider types with the first matching category.
///
/// Types are compared case-insensitively and must equal a keyword exactly.
/// Lists with no match are tagged [`Category::Others`].
///
/// # Examples
/// ```
/// use wayfarer_core::Category;
/// use wayfarer_data::categorize_types;
///
/// assert_eq!(categorize_types(&["lodging", "restaurant"]), Category::FoodAndBeverage);
/// assert_eq!(categorize_types(&["Museum"]), Category::AttractionsAndActivities);
/// assert_eq!(categorize_types::<&str>(&[]), Category::Others);
/// ```
pub fn categorize_types<S: AsRef<str>>(types: &[S]) -> Category {
    let lowered: Vec<String> = types
        .iter()
        .map(|kind| kind.as_ref().trim().to_lowercase())
        .collect();
    RULES
        .iter()
        .find(|(_, keywords)| lowered.iter().any(|kind| keywords.contains(&kind.as_str())))
        .map_or(Category::Others, |(category, _)| *category)
}

/// Split a serialised types list such as `['cafe', 'food']` into its entries.
///
/// Square brackets and quotes are optional; blank entries are dropped.
pub fn parse_types_list(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|entry| entry.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
