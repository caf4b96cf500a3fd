//! Normalisation of loosely typed source rows into [`Place`] records.
#![forbid(unsafe_code)]

use thiserror::Error;
use wayfarer_core::{Place, PlaceError};

use crate::categorize::{categorize_types, parse_types_list};

/// Why a source row could not become a place.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    /// The row was missing its identifier column value.
    #[error("row has no place_id")]
    MissingId,
    /// The values were present but failed place validation.
    #[error(transparent)]
    Invalid(#[from] PlaceError),
}

/// Positions of the recognised columns within a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    place_id: Option<usize>,
    name: Option<usize>,
    category: Option<usize>,
    types: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
    rating: Option<usize>,
    rating_count: Option<usize>,
    price_level: Option<usize>,
    formatted_address: Option<usize>,
}

impl ColumnMap {
    /// Locate recognised columns, matching header names case-insensitively.
    pub(crate) fn from_headers<'h, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'h str>,
    {
        let mut map = Self::default();
        for (position, header) in headers.into_iter().enumerate() {
            let slot = match header.trim().to_lowercase().as_str() {
                "place_id" | "id" => &mut map.place_id,
                "name" => &mut map.name,
                "category" => &mut map.category,
                "types" => &mut map.types,
                "latitude" | "lat" => &mut map.latitude,
                "longitude" | "lng" | "lon" => &mut map.longitude,
                "rating" => &mut map.rating,
                "user_ratings_total" | "rating_count" => &mut map.rating_count,
                "price_level" => &mut map.price_level,
                "formatted_address" | "address" => &mut map.formatted_address,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(position);
            }
        }
        map
    }

    /// Names of required columns the header row lacks.
    pub(crate) fn missing_required(&self) -> Vec<&'static str> {
        [("place_id", self.place_id), ("name", self.name)]
            .into_iter()
            .filter(|(_, position)| position.is_none())
            .map(|(label, _)| label)
            .collect()
    }

    /// Normalise one row, reading cells through `cell`.
    pub(crate) fn place_from<'r, F>(&self, cell: F) -> Result<Place, RowError>
    where
        F: Fn(usize) -> Option<&'r str>,
    {
        let text = |column: Option<usize>| column.and_then(&cell).map(str::trim);
        let id = text(self.place_id)
            .filter(|value| !value.is_empty())
            .ok_or(RowError::MissingId)?;
        let mut builder = Place::builder(id, text(self.name).unwrap_or_default())
            .category(self.category_of(&text))
            .maybe_rating(text(self.rating).and_then(parse_float))
            .rating_count(
                text(self.rating_count)
                    .and_then(parse_whole)
                    .and_then(|count| u32::try_from(count).ok())
                    .unwrap_or_default(),
            )
            .price_level(
                text(self.price_level)
                    .and_then(parse_whole)
                    .and_then(|level| u8::try_from(level).ok()),
            )
            .formatted_address(text(self.formatted_address).unwrap_or_default());
        let latitude = text(self.latitude).and_then(parse_float);
        let longitude = text(self.longitude).and_then(parse_float);
        if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
            builder = builder.coordinates(latitude, longitude);
        }
        Ok(builder.build()?)
    }

    fn category_of<'r>(&self, text: &impl Fn(Option<usize>) -> Option<&'r str>) -> String {
        match text(self.category) {
            Some(label) if !label.is_empty() => label.to_owned(),
            _ => text(self.types)
                .map(parse_types_list)
                .filter(|types| !types.is_empty())
                .map(|types| categorize_types(&types).as_str().to_owned())
                .unwrap_or_default(),
        }
    }
}

/// Parse a decimal, treating blank or malformed text as absent.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a non-negative whole number, accepting spellings such as `12.0`.
pub(crate) fn parse_whole(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if !fraction.chars().all(|c| c == '0') {
        return None;
    }
    whole.parse().ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const HEADERS: [&str; 10] = [
        "Place_ID",
        "name",
        "CATEGORY",
        "types",
        "latitude",
        "longitude",
        "rating",
        "user_ratings_total",
        "price_level",
        "formatted_address",
    ];

    fn normalise(cells: [&str; 10]) -> Result<Place, RowError> {
        ColumnMap::from_headers(HEADERS).place_from(|position| cells.get(position).copied())
    }

    #[rstest]
    #[case("4.5", Some(4.5))]
    #[case(" 3 ", Some(3.0))]
    #[case("", None)]
    #[case("n/a", None)]
    #[case("NaN", None)]
    fn floats_parse_leniently(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_float(text), expected);
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case("12.0", Some(12))]
    #[case("12.5", None)]
    #[case("-4", None)]
    #[case("", None)]
    fn whole_numbers_accept_float_spelling(#[case] text: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_whole(text), expected);
    }

    #[rstest]
    fn complete_row_becomes_place() {
        let place = normalise([
            "ChIJ-lau-pa-sat",
            "Lau Pa Sat",
            "Food and Beverage",
            "",
            "1.2807",
            "103.8504",
            "4.3",
            "31456.0",
            "1",
            "18 Raffles Quay, Singapore 048582",
        ])
        .expect("valid row");
        assert_eq!(place.id, "ChIJ-lau-pa-sat");
        assert_eq!(place.rating_count, 31_456);
        assert_eq!(place.price_level, Some(1));
        assert_eq!(place.latitude(), Some(1.2807));
    }

    #[rstest]
    fn blank_category_is_derived_from_types() {
        let place = normalise([
            "p1", "Sri Mariamman", "", "['hindu_temple', 'tourist_attraction']", "", "", "", "",
            "", "",
        ])
        .expect("valid row");
        assert_eq!(place.category, "Place of Worship");
        assert!(place.location.is_none());
        assert!(place.rating.is_none());
    }

    #[rstest]
    fn rows_without_ids_are_rejected() {
        let err = normalise(["  ", "Nameless", "", "", "", "", "", "", "", ""])
            .expect_err("missing id");
        assert_eq!(err, RowError::MissingId);
    }

    #[rstest]
    fn out_of_range_values_are_rejected() {
        let err = normalise(["p2", "Far Away", "", "", "95.0", "10.0", "4", "", "", ""])
            .expect_err("bad latitude");
        assert!(matches!(
            err,
            RowError::Invalid(PlaceError::InvalidCoordinates { .. })
        ));
    }

    #[rstest]
    fn missing_required_columns_are_listed() {
        let map = ColumnMap::from_headers(["rating", "Name"]);
        assert_eq!(map.missing_required(), vec!["place_id"]);
    }
}
