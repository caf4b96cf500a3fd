//! Places: the points of interest consumed by the ranking engine.
//!
//! A [`Place`] is built once per loaded record and never mutated afterwards.
//! Construction goes through [`PlaceBuilder`], which validates the rating and
//! coordinate ranges so downstream ranking never sees out-of-range values.

use geo::Coord;
use thiserror::Error;

use crate::Category;

/// Highest rating a place can carry.
pub const MAX_RATING: f64 = 5.0;

/// A point of interest with its popularity signals.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. A place with
/// no `rating` is excluded from every score-based view.
///
/// # Examples
/// ```
/// use wayfarer_core::Place;
///
/// # fn main() -> Result<(), wayfarer_core::PlaceError> {
/// let place = Place::builder("ChIJ-merlion", "Merlion Park")
///     .category("Attractions & Activities")
///     .coordinates(1.2868, 103.8545)
///     .rating(4.7)
///     .rating_count(120_000)
///     .build()?;
///
/// assert_eq!(place.latitude(), Some(1.2868));
/// assert!(place.matches_category(Some("attractions & activities")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Unique identifier issued by the upstream maps provider.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category label, normally one of the [`Category`] taxonomy names.
    pub category: String,
    /// Geospatial position, when the source supplied one.
    pub location: Option<Coord<f64>>,
    /// Average rating in `0.0..=5.0`.
    pub rating: Option<f64>,
    /// Number of ratings behind `rating`.
    pub rating_count: u32,
    /// Provider price level, usually `0..=4`.
    pub price_level: Option<u8>,
    /// Human-readable address.
    pub formatted_address: String,
}

impl Place {
    /// Start building a place with the mandatory identifier and name.
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> PlaceBuilder {
        PlaceBuilder::new(id, name)
    }

    /// Latitude in degrees, if the place has coordinates.
    pub fn latitude(&self) -> Option<f64> {
        self.location.map(|coord| coord.y)
    }

    /// Longitude in degrees, if the place has coordinates.
    pub fn longitude(&self) -> Option<f64> {
        self.location.map(|coord| coord.x)
    }

    /// Report whether the place belongs to `category`, ignoring case.
    ///
    /// `None` matches every place.
    pub fn matches_category(&self, category: Option<&str>) -> bool {
        category.is_none_or(|wanted| self.category.to_lowercase() == wanted.to_lowercase())
    }
}

/// Errors returned by [`PlaceBuilder::build`].
#[derive(Debug, Error, PartialEq)]
pub enum PlaceError {
    /// The identifier was empty or whitespace.
    #[error("place identifier must not be empty")]
    MissingId,
    /// The name was empty or whitespace.
    #[error("place {id} must have a name")]
    MissingName {
        /// Identifier of the offending place.
        id: String,
    },
    /// The rating was not a finite value in `0.0..=5.0`.
    #[error("rating {rating} for place {id} is outside 0.0..=5.0")]
    InvalidRating {
        /// Identifier of the offending place.
        id: String,
        /// Rejected rating.
        rating: f64,
    },
    /// The coordinates fell outside the WGS84 range.
    #[error("coordinates ({latitude}, {longitude}) for place {id} are not valid WGS84")]
    InvalidCoordinates {
        /// Identifier of the offending place.
        id: String,
        /// Rejected latitude.
        latitude: f64,
        /// Rejected longitude.
        longitude: f64,
    },
}

/// Incremental, validating constructor for [`Place`].
#[derive(Debug, Clone)]
pub struct PlaceBuilder {
    id: String,
    name: String,
    category: Option<String>,
    coordinates: Option<(f64, f64)>,
    rating: Option<f64>,
    rating_count: u32,
    price_level: Option<u8>,
    formatted_address: String,
}

impl PlaceBuilder {
    /// Create a builder for the given identifier and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            coordinates: None,
            rating: None,
            rating_count: 0,
            price_level: None,
            formatted_address: String::new(),
        }
    }

    /// Set the category label. Blank labels fall back to [`Category::Others`].
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the latitude and longitude in degrees.
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some((latitude, longitude));
        self
    }

    /// Set the average rating.
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the rating, keeping it absent when `None`.
    pub fn maybe_rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating;
        self
    }

    /// Set the number of ratings.
    pub fn rating_count(mut self, count: u32) -> Self {
        self.rating_count = count;
        self
    }

    /// Set the price level.
    pub fn price_level(mut self, level: Option<u8>) -> Self {
        self.price_level = level;
        self
    }

    /// Set the formatted address.
    pub fn formatted_address(mut self, address: impl Into<String>) -> Self {
        self.formatted_address = address.into();
        self
    }

    /// Validate the collected fields and produce a [`Place`].
    pub fn build(self) -> Result<Place, PlaceError> {
        let id = self.id.trim().to_owned();
        if id.is_empty() {
            return Err(PlaceError::MissingId);
        }
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(PlaceError::MissingName { id });
        }
        if let Some(rating) = self.rating
            && !(rating.is_finite() && (0.0..=MAX_RATING).contains(&rating))
        {
            return Err(PlaceError::InvalidRating { id, rating });
        }
        let location = match self.coordinates {
            Some((latitude, longitude)) if valid_coordinates(latitude, longitude) => Some(Coord {
                x: longitude,
                y: latitude,
            }),
            Some((latitude, longitude)) => {
                return Err(PlaceError::InvalidCoordinates {
                    id,
                    latitude,
                    longitude,
                });
            }
            None => None,
        };
        let category = self
            .category
            .map(|label| label.trim().to_owned())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| Category::Others.as_str().to_owned());

        Ok(Place {
            id,
            name,
            category,
            location,
            rating: self.rating,
            rating_count: self.rating_count,
            price_level: self.price_level,
            formatted_address: self.formatted_address,
        })
    }
}

fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}
