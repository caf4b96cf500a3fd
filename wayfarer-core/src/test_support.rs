//! Test-only, in-memory sources used by unit and behaviour tests.

use crate::{Interaction, InteractionSource, Place, PlaceSource, SourceError};

/// In-memory `PlaceSource` returning a fixed list.
#[derive(Default, Debug, Clone)]
pub struct MemoryPlaces {
    places: Vec<Place>,
}

impl MemoryPlaces {
    /// Create a source from a collection of places.
    pub fn with_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = Place>,
    {
        Self {
            places: places.into_iter().collect(),
        }
    }
}

impl PlaceSource for MemoryPlaces {
    fn load_places(&self) -> Result<Vec<Place>, SourceError> {
        Ok(self.places.clone())
    }
}

/// In-memory `InteractionSource` returning a fixed list.
#[derive(Default, Debug, Clone)]
pub struct MemoryInteractions {
    interactions: Vec<Interaction>,
}

impl MemoryInteractions {
    /// Create a source from `(user_id, place_id)` click pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        Self {
            interactions: pairs
                .into_iter()
                .map(|(user, place)| Interaction::click(user, place))
                .collect(),
        }
    }
}

impl InteractionSource for MemoryInteractions {
    fn load_interactions(&self) -> Result<Vec<Interaction>, SourceError> {
        Ok(self.interactions.clone())
    }

    fn describe(&self) -> String {
        String::from("in-memory interactions")
    }
}

/// `InteractionSource` that always reports the store as unreachable.
#[derive(Default, Debug, Clone, Copy)]
pub struct UnreachableInteractions;

impl InteractionSource for UnreachableInteractions {
    fn load_interactions(&self) -> Result<Vec<Interaction>, SourceError> {
        Err(SourceError::unavailable(
            "unreachable interactions",
            "connection refused",
        ))
    }
}

/// Build a rated place with coordinates for ranking tests.
///
/// # Panics
/// Panics when the arguments fail [`PlaceBuilder`](crate::PlaceBuilder)
/// validation; fixtures are expected to be valid.
pub fn rated_place(
    id: &str,
    category: &str,
    rating: Option<f64>,
    rating_count: u32,
    coordinates: (f64, f64),
) -> Place {
    match Place::builder(id, format!("Place {id}"))
        .category(category)
        .maybe_rating(rating)
        .rating_count(rating_count)
        .coordinates(coordinates.0, coordinates.1)
        .build()
    {
        Ok(place) => place,
        Err(err) => panic!("invalid fixture place {id}: {err}"),
    }
}
