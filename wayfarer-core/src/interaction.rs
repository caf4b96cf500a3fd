//! User-place touchpoints feeding collaborative filtering.

/// How a user touched a place.
///
/// The recommender only cares that an interaction happened; the kind is kept
/// so loaders can report what they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// The user opened the place's detail view.
    Click,
    /// The user saved the place as a favourite.
    Save,
    /// The user wrote a review.
    Review,
    /// Any other recorded event.
    Other,
}

impl InteractionKind {
    /// Return the kind as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Save => "save",
            Self::Review => "review",
            Self::Other => "other",
        }
    }

    /// Map a free-form event label onto a kind, defaulting to [`Self::Other`].
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::InteractionKind;
    ///
    /// assert_eq!(InteractionKind::from_label("Favourite"), InteractionKind::Save);
    /// assert_eq!(InteractionKind::from_label("share"), InteractionKind::Other);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "click" | "view" => Self::Click,
            "save" | "favourite" | "favorite" | "fav" => Self::Save,
            "review" => Self::Review,
            _ => Self::Other,
        }
    }
}

/// A single user-place interaction.
///
/// Duplicate `(user_id, place_id)` pairs are legal; they collapse into one
/// "interacted" flag when the user-item matrix is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interaction {
    /// Positive user identifier.
    pub user_id: u64,
    /// Positive place identifier.
    pub place_id: u64,
    /// Recorded event kind.
    pub kind: InteractionKind,
}

impl Interaction {
    /// Construct an interaction.
    pub const fn new(user_id: u64, place_id: u64, kind: InteractionKind) -> Self {
        Self {
            user_id,
            place_id,
            kind,
        }
    }

    /// Construct a click interaction, the most common event.
    pub const fn click(user_id: u64, place_id: u64) -> Self {
        Self::new(user_id, place_id, InteractionKind::Click)
    }
}
