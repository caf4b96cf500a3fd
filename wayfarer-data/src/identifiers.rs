//! Validation of SQL identifiers interpolated into queries.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use thiserror::Error;

/// Errors raised when a table name is unsafe to interpolate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The identifier was empty.
    #[error("{label} must not be empty")]
    Empty {
        /// What the identifier names, for example `table`.
        label: &'static str,
    },
    /// The identifier contained characters outside `[A-Za-z0-9_.]`.
    #[error("{label} contains unsupported characters: {chars:?}")]
    UnsupportedCharacters {
        /// What the identifier names.
        label: &'static str,
        /// Offending characters, sorted and deduplicated.
        chars: String,
    },
}

/// Accept identifiers made only of ASCII letters, digits, `_` and `.`.
///
/// # Examples
/// ```
/// use wayfarer_data::validate_identifier;
///
/// assert!(validate_identifier("tourism.places", "table").is_ok());
/// assert!(validate_identifier("places; DROP TABLE x", "table").is_err());
/// ```
pub fn validate_identifier<'a>(
    value: &'a str,
    label: &'static str,
) -> Result<&'a str, IdentifierError> {
    if value.is_empty() {
        return Err(IdentifierError::Empty { label });
    }
    let invalid: BTreeSet<char> = value
        .chars()
        .filter(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '.'))
        .collect();
    if invalid.is_empty() {
        Ok(value)
    } else {
        Err(IdentifierError::UnsupportedCharacters {
            label,
            chars: invalid.into_iter().collect(),
        })
    }
}
