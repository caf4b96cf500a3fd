//! Shared `SQLite` plumbing for the database-backed loaders.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags};
use wayfarer_core::SourceError;

/// Open an existing database without write access.
///
/// Missing files are reported rather than created.
pub(crate) fn open_read_only(path: &Utf8Path) -> Result<Connection, SourceError> {
    Connection::open_with_flags(
        path.as_std_path(),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| SourceError::unavailable(path.as_str(), err))
}

/// Render a dynamically typed cell as text, treating `NULL` and blobs as absent.
pub(crate) fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Blob(_) => None,
        Value::Integer(number) => Some(number.to_string()),
        Value::Real(number) => Some(number.to_string()),
        Value::Text(text) => Some(text),
    }
}

/// Interpret a cell as a positive identifier.
pub(crate) fn positive_id(value: &Value) -> Option<u64> {
    match value {
        Value::Integer(number) => u64::try_from(*number).ok(),
        Value::Text(text) => crate::record::parse_whole(text),
        Value::Real(_) | Value::Null | Value::Blob(_) => None,
    }
    .filter(|&id| id > 0)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Value::Integer(42), Some(42))]
    #[case(Value::Text(String::from(" 7 ")), Some(7))]
    #[case(Value::Integer(0), None)]
    #[case(Value::Integer(-5), None)]
    #[case(Value::Text(String::from("abc")), None)]
    #[case(Value::Null, None)]
    fn identifiers_must_be_positive(#[case] value: Value, #[case] expected: Option<u64>) {
        assert_eq!(positive_id(&value), expected);
    }

    #[rstest]
    #[case(Value::Real(4.5), Some("4.5"))]
    #[case(Value::Integer(12), Some("12"))]
    #[case(Value::Null, None)]
    fn cells_render_as_text(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(value_text(value).as_deref(), expected);
    }
}
