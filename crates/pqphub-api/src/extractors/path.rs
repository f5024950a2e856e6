//! Lenient parsing of identifiers taken from paths and form fields.

use std::str::FromStr;

/// Parses an identifier, treating anything malformed as absent.
///
/// Routes that look records up by id answer a malformed id the same way
/// they answer an unknown one.
pub fn parse_id<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}
