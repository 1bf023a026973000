//! Flat `(name, value)` property lists.

use std::fmt::Display;

/// Ordered list of `(name, stringified value)` pairs.
pub type PropertyVector = Vec<(String, String)>;

/// Append `key` with the `Display` form of `value`.
pub fn add_property(data: &mut PropertyVector, key: impl Into<String>, value: impl Display) {
    data.push((key.into(), value.to_string()));
}
