//! Crime type normalization

use super::abbreviations::crime_type_table;
use super::{collapse_whitespace, patterns};

/// Normalize a crime type value
///
/// Drops the `Related` qualifier (`"Alcohol Related"` → `"Alcohol"`), expands
/// abbreviations such as `BURG` and `THEFT FM MTR` while keeping their case,
/// and collapses whitespace.
pub fn normalize_crime_type(raw: &str) -> String {
    let value = patterns::related_token().replace_all(raw.trim(), "");
    let value = crime_type_table().expand(&value);
    collapse_whitespace(&value)
}
