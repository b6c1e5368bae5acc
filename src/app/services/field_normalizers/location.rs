//! Location normalization

use super::{collapse_whitespace, patterns};

/// Normalize a location value
///
/// Removes a trailing `- On Campus` qualifier and collapses whitespace,
/// including the line breaks left behind by merged continuation rows.
pub fn normalize_location(raw: &str) -> String {
    let value = patterns::on_campus_suffix().replace(raw.trim(), "");
    collapse_whitespace(&value)
}
