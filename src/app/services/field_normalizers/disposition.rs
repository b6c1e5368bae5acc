//! Disposition normalization

use super::abbreviations::disposition_table;
use super::{collapse_whitespace, patterns};
use crate::constants::UNKNOWN_DISPOSITION;

/// Switches controlling disposition cleanup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispositionOptions {
    /// Remove embedded dates and times such as `Closed 10/5/2024 14:30`
    pub strip_dates: bool,
    /// Expand status abbreviations such as `CLSD`
    pub standardize: bool,
}

impl Default for DispositionOptions {
    fn default() -> Self {
        Self {
            strip_dates: true,
            standardize: true,
        }
    }
}

/// Normalize a disposition value
///
/// An empty result (or a literal `None`/`nan`) becomes `"Unknown"`, so a
/// disposition holding only a date reads `"Unknown"` after date stripping.
pub fn normalize_disposition(raw: &str, options: DispositionOptions) -> String {
    let mut value = raw.trim().to_string();

    if options.strip_dates {
        value = patterns::status_colon()
            .replace_all(&value, "$1 ")
            .into_owned();
        value = patterns::embedded_date_time()
            .replace_all(&value, " ")
            .into_owned();
        value = patterns::edge_separators()
            .replace_all(&collapse_whitespace(&value), "")
            .into_owned();
    }

    if options.standardize {
        value = disposition_table().expand(&value);
    }

    let value = collapse_whitespace(&value);
    if is_placeholder(&value) {
        UNKNOWN_DISPOSITION.to_string()
    } else {
        value
    }
}

fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("nan")
}
