//! Field normalizers for crime log values
//!
//! Pure, infallible functions that turn the inconsistent text of crime log
//! cells into canonical values. A value that matches no known shape is
//! returned trimmed; the date and time normalizers also have `try_` forms
//! that return `None` instead, so callers can count misses.
//!
//! # Modules
//!
//! - [`date_time`] - Times, dates, ranges and date + time folding
//! - [`disposition`] - Status cleanup and abbreviation expansion
//! - [`crime_type`] - Crime type cleanup
//! - [`location`] - Location cleanup
//! - [`capitalization`] - Title-casing of shouting text
//! - [`role_normalizer`] - Dispatch by column role
//!
//! Every normalizer is idempotent: running it on its own output returns the
//! same value.
//!
//! # Example
//!
//! ```rust
//! use crimelog_processor::app::services::field_normalizers::{
//!     normalize_disposition, normalize_time, DispositionOptions,
//! };
//!
//! assert_eq!(normalize_time("906"), "9:06");
//! assert_eq!(normalize_time("0836-0917"), "08:36");
//! assert_eq!(
//!     normalize_disposition("CLSD", DispositionOptions::default()),
//!     "CLOSED"
//! );
//! ```

pub mod abbreviations;
pub mod capitalization;
pub mod crime_type;
pub mod date_time;
pub mod disposition;
pub mod location;
pub mod patterns;
pub mod role_normalizer;

#[cfg(test)]
mod tests;

pub use abbreviations::AbbreviationTable;
pub use capitalization::TitleCaser;
pub use crime_type::normalize_crime_type;
pub use date_time::{
    DateOptions, collapse_date_range, combine_date_time, normalize_date, normalize_date_time,
    normalize_time, try_normalize_date, try_normalize_date_time, try_normalize_time,
};
pub use disposition::{DispositionOptions, normalize_disposition};
pub use location::normalize_location;
pub use role_normalizer::{FieldNormalizer, NormalizedValue};

/// Trim and collapse every whitespace run (including line breaks) to one space
pub(crate) fn collapse_whitespace(value: &str) -> String {
    patterns::whitespace_run()
        .replace_all(value.trim(), " ")
        .into_owned()
}
