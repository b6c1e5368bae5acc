//! Tests for record assembly

pub mod header_filter_tests;
pub mod merge_tests;

use crate::app::models::{ColumnProfile, ColumnRole, RawRow};
use crate::app::services::record_assembler::RowFilter;
use crate::config::compile_patterns;
use crate::constants::{DEFAULT_MIN_HEADER_REPEAT_MATCHES, METADATA_PATTERNS};

pub const HEADERS: [&str; 3] = ["Case#", "Location", "Occurred"];

/// Profiles for the `Case#, Location, Occurred` layout
pub fn create_test_profiles() -> Vec<ColumnProfile> {
    vec![
        ColumnProfile::new(0, "Case#", ColumnRole::RecordKey, false),
        ColumnProfile::new(1, "Location", ColumnRole::Location, false),
        ColumnProfile::new(2, "Occurred", ColumnRole::DateTimeOccurred, false),
    ]
}

/// Rows built from string slices, numbered from zero
pub fn create_rows(values: &[&[&str]]) -> Vec<RawRow> {
    values
        .iter()
        .enumerate()
        .map(|(position, row)| RawRow::from_values(position, row))
        .collect()
}

/// Row filter for [`HEADERS`] with the built-in metadata patterns
pub fn create_default_filter() -> RowFilter {
    let metadata: Vec<String> = METADATA_PATTERNS.iter().map(|p| p.to_string()).collect();
    RowFilter::new(
        &HEADERS,
        compile_patterns(&metadata).unwrap(),
        DEFAULT_MIN_HEADER_REPEAT_MATCHES,
    )
}
