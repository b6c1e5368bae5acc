//! Tests for column classification

pub mod header_tests;

use crate::app::models::{ColumnRole, RawRow};
use crate::app::services::column_classifier::{Classification, ColumnClassifier};
use crate::config::Config;

/// Classifier with the built-in patterns
pub fn create_default_classifier() -> ColumnClassifier {
    ColumnClassifier::new(&Config::default()).unwrap()
}

/// Role assigned to a header, `None` when the column was excluded
pub fn role_of(classification: &Classification, header: &str) -> Option<ColumnRole> {
    classification
        .profiles
        .iter()
        .find(|p| p.header == header)
        .map(|p| p.role)
}

/// Rows built from string slices, numbered from zero
pub fn create_rows(values: &[&[&str]]) -> Vec<RawRow> {
    values
        .iter()
        .enumerate()
        .map(|(position, row)| RawRow::from_values(position, row))
        .collect()
}
