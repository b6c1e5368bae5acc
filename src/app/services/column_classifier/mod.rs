//! Column role classification
//!
//! Crime logs from different institutions name the same columns in dozens of
//! ways (`Case#`, `Incident No.`, `Report Number`...). This module cleans the
//! headers, drops placeholder and banner columns, and binds each semantic
//! role to at most one column.
//!
//! # Rules
//!
//! Roles are filled in [`ColumnRole::PRIORITY`] order. For each role the
//! configured header patterns are tried in order and the first unassigned
//! column whose header matches wins. When no header matches any role, sampled
//! cell values are matched against per-role value patterns instead. If no
//! record key column is found, the first retained column takes that role and
//! a [`Diagnostic::ClassificationAmbiguity`] is recorded.
//!
//! [`ColumnRole::PRIORITY`]: crate::app::models::ColumnRole::PRIORITY
//! [`Diagnostic::ClassificationAmbiguity`]: crate::app::models::Diagnostic::ClassificationAmbiguity

pub mod classifier;
pub mod header;
pub mod sampling;

#[cfg(test)]
mod tests;

pub use classifier::{Classification, ColumnClassifier, ExcludedColumn};
pub use header::{ExclusionReason, clean_header, exclusion_reason};
pub use sampling::sample_columns;
