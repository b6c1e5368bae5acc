//! Non-fatal conditions observed while reconstructing a source
//!
//! Nothing in the reconstruction core aborts. Conditions worth surfacing are
//! recorded as diagnostics and counted in the pipeline statistics so the
//! caller can decide how to report them.

use super::ColumnRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recoverable condition found during classification, assembly or normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No column matched a required role; a fallback was applied
    ClassificationAmbiguity { role: ColumnRole, detail: String },

    /// A continuation row appeared before any record was open and was discarded
    OrphanContinuation { position: usize },

    /// A value did not match any recognized pattern and was passed through
    NormalizationMiss {
        column: String,
        role: ColumnRole,
        value: String,
    },
}

impl Diagnostic {
    /// Short machine-friendly name of the diagnostic kind
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::ClassificationAmbiguity { .. } => "classification_ambiguity",
            Diagnostic::OrphanContinuation { .. } => "orphan_continuation",
            Diagnostic::NormalizationMiss { .. } => "normalization_miss",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ClassificationAmbiguity { role, detail } => {
                write!(f, "ambiguous {} column: {}", role, detail)
            }
            Diagnostic::OrphanContinuation { position } => {
                write!(f, "row {} continues no open record; discarded", position)
            }
            Diagnostic::NormalizationMiss {
                column,
                role,
                value,
            } => write!(
                f,
                "'{}' in column '{}' ({}) kept as-is",
                value, column, role
            ),
        }
    }
}
