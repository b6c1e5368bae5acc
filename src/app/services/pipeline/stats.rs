//! Pipeline statistics and result structures

use crate::app::models::{CanonicalRecord, ColumnProfile, Diagnostic};
use crate::app::services::column_classifier::ExcludedColumn;
use crate::app::services::record_assembler::AssemblyStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for one or more processed sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Number of sources folded into these statistics
    pub sources: usize,
    /// Physical rows read
    pub input_rows: usize,
    /// Rows dropped as repeated page headers
    pub repeated_header_rows: usize,
    /// Rows dropped as report banners or footers
    pub metadata_rows: usize,
    /// Rows with no content
    pub blank_rows: usize,
    /// Continuation rows with no open record
    pub orphan_rows: usize,
    /// Continuation rows merged into a record
    pub continuation_rows: usize,
    /// Records emitted
    pub records: usize,
    /// Date/time values that matched no known shape
    pub normalization_misses: usize,
    /// Columns dropped before classification
    pub excluded_columns: Vec<ExcludedColumn>,
    /// Empty output values per output column
    pub empty_values: BTreeMap<String, usize>,
    /// Every recoverable condition, in the order found
    pub diagnostics: Vec<Diagnostic>,
}

impl PipelineStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics for a single source from its assembly counters
    pub fn from_assembly(assembly: &AssemblyStats) -> Self {
        Self {
            sources: 1,
            input_rows: assembly.input_rows,
            repeated_header_rows: assembly.repeated_header_rows,
            metadata_rows: assembly.metadata_rows,
            blank_rows: assembly.blank_rows,
            orphan_rows: assembly.orphan_rows,
            continuation_rows: assembly.continuation_rows,
            records: assembly.records,
            ..Self::default()
        }
    }

    /// Fold another source's statistics into these
    pub fn merge(&mut self, other: &PipelineStats) {
        self.sources += other.sources;
        self.input_rows += other.input_rows;
        self.repeated_header_rows += other.repeated_header_rows;
        self.metadata_rows += other.metadata_rows;
        self.blank_rows += other.blank_rows;
        self.orphan_rows += other.orphan_rows;
        self.continuation_rows += other.continuation_rows;
        self.records += other.records;
        self.normalization_misses += other.normalization_misses;
        self.excluded_columns
            .extend(other.excluded_columns.iter().cloned());
        for (column, count) in &other.empty_values {
            *self.empty_values.entry(column.clone()).or_insert(0) += count;
        }
        self.diagnostics.extend(other.diagnostics.iter().cloned());
    }

    /// Rows removed by the row filter
    pub fn dropped_rows(&self) -> usize {
        self.repeated_header_rows + self.metadata_rows + self.blank_rows
    }

    /// Average number of data rows folded into each record
    ///
    /// 1.0 means no record was split; 0.0 when nothing was emitted.
    pub fn reconstruction_ratio(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            (self.records + self.continuation_rows) as f64 / self.records as f64
        }
    }

    /// Count diagnostics of a given kind
    pub fn diagnostic_count(&self, kind: &str) -> usize {
        self.diagnostics.iter().filter(|d| d.kind() == kind).count()
    }

    /// Get summary of reconstruction statistics
    pub fn summary(&self) -> String {
        format!(
            "Reconstruction Summary: {} rows -> {} records ({:.2} rows/record) | \
             Dropped: {} header, {} metadata, {} blank | Orphans: {} | \
             Normalization misses: {} | Excluded columns: {}",
            self.input_rows,
            self.records,
            self.reconstruction_ratio(),
            self.repeated_header_rows,
            self.metadata_rows,
            self.blank_rows,
            self.orphan_rows,
            self.normalization_misses,
            self.excluded_columns.len()
        )
    }
}

/// Result of processing one source
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Source name
    pub source: String,
    /// Output headers, aligned with every record
    pub headers: Vec<String>,
    /// Column profiles of the retained columns
    pub profiles: Vec<ColumnProfile>,
    /// Canonical records in first-seen order
    pub records: Vec<CanonicalRecord>,
    /// Processing statistics
    pub stats: PipelineStats,
}

impl PipelineResult {
    /// Get the number of records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!("{}: {}", self.source, self.stats.summary())
    }
}
