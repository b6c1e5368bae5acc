//! Row accounting for record assembly

use serde::{Deserialize, Serialize};

/// Counters collected while filtering rows and assembling records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStats {
    /// Rows handed to the assembler
    pub input_rows: usize,
    /// Rows dropped as repeated page headers
    pub repeated_header_rows: usize,
    /// Rows dropped as report banners or footers
    pub metadata_rows: usize,
    /// Rows with no content at all
    pub blank_rows: usize,
    /// Continuation rows seen before any record was open
    pub orphan_rows: usize,
    /// Continuation rows merged into an open record
    pub continuation_rows: usize,
    /// Records produced
    pub records: usize,
}

impl AssemblyStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows removed by the row filter
    pub fn filtered_rows(&self) -> usize {
        self.repeated_header_rows + self.metadata_rows + self.blank_rows
    }

    /// Rows that reached the boundary detector
    pub fn data_rows(&self) -> usize {
        self.input_rows.saturating_sub(self.filtered_rows())
    }

    /// Check that every data row was either a key row, merged or discarded
    pub fn is_balanced(&self) -> bool {
        self.records + self.continuation_rows + self.orphan_rows == self.data_rows()
    }
}
