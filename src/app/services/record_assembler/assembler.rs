//! Row filtering and boundary detection for one source

use super::boundary::{Assembly, BoundaryDetector};
use super::header_filter::RowFilter;
use super::stats::AssemblyStats;
use crate::app::models::{ColumnProfile, RawRow};
use regex::Regex;

/// Turns a source's physical rows into record drafts
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    filter: RowFilter,
    key_pattern: Option<Regex>,
}

impl RecordAssembler {
    /// Create an assembler from a row filter and an optional key pattern
    pub fn new(filter: RowFilter, key_pattern: Option<Regex>) -> Self {
        Self {
            filter,
            key_pattern,
        }
    }

    /// Filter the rows, then group them into drafts aligned with `profiles`
    pub fn assemble(&self, rows: &[RawRow], profiles: &[ColumnProfile]) -> Assembly {
        let mut stats = AssemblyStats::new();
        let data_rows = self.filter_rows(rows, &mut stats);
        self.assemble_filtered(data_rows, profiles, stats)
    }

    /// Drop repeated headers, banners and blank rows, counting them in `stats`
    pub fn filter_rows<'r>(&self, rows: &'r [RawRow], stats: &mut AssemblyStats) -> Vec<&'r RawRow> {
        self.filter.retain(rows, stats)
    }

    /// Group already-filtered rows into drafts, continuing the given counters
    pub fn assemble_filtered(
        &self,
        data_rows: Vec<&RawRow>,
        profiles: &[ColumnProfile],
        filter_stats: AssemblyStats,
    ) -> Assembly {
        let mut detector = BoundaryDetector::new(profiles, self.key_pattern.as_ref());
        for row in data_rows {
            detector.push(row);
        }

        let mut assembly = detector.finish();
        assembly.stats = AssemblyStats {
            orphan_rows: assembly.stats.orphan_rows,
            continuation_rows: assembly.stats.continuation_rows,
            records: assembly.stats.records,
            ..filter_stats
        };
        assembly
    }
}
