//! Removal of repeated headers, report banners and blank rows

use super::stats::AssemblyStats;
use crate::app::models::RawRow;
use crate::app::services::column_classifier::clean_header;
use crate::constants::MIN_PARTIAL_HEADER_MATCH_LEN;
use regex::Regex;
use tracing::debug;

/// How the row filter sees a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Real content; handed to the boundary detector
    Data,
    /// The source's header row repeated (typically once per printed page)
    RepeatedHeader,
    /// Report banner, print date, page footer and the like
    Metadata,
    /// Every cell empty
    Blank,
}

/// Row filter for one source
#[derive(Debug, Clone)]
pub struct RowFilter {
    headers: Vec<String>,
    metadata_patterns: Vec<Regex>,
    min_header_matches: usize,
}

impl RowFilter {
    /// Create a filter for a source's headers
    pub fn new<S: AsRef<str>>(
        headers: &[S],
        metadata_patterns: Vec<Regex>,
        min_header_matches: usize,
    ) -> Self {
        let headers = headers
            .iter()
            .map(|h| clean_header(h.as_ref()).to_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        Self {
            headers,
            metadata_patterns,
            min_header_matches: min_header_matches.max(1),
        }
    }

    /// Decide what kind of row this is
    pub fn classify(&self, row: &RawRow) -> RowKind {
        if row.is_blank() {
            RowKind::Blank
        } else if self.header_matches(row) >= self.min_header_matches {
            RowKind::RepeatedHeader
        } else if self.is_metadata(row) {
            RowKind::Metadata
        } else {
            RowKind::Data
        }
    }

    /// Keep data rows, counting the rest in `stats`
    pub fn retain<'a>(&self, rows: &'a [RawRow], stats: &mut AssemblyStats) -> Vec<&'a RawRow> {
        rows.iter()
            .filter(|row| {
                stats.input_rows += 1;
                match self.classify(row) {
                    RowKind::Data => true,
                    RowKind::RepeatedHeader => {
                        debug!("Row {}: dropped repeated header", row.position);
                        stats.repeated_header_rows += 1;
                        false
                    }
                    RowKind::Metadata => {
                        debug!("Row {}: dropped metadata row", row.position);
                        stats.metadata_rows += 1;
                        false
                    }
                    RowKind::Blank => {
                        stats.blank_rows += 1;
                        false
                    }
                }
            })
            .collect()
    }

    /// Count cells that equal a header, or are long enough and appear in one
    /// as whole words
    fn header_matches(&self, row: &RawRow) -> usize {
        row.non_empty_values()
            .map(|value| clean_header(value).to_lowercase())
            .filter(|cell| {
                self.headers.iter().any(|header| {
                    header == cell
                        || (cell.chars().count() >= MIN_PARTIAL_HEADER_MATCH_LEN
                            && contains_words(header, cell))
                })
            })
            .count()
    }

    fn is_metadata(&self, row: &RawRow) -> bool {
        if self.metadata_patterns.is_empty() {
            return false;
        }
        let joined = row.non_empty_values().collect::<Vec<_>>().join(" ");
        self.metadata_patterns.iter().any(|re| re.is_match(&joined))
    }
}

/// True when `needle` occurs in `haystack` without touching a letter or digit
/// on either side
fn contains_words(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
