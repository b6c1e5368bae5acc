//! Data models for crime log reconstruction
//!
//! This module contains the core data structures that flow through the
//! pipeline: raw rows as handed over by readers, column roles and profiles
//! produced by classification, record drafts built while merging
//! continuation rows, and the canonical records emitted to callers.

pub mod diagnostics;

pub use diagnostics::Diagnostic;

use crate::constants::standard_headers;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Raw Input
// =============================================================================

/// One physical row of a source, exactly as a reader produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Zero-based position of the row within its source
    pub position: usize,

    /// Cell values in column order; `None` for null cells
    pub cells: Vec<Option<String>>,
}

impl RawRow {
    /// Create a row from nullable cells
    pub fn new(position: usize, cells: Vec<Option<String>>) -> Self {
        Self { position, cells }
    }

    /// Create a row from plain strings, treating empty strings as null
    pub fn from_values<S: AsRef<str>>(position: usize, values: &[S]) -> Self {
        let cells = values
            .iter()
            .map(|v| {
                let v = v.as_ref();
                if v.is_empty() { None } else { Some(v.to_string()) }
            })
            .collect();
        Self { position, cells }
    }

    /// Trimmed value of a cell, `None` when missing, null or blank
    pub fn value(&self, index: usize) -> Option<&str> {
        self.cells
            .get(index)
            .and_then(|cell| cell.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Iterate over every non-empty trimmed value in the row
    pub fn non_empty_values(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .filter_map(|cell| cell.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Check whether every cell is null or blank
    pub fn is_blank(&self) -> bool {
        self.non_empty_values().next().is_none()
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the row has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A named source table: headers plus rows in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    /// Source name (usually the file stem or institution)
    pub name: String,

    /// Column headers as found in the source
    pub headers: Vec<String>,

    /// Data rows in source order
    pub rows: Vec<RawRow>,
}

impl SourceTable {
    /// Create a new source table
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Build a table from string slices, numbering rows from zero
    pub fn from_values<H: AsRef<str>, S: AsRef<str>>(
        name: impl Into<String>,
        headers: &[H],
        rows: &[Vec<S>],
    ) -> Self {
        let headers = headers.iter().map(|h| h.as_ref().to_string()).collect();
        let rows = rows
            .iter()
            .enumerate()
            .map(|(position, values)| RawRow::from_values(position, values))
            .collect();
        Self::new(name, headers, rows)
    }
}

// =============================================================================
// Column Roles
// =============================================================================

/// Semantic role of a column
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Case, report or incident number; its presence starts a new record
    RecordKey,
    /// When the incident was reported
    DateTimeReported,
    /// When the incident occurred (possibly a from/to range)
    DateTimeOccurred,
    /// Where the incident happened
    Location,
    /// Nature or classification of the incident
    CrimeType,
    /// Case status or outcome
    Disposition,
    /// Anything else; passed through
    Other,
}

impl ColumnRole {
    /// Assignable roles in classification priority order
    pub const PRIORITY: [ColumnRole; 6] = [
        ColumnRole::RecordKey,
        ColumnRole::DateTimeReported,
        ColumnRole::DateTimeOccurred,
        ColumnRole::Location,
        ColumnRole::CrimeType,
        ColumnRole::Disposition,
    ];

    /// Check whether the role holds dates or times
    pub fn is_date_time(&self) -> bool {
        matches!(
            self,
            ColumnRole::DateTimeReported | ColumnRole::DateTimeOccurred
        )
    }

    /// Check whether the role holds free text eligible for title-casing
    pub fn is_free_text(&self) -> bool {
        matches!(
            self,
            ColumnRole::Location | ColumnRole::CrimeType | ColumnRole::Disposition | ColumnRole::Other
        )
    }

    /// Header name used by the standard output schema
    pub fn standard_header(&self) -> Option<&'static str> {
        match self {
            ColumnRole::RecordKey => Some(standard_headers::RECORD_KEY),
            ColumnRole::DateTimeReported => Some(standard_headers::DATE_TIME_REPORTED),
            ColumnRole::DateTimeOccurred => Some(standard_headers::DATE_TIME_OCCURRED),
            ColumnRole::Location => Some(standard_headers::LOCATION),
            ColumnRole::CrimeType => Some(standard_headers::CRIME_TYPE),
            ColumnRole::Disposition => Some(standard_headers::DISPOSITION),
            ColumnRole::Other => None,
        }
    }

    /// Configuration key of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::RecordKey => "record_key",
            ColumnRole::DateTimeReported => "date_time_reported",
            ColumnRole::DateTimeOccurred => "date_time_occurred",
            ColumnRole::Location => "location",
            ColumnRole::CrimeType => "crime_type",
            ColumnRole::Disposition => "disposition",
            ColumnRole::Other => "other",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        [ColumnRole::Other]
            .into_iter()
            .chain(ColumnRole::PRIORITY)
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| Error::configuration(format!("Unknown column role: '{}'", s)))
    }
}

/// Classification result for one retained column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Index of the column in the source rows
    pub index: usize,

    /// Cleaned header text
    pub header: String,

    /// Assigned role
    pub role: ColumnRole,

    /// Date header that names a from/to pair
    pub is_range: bool,
}

impl ColumnProfile {
    /// Create a new profile
    pub fn new(index: usize, header: impl Into<String>, role: ColumnRole, is_range: bool) -> Self {
        Self {
            index,
            header: header.into(),
            role,
            is_range: is_range && role.is_date_time(),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// In-progress accumulation of one logical record
///
/// Values are held per retained column, in profile order. A draft only lives
/// between two record-key rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    /// Position of the row that opened the draft
    pub source_position: usize,

    /// Accumulated values, aligned with the column profiles
    pub values: Vec<String>,

    /// Number of continuation rows merged into the draft
    pub continuation_rows: usize,
}

impl RecordDraft {
    /// Open a draft seeded with the opening row's values
    pub fn open(row: &RawRow, profiles: &[ColumnProfile]) -> Self {
        let values = profiles
            .iter()
            .map(|profile| row.value(profile.index).unwrap_or_default().to_string())
            .collect();

        Self {
            source_position: row.position,
            values,
            continuation_rows: 0,
        }
    }

    /// Value held for a profile slot
    pub fn value(&self, slot: usize) -> &str {
        self.values.get(slot).map(String::as_str).unwrap_or_default()
    }

    /// Freeze the draft into a canonical record
    pub fn close(self, headers: Arc<[String]>) -> CanonicalRecord {
        CanonicalRecord::new(headers, self.values, self.source_position)
    }
}

/// Final, normalized, schema-aligned record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRecord {
    #[serde(skip)]
    headers: Arc<[String]>,
    values: Vec<String>,
    source_position: usize,
}

impl CanonicalRecord {
    /// Create a record; `values` must align with `headers`
    pub fn new(headers: Arc<[String]>, values: Vec<String>, source_position: usize) -> Self {
        debug_assert_eq!(headers.len(), values.len());
        Self {
            headers,
            values,
            source_position,
        }
    }

    /// Value for a header, if the record has that column
    pub fn get(&self, header: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|h| h == header)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Headers in output order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Values in output order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Position of the row that opened the record
    pub fn source_position(&self) -> usize {
        self.source_position
    }

    /// Iterate over `(header, value)` pairs in output order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}
