//! Record boundary detection
//!
//! A record starts at every row with a record key. Rows without a key
//! continue the record above them. Rows without a key that appear before
//! the first key row belong to nothing and are discarded as orphans.

use super::merge::merge_into;
use super::stats::AssemblyStats;
use crate::app::models::{ColumnProfile, ColumnRole, Diagnostic, RawRow, RecordDraft};
use regex::Regex;
use tracing::debug;

#[derive(Debug)]
enum State {
    NoOpenRecord,
    RecordOpen(RecordDraft),
}

/// Two-state machine that groups rows into record drafts
#[derive(Debug)]
pub struct BoundaryDetector<'a> {
    profiles: &'a [ColumnProfile],
    key_slot: Option<usize>,
    key_pattern: Option<&'a Regex>,
    state: State,
    drafts: Vec<RecordDraft>,
    diagnostics: Vec<Diagnostic>,
    stats: AssemblyStats,
}

impl<'a> BoundaryDetector<'a> {
    /// Create a detector over classified columns
    ///
    /// With a `key_pattern`, a key cell only opens a record when it matches;
    /// other key cells are merged like any continuation value.
    pub fn new(profiles: &'a [ColumnProfile], key_pattern: Option<&'a Regex>) -> Self {
        let key_slot = profiles
            .iter()
            .position(|p| p.role == ColumnRole::RecordKey);

        Self {
            profiles,
            key_slot,
            key_pattern,
            state: State::NoOpenRecord,
            drafts: Vec::new(),
            diagnostics: Vec::new(),
            stats: AssemblyStats::new(),
        }
    }

    /// Feed the next data row
    pub fn push(&mut self, row: &RawRow) {
        let opens_record = self.is_key_row(row);

        match (std::mem::replace(&mut self.state, State::NoOpenRecord), opens_record) {
            (State::NoOpenRecord, true) => {
                self.state = State::RecordOpen(RecordDraft::open(row, self.profiles));
            }
            (State::NoOpenRecord, false) => {
                debug!("Row {}: continuation with no open record, discarded", row.position);
                self.stats.orphan_rows += 1;
                self.diagnostics.push(Diagnostic::OrphanContinuation {
                    position: row.position,
                });
            }
            (State::RecordOpen(draft), true) => {
                self.drafts.push(draft);
                self.state = State::RecordOpen(RecordDraft::open(row, self.profiles));
            }
            (State::RecordOpen(mut draft), false) => {
                merge_into(&mut draft, row, self.profiles);
                self.stats.continuation_rows += 1;
                self.state = State::RecordOpen(draft);
            }
        }
    }

    /// Close any open record and return everything collected
    pub fn finish(mut self) -> Assembly {
        if let State::RecordOpen(draft) = self.state {
            self.drafts.push(draft);
        }
        self.stats.records = self.drafts.len();

        Assembly {
            drafts: self.drafts,
            diagnostics: self.diagnostics,
            stats: self.stats,
        }
    }

    fn is_key_row(&self, row: &RawRow) -> bool {
        let Some(slot) = self.key_slot else {
            return false;
        };
        match row.value(self.profiles[slot].index) {
            Some(key) => self.key_pattern.is_none_or(|re| re.is_match(key)),
            None => false,
        }
    }
}

/// Record drafts in source order, plus what happened along the way
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub drafts: Vec<RecordDraft>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: AssemblyStats,
}
