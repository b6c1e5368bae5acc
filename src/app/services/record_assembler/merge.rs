//! Folding continuation rows into an open record

use crate::app::models::{ColumnProfile, ColumnRole, RawRow, RecordDraft};
use tracing::debug;

/// How a continuation value combines with the value already held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Append after the given separator
    Join(&'static str),
    /// Replace the held value
    Replace,
}

impl MergePolicy {
    /// Policy for a column
    ///
    /// Locations are comma-joined, date ranges keep both ends, a plain date
    /// is superseded by a later one, and everything else is space-joined.
    pub fn for_profile(profile: &ColumnProfile) -> Self {
        match profile.role {
            ColumnRole::Location => MergePolicy::Join(", "),
            ColumnRole::DateTimeReported | ColumnRole::DateTimeOccurred if profile.is_range => {
                MergePolicy::Join(" - ")
            }
            ColumnRole::DateTimeReported | ColumnRole::DateTimeOccurred => MergePolicy::Replace,
            ColumnRole::RecordKey
            | ColumnRole::CrimeType
            | ColumnRole::Disposition
            | ColumnRole::Other => MergePolicy::Join(" "),
        }
    }

    /// Combine `held` with `incoming`
    pub fn apply(self, held: &mut String, incoming: &str) {
        if held.is_empty() {
            held.push_str(incoming);
            return;
        }
        match self {
            MergePolicy::Join(separator) => {
                held.push_str(separator);
                held.push_str(incoming);
            }
            MergePolicy::Replace => {
                *held = incoming.to_string();
            }
        }
    }
}

/// Merge a continuation row into an open draft
///
/// Empty cells leave the draft untouched, cells missing from a short row are
/// treated as empty, and cells beyond the profiled columns are ignored.
pub fn merge_into(draft: &mut RecordDraft, row: &RawRow, profiles: &[ColumnProfile]) {
    for (slot, profile) in profiles.iter().enumerate() {
        let Some(incoming) = row.value(profile.index) else {
            continue;
        };
        let Some(held) = draft.values.get_mut(slot) else {
            continue;
        };

        let policy = MergePolicy::for_profile(profile);
        if policy == MergePolicy::Replace && !held.is_empty() {
            debug!(
                "Row {}: '{}' replaces '{}' in '{}'",
                row.position, incoming, held, profile.header
            );
        }
        policy.apply(held, incoming);
    }
    draft.continuation_rows += 1;
}
