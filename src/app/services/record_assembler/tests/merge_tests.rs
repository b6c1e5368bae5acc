//! Tests for continuation merge policies

use super::*;
use crate::app::models::RecordDraft;
use crate::app::services::record_assembler::{MergePolicy, merge_into};

#[test]
fn test_location_comma_joined() {
    let profiles = create_test_profiles();
    let rows = create_rows(&[&["K1", "A", ""], &["", "B", ""], &["", "C", ""]]);

    let mut draft = RecordDraft::open(&rows[0], &profiles);
    merge_into(&mut draft, &rows[1], &profiles);
    merge_into(&mut draft, &rows[2], &profiles);

    assert_eq!(draft.value(1), "A, B, C");
    assert_eq!(draft.continuation_rows, 2);
}

#[test]
fn test_empty_held_value_is_set() {
    let profiles = create_test_profiles();
    let rows = create_rows(&[&["K1", "", ""], &["", "Hall", "0836"]]);

    let mut draft = RecordDraft::open(&rows[0], &profiles);
    merge_into(&mut draft, &rows[1], &profiles);

    assert_eq!(draft.value(1), "Hall");
    assert_eq!(draft.value(2), "0836");
}

#[test]
fn test_plain_date_replaced_and_range_joined() {
    let mut profiles = create_test_profiles();
    let rows = create_rows(&[&["K1", "", "12/4/2024"], &["", "", "12/5/2024"]]);

    let mut draft = RecordDraft::open(&rows[0], &profiles);
    merge_into(&mut draft, &rows[1], &profiles);
    assert_eq!(draft.value(2), "12/5/2024");

    profiles[2] = ColumnProfile::new(2, "Occurred From", ColumnRole::DateTimeOccurred, true);
    let mut draft = RecordDraft::open(&rows[0], &profiles);
    merge_into(&mut draft, &rows[1], &profiles);
    assert_eq!(draft.value(2), "12/4/2024 - 12/5/2024");
}

#[test]
fn test_free_text_space_joined() {
    let profiles = vec![
        ColumnProfile::new(0, "Case", ColumnRole::RecordKey, false),
        ColumnProfile::new(1, "Nature", ColumnRole::CrimeType, false),
        ColumnProfile::new(2, "Notes", ColumnRole::Other, false),
    ];
    let rows = create_rows(&[&["K1", "Theft of", "Left"], &["", "Bicycle", "unlocked"]]);

    let mut draft = RecordDraft::open(&rows[0], &profiles);
    merge_into(&mut draft, &rows[1], &profiles);

    assert_eq!(draft.value(1), "Theft of Bicycle");
    assert_eq!(draft.value(2), "Left unlocked");
}

#[test]
fn test_short_and_wide_rows() {
    let profiles = create_test_profiles();
    let rows = create_rows(&[
        &["K1", "Lobby", "0836"],
        &["", "Hall"],
        &["", "Rm 2", "", "surplus", "cells"],
    ]);

    let mut draft = RecordDraft::open(&rows[0], &profiles);
    merge_into(&mut draft, &rows[1], &profiles);
    merge_into(&mut draft, &rows[2], &profiles);

    assert_eq!(draft.values, vec!["K1", "Lobby, Hall, Rm 2", "0836"]);
}

#[test]
fn test_policy_for_profile() {
    let location = ColumnProfile::new(0, "Location", ColumnRole::Location, false);
    let range = ColumnProfile::new(1, "Date From", ColumnRole::DateTimeReported, true);
    let date = ColumnProfile::new(2, "Date", ColumnRole::DateTimeReported, false);
    let other = ColumnProfile::new(3, "Notes", ColumnRole::Other, false);

    assert_eq!(MergePolicy::for_profile(&location), MergePolicy::Join(", "));
    assert_eq!(MergePolicy::for_profile(&range), MergePolicy::Join(" - "));
    assert_eq!(MergePolicy::for_profile(&date), MergePolicy::Replace);
    assert_eq!(MergePolicy::for_profile(&other), MergePolicy::Join(" "));
}
