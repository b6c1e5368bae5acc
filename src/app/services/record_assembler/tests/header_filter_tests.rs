//! Tests for the row filter

use super::*;
use crate::app::services::record_assembler::{AssemblyStats, RowKind};

#[test]
fn test_repeated_header_detected() {
    let filter = create_default_filter();
    let rows = create_rows(&[
        &["Case#", "Location", "Occurred"],
        &["CASE#", "location:", ""],
        &["Case", "LOCATION", "x"],
    ]);

    assert_eq!(filter.classify(&rows[0]), RowKind::RepeatedHeader);
    assert_eq!(filter.classify(&rows[1]), RowKind::RepeatedHeader);
    // "Case" is a whole word of "case#"
    assert_eq!(filter.classify(&rows[2]), RowKind::RepeatedHeader);
}

#[test]
fn test_partial_word_cells_are_data() {
    let filter = RowFilter::new(
        &["Case #", "Date Opened", "Location", "Offenses", "Disposition"],
        Vec::new(),
        2,
    );
    let rows = create_rows(&[
        &["25-9", "1/1/25", "Gym", "Offense", "Open"],
        &["25-10", "1/2/25", "Lobby", "Locat", "Cation"],
    ]);

    assert_eq!(filter.classify(&rows[0]), RowKind::Data);
    assert_eq!(filter.classify(&rows[1]), RowKind::Data);
}

#[test]
fn test_single_header_match_is_data() {
    let filter = create_default_filter();
    let rows = create_rows(&[&["K1", "Location", "0800"], &["K2", "Lobby", "Occurred"]]);

    assert_eq!(filter.classify(&rows[0]), RowKind::Data);
    assert_eq!(filter.classify(&rows[1]), RowKind::Data);
}

#[test]
fn test_short_cells_need_exact_match() {
    let filter = create_default_filter();
    let rows = create_rows(&[&["Cas", "Loc", "Occ"]]);

    assert_eq!(filter.classify(&rows[0]), RowKind::Data);
}

#[test]
fn test_threshold_is_configurable() {
    let filter = RowFilter::new(&HEADERS, Vec::new(), 3);
    let rows = create_rows(&[&["Case#", "Location", ""], &["Case#", "Location", "Occurred"]]);

    assert_eq!(filter.classify(&rows[0]), RowKind::Data);
    assert_eq!(filter.classify(&rows[1]), RowKind::RepeatedHeader);
}

#[test]
fn test_metadata_rows_detected() {
    let filter = create_default_filter();
    let rows = create_rows(&[
        &["Page 2 of 14", "", ""],
        &["", "Print Date: 10/10/2024", ""],
        &["Daily Crime and Fire Log", "", ""],
    ]);

    for row in &rows {
        assert_eq!(filter.classify(row), RowKind::Metadata);
    }
}

#[test]
fn test_blank_rows_detected() {
    let filter = create_default_filter();
    let rows = create_rows(&[&["", " ", ""], &[]]);

    assert_eq!(filter.classify(&rows[0]), RowKind::Blank);
    assert_eq!(filter.classify(&rows[1]), RowKind::Blank);
}

#[test]
fn test_retain_counts_dropped_rows() {
    let filter = create_default_filter();
    let rows = create_rows(&[
        &["Case#", "Location", "Occurred"],
        &["K1", "Lobby", "0836"],
        &["", "", ""],
        &["Page 1 of 2", "", ""],
        &["", "Hall", ""],
    ]);
    let mut stats = AssemblyStats::new();

    let kept = filter.retain(&rows, &mut stats);

    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].position, 1);
    assert_eq!(kept[1].position, 4);
    assert_eq!(stats.input_rows, 5);
    assert_eq!(stats.repeated_header_rows, 1);
    assert_eq!(stats.blank_rows, 1);
    assert_eq!(stats.metadata_rows, 1);
}
