//! End-to-end tests for crime log reconstruction
//!
//! Each test writes a log the way real exports look (page breaks, banners,
//! records split over several rows) and runs it through the CSV adapter and
//! the pipeline.

use crimelog_processor::app::adapters::csv_source::read_source;
use crimelog_processor::app::models::Diagnostic;
use crimelog_processor::config::DateTimePair;
use crimelog_processor::{Config, Pipeline};
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// A two-page export: banner, split record, blank line, page footer and a
/// repeated header between the pages
const PAGED_LOG: &str = "\
Case #,Date Reported,Date/Time Occurred,Location,Nature,Disposition
Daily Crime Log - Campus Police,,,,,
25-0101,2/17/25 906,10/01/24 0836-0917,Lobby,BURG,CLSD
,,,North Hall,,
,,,,,
Page 1 of 2,,,,,
Case #,Date Reported,Date/Time Occurred,Location,Nature,Disposition
25-0102,12/4/2024,12/4/2024-12/5/2024,Gym,Drug-Related Incident,PEND - 4/2/24
";

fn write_log(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Test full reconstruction of a paged export
///
/// Purpose: Validate filtering, boundary detection, merging and normalization together
/// Benefit: Guards the behavior users actually see in cleaned files
#[test]
fn test_paged_export_reconstruction() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(&temp_dir, "paged.csv", PAGED_LOG);

    let table = read_source(&path).unwrap();
    let pipeline = Pipeline::new(Config::default()).unwrap();
    let result = pipeline.process(&table);

    assert_eq!(result.record_count(), 2);
    assert_eq!(result.headers, table.headers);

    let first = &result.records[0];
    assert_eq!(first.get("Case #"), Some("25-0101"));
    assert_eq!(first.get("Date Reported"), Some("2025-02-17 09:06"));
    assert_eq!(first.get("Date/Time Occurred"), Some("2024-10-01 08:36"));
    assert_eq!(first.get("Location"), Some("Lobby, North Hall"));
    assert_eq!(first.get("Nature"), Some("BURGLARY"));
    assert_eq!(first.get("Disposition"), Some("CLOSED"));

    let second = &result.records[1];
    assert_eq!(second.get("Case #"), Some("25-0102"));
    assert_eq!(second.get("Date Reported"), Some("2024-12-04"));
    assert_eq!(second.get("Date/Time Occurred"), Some("2024-12-04"));
    assert_eq!(second.get("Nature"), Some("Drug Incident"));
    assert_eq!(second.get("Disposition"), Some("PENDING"));

    let stats = &result.stats;
    assert_eq!(stats.input_rows, 7);
    assert_eq!(stats.repeated_header_rows, 1);
    assert_eq!(stats.metadata_rows, 2);
    assert_eq!(stats.blank_rows, 1);
    assert_eq!(stats.continuation_rows, 1);
    assert_eq!(stats.orphan_rows, 0);
    assert_eq!(stats.normalization_misses, 0);
    assert_eq!(
        stats.input_rows,
        stats.dropped_rows() + stats.orphan_rows + stats.continuation_rows + stats.records
    );
}

/// Test that no emitted record is a repeated header or banner
#[test]
fn test_filtered_rows_never_emitted() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(&temp_dir, "paged.csv", PAGED_LOG);

    let result = Pipeline::new(Config::default())
        .unwrap()
        .process(&read_source(&path).unwrap());

    for record in &result.records {
        assert_ne!(record.get("Case #"), Some("Case #"));
        assert!(!record.values().iter().any(|v| v.contains("Page 1 of 2")));
        assert!(!record.values().iter().any(|v| v.contains("Daily Crime Log")));
    }
}

/// Test the standard schema with title casing
///
/// Purpose: Validate renaming to standard headers and shouting text cleanup
/// Benefit: Logs from different campuses line up column for column
#[test]
fn test_standard_schema_with_title_case() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(
        &temp_dir,
        "shouting.csv",
        "Report No,Incident,Location,Status,Officer\n\
         R-77,THEFT OF BICYCLE,NORTH LOT - ON CAMPUS,CLSD,Smith\n",
    );

    let config = Config {
        standard_schema: true,
        title_case_output: true,
        ..Config::default()
    };
    let result = Pipeline::new(config)
        .unwrap()
        .process(&read_source(&path).unwrap());

    assert_eq!(result.headers.len(), 6);
    assert!(!result.headers.iter().any(|h| h == "Officer"));

    let record = &result.records[0];
    assert_eq!(record.get("Case Number"), Some("R-77"));
    assert_eq!(record.get("Crime Type"), Some("Theft of Bicycle"));
    assert_eq!(record.get("Location"), Some("North Lot"));
    assert_eq!(record.get("Disposition"), Some("Closed"));
    assert_eq!(record.get("Date/Time Reported"), Some(""));
}

/// Test folding a separate time column into its date column
#[test]
fn test_date_time_pair_folding() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(
        &temp_dir,
        "split_time.csv",
        "Case #,Date Occurred,Time Occurred,Location\n\
         K1,1/3/25,1510,Lobby\n\
         K2,1/4/25,,Gym\n",
    );

    let config = Config {
        date_time_pairs: vec![DateTimePair {
            date: "Date Occurred".to_string(),
            time: "Time Occurred".to_string(),
        }],
        ..Config::default()
    };
    let result = Pipeline::new(config)
        .unwrap()
        .process(&read_source(&path).unwrap());

    assert_eq!(result.headers, vec!["Case #", "Date Occurred", "Location"]);
    assert_eq!(result.records[0].get("Date Occurred"), Some("2025-01-03 15:10"));
    assert_eq!(result.records[1].get("Date Occurred"), Some("2025-01-04"));
}

/// Test a record key pattern that rejects stray key-column text
///
/// Purpose: Non-matching key cells continue the open record instead of opening one
/// Benefit: Wrapped text in the key column does not split incidents
#[test]
fn test_record_key_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(
        &temp_dir,
        "wrapped.csv",
        "Case #,Location\n\
         2025-0001,Lobby\n\
         (cont),Hall\n\
         2025-0002,Gym\n",
    );

    let config = Config {
        record_key_pattern: Some(r"^\d{4}-\d{4}$".to_string()),
        ..Config::default()
    };
    let result = Pipeline::new(config)
        .unwrap()
        .process(&read_source(&path).unwrap());

    assert_eq!(result.record_count(), 2);
    assert_eq!(result.records[0].get("Case #"), Some("2025-0001 (cont)"));
    assert_eq!(result.records[0].get("Location"), Some("Lobby, Hall"));
}

/// Test configuration loaded from a file drives the pipeline
#[test]
fn test_config_file_drives_pipeline() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
standardize_disposition = false
strict_schema = true
date_style = "us_slash"
"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let pipeline = Pipeline::new(config).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = write_log(
        &temp_dir,
        "configured.csv",
        "Case #,Date Reported,Disposition,Notes\nK1,12/4/2024,CLSD,see file\n",
    );
    let result = pipeline.process(&read_source(&path).unwrap());

    assert_eq!(result.headers, vec!["Case #", "Date Reported", "Disposition"]);
    assert_eq!(result.records[0].get("Date Reported"), Some("12/04/2024"));
    assert_eq!(result.records[0].get("Disposition"), Some("CLSD"));
}

/// Test diagnostics for orphans and unrecognized dates
#[test]
fn test_diagnostics_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(
        &temp_dir,
        "noisy.csv",
        "Case #,Date Reported,Location\n\
         ,,Before any record\n\
         K1,sometime last week,Lobby\n",
    );

    let result = Pipeline::new(Config::default())
        .unwrap()
        .process(&read_source(&path).unwrap());

    assert_eq!(result.record_count(), 1);
    assert_eq!(result.stats.orphan_rows, 1);
    assert_eq!(result.stats.normalization_misses, 1);
    assert_eq!(
        result.records[0].get("Date Reported"),
        Some("sometime last week")
    );
    assert!(result
        .stats
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::OrphanContinuation { position: 0 })));
    assert_eq!(result.stats.diagnostic_count("normalization_miss"), 1);
}
