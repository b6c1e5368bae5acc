//! Tests for pipeline statistics

use super::*;
use crate::app::services::pipeline::PipelineStats;

#[test]
fn test_reconstruction_ratio() {
    let mut stats = PipelineStats::new();
    assert_eq!(stats.reconstruction_ratio(), 0.0);

    stats.records = 2;
    stats.continuation_rows = 2;
    assert_eq!(stats.reconstruction_ratio(), 2.0);
}

#[test]
fn test_merge_accumulates() {
    let pipeline = create_default_pipeline();
    let first = pipeline.process(&create_split_record_source()).stats;
    let second = pipeline.process(&create_split_record_source()).stats;

    let mut total = PipelineStats::new();
    total.merge(&first);
    total.merge(&second);

    assert_eq!(total.sources, 2);
    assert_eq!(total.records, 2);
    assert_eq!(total.input_rows, 8);
    assert_eq!(total.repeated_header_rows, 2);
    assert_eq!(total.empty_values.get("Location"), Some(&0));
}

#[test]
fn test_empty_value_counts() {
    let pipeline = create_default_pipeline();
    let source = SourceTable::from_values(
        "gaps",
        &["Case#", "Location"],
        &[vec!["K1", ""], vec!["K2", "Quad"]],
    );

    let stats = pipeline.process(&source).stats;

    assert_eq!(stats.empty_values.get("Location"), Some(&1));
    assert_eq!(stats.empty_values.get("Case#"), Some(&0));
}

#[test]
fn test_summary_and_serialization() {
    let pipeline = create_default_pipeline();
    let stats = pipeline.process(&create_split_record_source()).stats;

    let summary = stats.summary();
    assert!(summary.contains("4 rows -> 1 records"));
    assert!(summary.contains("1 header"));

    let json = serde_json::to_string(&stats).unwrap();
    let restored: PipelineStats = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, stats);
}
