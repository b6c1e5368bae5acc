//! Tests for header cleanup and exclusion

use crate::app::services::column_classifier::{ExclusionReason, clean_header, exclusion_reason};
use crate::config::compile_patterns;
use crate::constants::METADATA_PATTERNS;

#[test]
fn test_clean_header() {
    assert_eq!(clean_header("Date%20Reported"), "Date Reported");
    assert_eq!(clean_header("Location:"), "Location");
    assert_eq!(clean_header("Time :"), "Time");
    assert_eq!(clean_header("  Case\n   Number "), "Case Number");
    assert_eq!(clean_header("Case#"), "Case#");
}

#[test]
fn test_exclusion_reasons() {
    let metadata: Vec<String> = METADATA_PATTERNS.iter().map(|p| p.to_string()).collect();
    let metadata = compile_patterns(&metadata).unwrap();

    assert_eq!(
        exclusion_reason("", &metadata),
        Some(ExclusionReason::EmptyHeader)
    );
    assert_eq!(
        exclusion_reason("Unnamed: 4", &metadata),
        Some(ExclusionReason::UnnamedHeader)
    );
    assert_eq!(
        exclusion_reason("*MANUALLY ADDED / EDITED", &metadata),
        Some(ExclusionReason::MetadataHeader)
    );
    assert_eq!(
        exclusion_reason("Page 1 of 12", &metadata),
        Some(ExclusionReason::MetadataHeader)
    );
    assert_eq!(exclusion_reason("Location", &metadata), None);
    assert_eq!(exclusion_reason("Unnamed Road", &metadata), None);
}
