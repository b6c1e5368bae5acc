//! Tests for the reconstruction pipeline

pub mod stats_tests;

use crate::app::models::SourceTable;
use crate::app::services::pipeline::Pipeline;
use crate::config::Config;

/// Pipeline with the default configuration
pub fn create_default_pipeline() -> Pipeline {
    Pipeline::new(Config::default()).unwrap()
}

/// The split-record source used throughout the tests
///
/// One incident (K1) whose location spills over two continuation rows, with
/// the header repeated as the first data row.
pub fn create_split_record_source() -> SourceTable {
    SourceTable::from_values(
        "campus",
        &["Case#", "Location", "Occurred"],
        &[
            vec!["Case#", "Location", "Occurred"],
            vec!["K1", "Lobby", "0836-0917"],
            vec!["", "Hall", ""],
            vec!["", "Rm 2", ""],
        ],
    )
}
