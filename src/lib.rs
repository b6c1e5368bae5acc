//! Crime Log Processor Library
//!
//! A Rust library for reconstructing and normalizing campus-police crime log
//! tables exported from CSV files, spreadsheets, scraped HTML tables and
//! PDF text extraction.
//!
//! This library provides tools for:
//! - Inferring the semantic role of each column from its header (or sampled values)
//! - Dropping repeated page headers, metadata banners and blank rows
//! - Reassembling incidents that were split across several physical rows
//! - Merging continuation rows with role-specific policies
//! - Normalizing dates, times, dispositions, crime types and capitalization
//! - Reporting dropped rows, orphan continuations and normalization misses

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod column_classifier;
        pub mod field_normalizers;
        pub mod pipeline;
        pub mod record_assembler;
    }
    pub mod adapters {
        pub mod csv_source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CanonicalRecord, ColumnProfile, ColumnRole, RawRow, SourceTable};
pub use app::services::pipeline::{Pipeline, PipelineResult, PipelineStats};
pub use config::Config;

/// Result type alias for the crime log processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the fallible edges of crime log processing
///
/// The reconstruction core itself never fails; these errors come from
/// configuration, pattern compilation, file access and the CLI runtime.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A role, value, metadata or record-key pattern is not a valid regex
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration file: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: toml::de::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },

    /// A background processing task panicked or was cancelled
    #[error("Processing task failed for '{source_name}': {message}")]
    TaskFailed {
        source_name: String,
        message: String,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Create a task failure error
    pub fn task_failed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TaskFailed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "Failed to serialize report".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse {
            message: error.message().to_string(),
            source: error,
        }
    }
}
