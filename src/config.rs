//! Configuration management and validation.
//!
//! Provides the processing configuration: role pattern tables, row filter
//! thresholds, normalizer switches and output schema modes. Configuration
//! is layered: built-in defaults, then an optional TOML file, then
//! `CRIMELOG_*` environment overrides, then CLI flags.

use crate::app::models::ColumnRole;
use crate::constants::{
    CRIME_TYPE_PATTERNS, CRIME_TYPE_VALUE_PATTERNS, DATE_TIME_OCCURRED_PATTERNS,
    DATE_TIME_REPORTED_PATTERNS, DATE_VALUE_PATTERNS, DEFAULT_ABBREVIATIONS,
    DEFAULT_MIN_HEADER_REPEAT_MATCHES, DEFAULT_STOP_WORDS, DISPOSITION_PATTERNS,
    DISPOSITION_VALUE_PATTERNS, ENV_PREFIX, LOCATION_PATTERNS, LOCATION_VALUE_PATTERNS,
    MAX_SAMPLE_SIZE, METADATA_PATTERNS, RECORD_KEY_PATTERNS, RECORD_KEY_VALUE_PATTERNS,
};
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output style for normalized dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// `YYYY-MM-DD` with an optional ` HH:MM`
    #[default]
    Iso,
    /// `MM/DD/YYYY` with an optional ` HH:MM`
    UsSlash,
}

/// A date column and a separate time column to fold into it
///
/// Some exports keep the occurrence date and time in two columns. The time
/// column's value is formatted and appended to the date column, and the time
/// column is removed from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimePair {
    /// Header of the column holding the date
    pub date: String,
    /// Header of the column holding the time
    pub time: String,
}

/// Processing configuration for one or more crime log sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header patterns per role (case-insensitive regular expressions)
    pub role_patterns: BTreeMap<ColumnRole, Vec<String>>,

    /// Value patterns per role, used when no header matches any role
    pub value_patterns: BTreeMap<ColumnRole, Vec<String>>,

    /// Patterns marking report banners, page footers and metadata headers
    pub metadata_patterns: Vec<String>,

    /// Cells matching the source headers needed to drop a row as a repeated header
    pub min_header_repeat_matches: usize,

    /// Optional pattern a record key must match to open a new record
    pub record_key_pattern: Option<String>,

    /// Number of non-empty values sampled per column for classification
    pub sample_size: usize,

    /// Expand disposition abbreviations such as `CLSD`
    pub standardize_disposition: bool,

    /// Remove embedded dates and times from dispositions
    pub strip_dates_from_disposition: bool,

    /// Convert shouting text to title case in free-text columns
    pub title_case_output: bool,

    /// Drop columns whose role is `Other`
    pub strict_schema: bool,

    /// Reduce output to one standard column per role
    pub standard_schema: bool,

    /// Keep only the first value of a date/time range
    pub collapse_ranges: bool,

    /// Output style for normalized dates
    pub date_style: DateStyle,

    /// Date and time columns to fold together before normalization
    pub date_time_pairs: Vec<DateTimePair>,

    /// Words kept lower-case by the title-caser
    pub stop_words: Vec<String>,

    /// Abbreviations re-uppercased after title-casing
    pub abbreviations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role_patterns: default_role_patterns(),
            value_patterns: default_value_patterns(),
            metadata_patterns: to_strings(METADATA_PATTERNS),
            min_header_repeat_matches: DEFAULT_MIN_HEADER_REPEAT_MATCHES,
            record_key_pattern: None,
            sample_size: MAX_SAMPLE_SIZE,
            standardize_disposition: true,
            strip_dates_from_disposition: true,
            title_case_output: false,
            strict_schema: false,
            standard_schema: false,
            collapse_ranges: true,
            date_style: DateStyle::Iso,
            date_time_pairs: Vec::new(),
            stop_words: to_strings(DEFAULT_STOP_WORDS),
            abbreviations: to_strings(DEFAULT_ABBREVIATIONS),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Roles missing from `role_patterns` or `value_patterns` keep their
    /// built-in lists, so a file only needs to name what it changes.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let mut config: Config = toml::from_str(&content)?;
        config.fill_missing_patterns();
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration using the layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Default location of the user configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(base.join("crimelog-processor").join("config.toml"))
    }

    /// Apply `CRIMELOG_*` boolean overrides from the environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        let switches: [(&str, &mut bool); 6] = [
            ("STRICT_SCHEMA", &mut self.strict_schema),
            ("STANDARD_SCHEMA", &mut self.standard_schema),
            ("TITLE_CASE", &mut self.title_case_output),
            ("STANDARDIZE_DISPOSITION", &mut self.standardize_disposition),
            ("STRIP_DATES_FROM_DISPOSITION", &mut self.strip_dates_from_disposition),
            ("COLLAPSE_RANGES", &mut self.collapse_ranges),
        ];

        for (name, slot) in switches {
            let key = format!("{}{}", ENV_PREFIX, name);
            if let Ok(raw) = std::env::var(&key) {
                *slot = parse_bool(&raw).ok_or_else(|| {
                    Error::configuration(format!("{} must be true or false, got '{}'", key, raw))
                })?;
                debug!("Environment override {}={}", key, slot);
            }
        }

        Ok(())
    }

    /// Header patterns for a role (empty for `Other`)
    pub fn patterns_for(&self, role: ColumnRole) -> &[String] {
        self.role_patterns
            .get(&role)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Value patterns for a role, falling back to its header patterns
    pub fn value_patterns_for(&self, role: ColumnRole) -> &[String] {
        match self.value_patterns.get(&role) {
            Some(patterns) if !patterns.is_empty() => patterns,
            _ => self.patterns_for(role),
        }
    }

    /// Validate ranges and compile every pattern once
    pub fn validate(&self) -> Result<()> {
        if self.min_header_repeat_matches == 0 {
            return Err(Error::configuration(
                "min_header_repeat_matches must be at least 1",
            ));
        }

        if self.sample_size == 0 || self.sample_size > MAX_SAMPLE_SIZE {
            return Err(Error::configuration(format!(
                "sample_size must be between 1 and {}, got {}",
                MAX_SAMPLE_SIZE, self.sample_size
            )));
        }

        if self.strict_schema && self.standard_schema {
            return Err(Error::configuration(
                "strict_schema and standard_schema are mutually exclusive",
            ));
        }

        if self.role_patterns.contains_key(&ColumnRole::Other) {
            return Err(Error::configuration(
                "role_patterns cannot assign the 'other' role",
            ));
        }

        let all_patterns = self
            .role_patterns
            .values()
            .chain(self.value_patterns.values())
            .flatten()
            .chain(self.metadata_patterns.iter())
            .chain(self.record_key_pattern.iter());
        for pattern in all_patterns {
            compile_pattern(pattern)?;
        }

        for pair in &self.date_time_pairs {
            if pair.date.trim().is_empty() || pair.time.trim().is_empty() {
                return Err(Error::configuration(
                    "date_time_pairs entries need both a date and a time header",
                ));
            }
        }

        Ok(())
    }

    /// Restore built-in pattern lists for roles a config file left out
    fn fill_missing_patterns(&mut self) {
        for (role, patterns) in default_role_patterns() {
            self.role_patterns.entry(role).or_insert(patterns);
        }
        for (role, patterns) in default_value_patterns() {
            self.value_patterns.entry(role).or_insert(patterns);
        }
    }
}

/// Compile a configured pattern as a case-insensitive regular expression
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("(?i){}", pattern)).map_err(|e| Error::invalid_pattern(pattern, e))
}

/// Compile a list of configured patterns
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns.iter().map(|p| compile_pattern(p)).collect()
}

fn default_role_patterns() -> BTreeMap<ColumnRole, Vec<String>> {
    BTreeMap::from([
        (ColumnRole::RecordKey, to_strings(RECORD_KEY_PATTERNS)),
        (
            ColumnRole::DateTimeReported,
            to_strings(DATE_TIME_REPORTED_PATTERNS),
        ),
        (
            ColumnRole::DateTimeOccurred,
            to_strings(DATE_TIME_OCCURRED_PATTERNS),
        ),
        (ColumnRole::Location, to_strings(LOCATION_PATTERNS)),
        (ColumnRole::CrimeType, to_strings(CRIME_TYPE_PATTERNS)),
        (ColumnRole::Disposition, to_strings(DISPOSITION_PATTERNS)),
    ])
}

fn default_value_patterns() -> BTreeMap<ColumnRole, Vec<String>> {
    BTreeMap::from([
        (ColumnRole::RecordKey, to_strings(RECORD_KEY_VALUE_PATTERNS)),
        (ColumnRole::DateTimeReported, to_strings(DATE_VALUE_PATTERNS)),
        (ColumnRole::DateTimeOccurred, to_strings(DATE_VALUE_PATTERNS)),
        (ColumnRole::Location, to_strings(LOCATION_VALUE_PATTERNS)),
        (ColumnRole::CrimeType, to_strings(CRIME_TYPE_VALUE_PATTERNS)),
        (ColumnRole::Disposition, to_strings(DISPOSITION_VALUE_PATTERNS)),
    ])
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
