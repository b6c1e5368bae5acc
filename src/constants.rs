//! Application constants for the crime log processor
//!
//! This module contains the built-in pattern lists, abbreviation tables,
//! thresholds and standard column names used throughout the processor.

// =============================================================================
// Column Role Patterns
// =============================================================================

/// Header patterns for the record key (case / report / incident number)
pub const RECORD_KEY_PATTERNS: &[&str] = &[
    "case",
    r"incident\s*(#|no\b|num)",
    r"report\s*(#|no\b|num)",
    "#",
    "number",
    r"\bevent\b",
];

/// Header patterns for the date/time an incident was reported
pub const DATE_TIME_REPORTED_PATTERNS: &[&str] = &["reported", "received", r"report\s*date"];

/// Header patterns for the date/time an incident occurred
pub const DATE_TIME_OCCURRED_PATTERNS: &[&str] = &[
    "occur",
    r"\bfrom\b",
    "between",
    "range",
    "date",
    "time",
];

/// Header patterns for location columns
pub const LOCATION_PATTERNS: &[&str] = &["location", "address", "place", "street", "building"];

/// Header patterns for crime type columns
pub const CRIME_TYPE_PATTERNS: &[&str] = &[
    "crime",
    "offen[cs]e",
    "nature",
    "classification",
    "incident",
    "type",
    "event",
];

/// Header patterns for disposition columns
pub const DISPOSITION_PATTERNS: &[&str] = &["disposition", "status", "outcome"];

// =============================================================================
// Sample Value Patterns (used when headers are anonymous)
// =============================================================================

/// Value patterns identifying case numbers such as `2024-00123`
pub const RECORD_KEY_VALUE_PATTERNS: &[&str] = &[r"^[A-Z]{0,4}-?\d{2,4}-\d{3,6}$", r"^\d{6,12}$"];

/// Value patterns identifying date or date/time cells
pub const DATE_VALUE_PATTERNS: &[&str] = &[
    r"\b\d{1,2}/\d{1,2}/\d{2,4}\b",
    r"\b\d{1,2}-\d{1,2}-\d{4}\b",
    r"\b\d{4}-\d{2}-\d{2}\b",
];

/// Address keywords used to tell a location apart from an incident nature
pub const LOCATION_VALUE_PATTERNS: &[&str] = &[
    r"^\d+\s",
    r"\b(street|st|avenue|ave|road|rd|drive|dr|lane|ln|circle|path|way)\b",
    r"\b(hall|building|bldg|campus|lot|garage|center|library)\b",
];

/// Offence words identifying crime type cells
pub const CRIME_TYPE_VALUE_PATTERNS: &[&str] = &[
    r"\b(theft|larceny|assault|burglary|robbery|harassment|trespass|vandalism)\b",
    r"\b(dui|mva|drug|alcohol|liquor|fraud|stalking|weapon|arson)\b",
];

/// Status words identifying disposition cells
pub const DISPOSITION_VALUE_PATTERNS: &[&str] = &[
    r"\b(active|closed|clsd|pending|pend|inactive|investigation|arrest|unfounded|referred|cleared)\b",
];

/// Header text that marks a column as report metadata rather than data
pub const METADATA_PATTERNS: &[&str] = &[
    r"\*MANUALLY ADDED / EDITED",
    r"Page \d+ of \d+",
    r"APDC\s+\(Rev\.",
    r"Print Date:",
    r"\*\*VAWA PROTECTION",
    r"Daily Crime (and Fire )?Log",
];

/// Words in a date header that mark it as a from/to pair
pub const RANGE_HEADER_PATTERN: &str = r"(?i)\b(from|to|between|range)\b";

// =============================================================================
// Thresholds and Limits
// =============================================================================

/// Default number of header matches that marks a row as a repeated header
pub const DEFAULT_MIN_HEADER_REPEAT_MATCHES: usize = 2;

/// Maximum number of sampled values per column for classification
pub const MAX_SAMPLE_SIZE: usize = 20;

/// Minimum length for a cell to count as a partial header match
pub const MIN_PARTIAL_HEADER_MATCH_LEN: usize = 4;

/// Share of upper-case letters above which text is treated as shouting
pub const UPPERCASE_RATIO_THRESHOLD: f64 = 0.7;

/// Two-digit years below this pivot belong to the 2000s
pub const TWO_DIGIT_YEAR_PIVOT: u32 = 50;

/// Sentinel written for dispositions that are empty after cleaning
pub const UNKNOWN_DISPOSITION: &str = "Unknown";

/// Default number of concurrent source workers in the CLI
pub const DEFAULT_PARALLEL_WORKERS: usize = 4;

/// Suffix appended to cleaned output file stems
pub const CLEANED_FILE_SUFFIX: &str = "_cleaned";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "CRIMELOG_";

// =============================================================================
// Abbreviation Tables
// =============================================================================

/// Disposition abbreviations and their expansions (upper-case forms)
pub const DISPOSITION_ABBREVIATIONS: &[(&str, &str)] = &[
    ("CLSD", "CLOSED"),
    ("OPEN/ACTIVE", "OPEN"),
    ("PEND", "PENDING"),
    ("UNFND", "UNFOUNDED"),
    ("INACT", "INACTIVE"),
    ("REF", "REFERRED"),
];

/// Crime type abbreviations and their expansions (upper-case forms)
pub const CRIME_TYPE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("THEFT FM MTR", "THEFT FROM MOTOR VEHICLE"),
    ("BURG", "BURGLARY"),
    ("ASLT", "ASSAULT"),
    ("HARR", "HARASSMENT"),
    ("DUI", "DRIVING UNDER INFLUENCE"),
    ("MVA", "MOTOR VEHICLE ACCIDENT"),
    ("CASLTY-ALCOH", "CASUALTY-ALCOHOL"),
    ("FOUND PROP.", "FOUND PROPERTY"),
];

/// Words kept lower-case by the title-caser unless they start the text
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "for", "nor", "on", "at", "to", "from", "by", "with",
    "in", "of",
];

/// Abbreviations re-uppercased after title-casing
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "ID", "SSN", "DOB", "USA", "UK", "UC", "UCLA", "USC", "GOA", "CA", "DPS", "PD", "LA", "DUI",
    "N/A",
];

// =============================================================================
// Standard Output Schema
// =============================================================================

/// Header used for the leading source column of combined output
pub const SOURCE_COLUMN_HEADER: &str = "Source";

/// Standard header names, in canonical output order
pub mod standard_headers {
    pub const RECORD_KEY: &str = "Case Number";
    pub const DATE_TIME_REPORTED: &str = "Date/Time Reported";
    pub const DATE_TIME_OCCURRED: &str = "Date/Time Occurred";
    pub const LOCATION: &str = "Location";
    pub const CRIME_TYPE: &str = "Crime Type";
    pub const DISPOSITION: &str = "Disposition";
}
