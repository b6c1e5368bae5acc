//! Header cleanup and exclusion rules

use regex::Regex;
use std::sync::OnceLock;

/// Why a column was left out of the canonical schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Header was empty after cleanup
    EmptyHeader,
    /// Placeholder header produced by spreadsheet exports (`Unnamed: 3`)
    UnnamedHeader,
    /// Header is a report banner or footer rather than a column name
    MetadataHeader,
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ExclusionReason::EmptyHeader => "empty header",
            ExclusionReason::UnnamedHeader => "unnamed header",
            ExclusionReason::MetadataHeader => "metadata header",
        };
        f.write_str(text)
    }
}

fn unnamed_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^unnamed:?\s*\d+$").expect("valid regex"))
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Clean a raw header: decode `%20`, drop trailing colons, collapse whitespace
///
/// ```rust
/// use crimelog_processor::app::services::column_classifier::clean_header;
///
/// assert_eq!(clean_header("Date%20Reported:"), "Date Reported");
/// assert_eq!(clean_header("  Case\n#  "), "Case #");
/// ```
pub fn clean_header(raw: &str) -> String {
    let decoded = raw.replace("%20", " ");
    let collapsed = whitespace_run().replace_all(decoded.trim(), " ");
    collapsed.trim_end_matches(':').trim_end().to_string()
}

/// Decide whether a cleaned header is excluded from classification
pub fn exclusion_reason(header: &str, metadata_patterns: &[Regex]) -> Option<ExclusionReason> {
    if header.is_empty() {
        Some(ExclusionReason::EmptyHeader)
    } else if unnamed_header().is_match(header) {
        Some(ExclusionReason::UnnamedHeader)
    } else if metadata_patterns.iter().any(|re| re.is_match(header)) {
        Some(ExclusionReason::MetadataHeader)
    } else {
        None
    }
}
