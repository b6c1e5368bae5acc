//! Role assignment for crime log columns

use super::header::{ExclusionReason, clean_header, exclusion_reason};
use crate::Result;
use crate::app::models::{ColumnProfile, ColumnRole, Diagnostic};
use crate::config::{Config, compile_patterns};
use crate::constants::RANGE_HEADER_PATTERN;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A column left out of the canonical schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedColumn {
    pub index: usize,
    pub header: String,
    pub reason: ExclusionReason,
}

/// Outcome of classifying one source's columns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// One profile per retained column, in source column order
    pub profiles: Vec<ColumnProfile>,

    /// Columns dropped before classification
    pub excluded: Vec<ExcludedColumn>,

    /// Ambiguities resolved by fallback rules
    pub diagnostics: Vec<Diagnostic>,
}

impl Classification {
    /// Profile bound to a role, if any
    pub fn profile_for(&self, role: ColumnRole) -> Option<&ColumnProfile> {
        self.profiles.iter().find(|p| p.role == role)
    }

    /// Check whether a record key column was found
    pub fn has_record_key(&self) -> bool {
        self.profile_for(ColumnRole::RecordKey).is_some()
    }
}

/// Column classifier with all patterns compiled up front
#[derive(Debug, Clone)]
pub struct ColumnClassifier {
    header_patterns: Vec<(ColumnRole, Vec<Regex>)>,
    value_patterns: Vec<(ColumnRole, Vec<Regex>)>,
    metadata_patterns: Vec<Regex>,
    range_pattern: Regex,
}

impl ColumnClassifier {
    /// Compile the classifier's patterns from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut header_patterns = Vec::with_capacity(ColumnRole::PRIORITY.len());
        let mut value_patterns = Vec::with_capacity(ColumnRole::PRIORITY.len());

        for role in ColumnRole::PRIORITY {
            header_patterns.push((role, compile_patterns(config.patterns_for(role))?));
            value_patterns.push((role, compile_patterns(config.value_patterns_for(role))?));
        }

        Ok(Self {
            header_patterns,
            value_patterns,
            metadata_patterns: compile_patterns(&config.metadata_patterns)?,
            range_pattern: Regex::new(RANGE_HEADER_PATTERN)
                .map_err(|e| crate::Error::invalid_pattern(RANGE_HEADER_PATTERN, e))?,
        })
    }

    /// Classify a source's columns
    ///
    /// `samples` holds sampled non-empty values per column (indexed like
    /// `headers`); it may be empty when no rows are available. Samples are
    /// only consulted when no header matches any role.
    pub fn classify<S: AsRef<str>>(&self, headers: &[S], samples: &[Vec<String>]) -> Classification {
        let mut classification = Classification::default();
        let mut retained = Vec::new();

        for (index, raw) in headers.iter().enumerate() {
            let header = clean_header(raw.as_ref());
            match exclusion_reason(&header, &self.metadata_patterns) {
                Some(reason) => {
                    debug!("Excluding column {} ('{}'): {}", index, raw.as_ref(), reason);
                    classification.excluded.push(ExcludedColumn {
                        index,
                        header,
                        reason,
                    });
                }
                None => retained.push((index, header)),
            }
        }

        let mut assigned = self.assign_by_header(&retained);

        if assigned.is_empty() && samples.iter().any(|column| !column.is_empty()) {
            debug!("No header matched any role, classifying by sampled values");
            assigned = self.assign_by_samples(&retained, samples);
        }

        if !assigned.values().any(|role| *role == ColumnRole::RecordKey) {
            if let Some((index, header)) = retained.first() {
                let detail = format!(
                    "no record key column found; using first column '{}' as key",
                    header
                );
                warn!("{}", detail);
                assigned.insert(*index, ColumnRole::RecordKey);
                classification.diagnostics.push(Diagnostic::ClassificationAmbiguity {
                    role: ColumnRole::RecordKey,
                    detail,
                });
            }
        }

        classification.profiles = retained
            .into_iter()
            .map(|(index, header)| {
                let role = assigned.get(&index).copied().unwrap_or(ColumnRole::Other);
                let is_range = self.range_pattern.is_match(&header);
                debug!("Column {} '{}' classified as {}", index, header, role);
                ColumnProfile::new(index, header, role, is_range)
            })
            .collect();

        classification
    }

    /// Fill roles in priority order; each pattern picks the first free column
    fn assign_by_header(&self, retained: &[(usize, String)]) -> BTreeMap<usize, ColumnRole> {
        let mut assigned = BTreeMap::new();

        for (role, patterns) in &self.header_patterns {
            let found = patterns.iter().find_map(|pattern| {
                retained
                    .iter()
                    .find(|(index, header)| {
                        !assigned.contains_key(index) && pattern.is_match(header)
                    })
                    .map(|(index, _)| *index)
            });
            if let Some(index) = found {
                assigned.insert(index, *role);
            }
        }

        assigned
    }

    /// Fill roles in priority order from sampled values
    fn assign_by_samples(
        &self,
        retained: &[(usize, String)],
        samples: &[Vec<String>],
    ) -> BTreeMap<usize, ColumnRole> {
        let mut assigned = BTreeMap::new();

        for (role, patterns) in &self.value_patterns {
            let found = retained.iter().find(|(index, _)| {
                !assigned.contains_key(index)
                    && samples
                        .get(*index)
                        .is_some_and(|values| samples_match(values, patterns))
            });
            if let Some((index, _)) = found {
                assigned.insert(*index, *role);
            }
        }

        assigned
    }
}

/// At least half of the non-empty samples must match one of the patterns
fn samples_match(values: &[String], patterns: &[Regex]) -> bool {
    let non_empty: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if non_empty.is_empty() || patterns.is_empty() {
        return false;
    }

    let matching = non_empty
        .iter()
        .filter(|value| patterns.iter().any(|re| re.is_match(value)))
        .count();
    matching * 2 >= non_empty.len()
}
