//! Dispatch of normalization by column role

use super::capitalization::TitleCaser;
use super::crime_type::normalize_crime_type;
use super::date_time::{DateOptions, try_normalize_date_time};
use super::disposition::{DispositionOptions, normalize_disposition};
use super::location::normalize_location;
use crate::Result;
use crate::app::models::ColumnRole;
use crate::config::Config;

/// Outcome of normalizing one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedValue {
    /// Normalized text (the trimmed input when unrecognized)
    pub value: String,
    /// False when a date/time value matched no known shape
    pub recognized: bool,
}

impl NormalizedValue {
    fn recognized(value: String) -> Self {
        Self {
            value,
            recognized: true,
        }
    }
}

/// Role-aware normalizer configured once per pipeline
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    date_options: DateOptions,
    disposition_options: DispositionOptions,
    title_caser: Option<TitleCaser>,
}

impl FieldNormalizer {
    /// Build a normalizer from the processing configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let title_caser = if config.title_case_output {
            Some(TitleCaser::new(&config.stop_words, &config.abbreviations)?)
        } else {
            None
        };

        Ok(Self {
            date_options: DateOptions {
                style: config.date_style,
                collapse_ranges: config.collapse_ranges,
            },
            disposition_options: DispositionOptions {
                strip_dates: config.strip_dates_from_disposition,
                standardize: config.standardize_disposition,
            },
            title_caser,
        })
    }

    /// Normalize a value according to its column role
    ///
    /// Record keys and `Other` columns are only trimmed. Free-text roles are
    /// title-cased afterwards when title-casing is enabled.
    pub fn normalize(&self, role: ColumnRole, raw: &str) -> NormalizedValue {
        let normalized = match role {
            ColumnRole::RecordKey | ColumnRole::Other => {
                NormalizedValue::recognized(raw.trim().to_string())
            }
            ColumnRole::DateTimeReported | ColumnRole::DateTimeOccurred => {
                match try_normalize_date_time(raw, self.date_options) {
                    Some(value) => NormalizedValue::recognized(value),
                    None => NormalizedValue {
                        value: raw.trim().to_string(),
                        recognized: false,
                    },
                }
            }
            ColumnRole::Location => NormalizedValue::recognized(normalize_location(raw)),
            ColumnRole::CrimeType => NormalizedValue::recognized(normalize_crime_type(raw)),
            ColumnRole::Disposition => {
                NormalizedValue::recognized(normalize_disposition(raw, self.disposition_options))
            }
        };

        match &self.title_caser {
            Some(caser) if role.is_free_text() => NormalizedValue {
                value: caser.apply(&normalized.value),
                ..normalized
            },
            _ => normalized,
        }
    }
}
