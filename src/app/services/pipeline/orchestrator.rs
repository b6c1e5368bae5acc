//! End-to-end reconstruction of one source

use super::schema::OutputSchema;
use super::stats::{PipelineResult, PipelineStats};
use crate::Result;
use crate::app::models::{ColumnProfile, Diagnostic, RawRow, RecordDraft, SourceTable};
use crate::app::services::column_classifier::{
    Classification, ColumnClassifier, clean_header, sample_columns,
};
use crate::app::services::field_normalizers::{FieldNormalizer, combine_date_time};
use crate::app::services::record_assembler::{AssemblyStats, RecordAssembler, RowFilter};
use crate::config::{Config, DateTimePair, compile_pattern, compile_patterns};
use regex::Regex;
use tracing::{debug, info, warn};

/// Crime log reconstruction pipeline
///
/// All patterns are compiled once in [`Pipeline::new`]. Processing is
/// synchronous, never fails, and a pipeline can be shared across threads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
    classifier: ColumnClassifier,
    normalizer: FieldNormalizer,
    metadata_patterns: Vec<Regex>,
    key_pattern: Option<Regex>,
}

impl Pipeline {
    /// Validate the configuration and compile every pattern
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let classifier = ColumnClassifier::new(&config)?;
        let normalizer = FieldNormalizer::from_config(&config)?;
        let metadata_patterns = compile_patterns(&config.metadata_patterns)?;
        let key_pattern = config
            .record_key_pattern
            .as_deref()
            .map(compile_pattern)
            .transpose()?;

        Ok(Self {
            config,
            classifier,
            normalizer,
            metadata_patterns,
            key_pattern,
        })
    }

    /// Configuration the pipeline was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Column classifier used by the pipeline
    pub fn classifier(&self) -> &ColumnClassifier {
        &self.classifier
    }

    /// Classify a source's columns without assembling records
    pub fn classify(&self, source: &SourceTable) -> Classification {
        self.prepare(source).classification
    }

    /// Reconstruct, normalize and shape the records of one source
    pub fn process(&self, source: &SourceTable) -> PipelineResult {
        info!(
            "Processing source '{}' ({} columns, {} rows)",
            source.name,
            source.headers.len(),
            source.rows.len()
        );

        let Prepared {
            assembler,
            data_rows,
            filter_stats,
            classification,
        } = self.prepare(source);

        let assembly =
            assembler.assemble_filtered(data_rows, &classification.profiles, filter_stats);

        let mut stats = PipelineStats::from_assembly(&assembly.stats);
        stats.excluded_columns = classification.excluded.clone();
        stats.diagnostics.extend(classification.diagnostics);
        stats.diagnostics.extend(assembly.diagnostics);

        let mut profiles = classification.profiles;
        let mut drafts = assembly.drafts;
        for pair in &self.config.date_time_pairs {
            fold_date_time_pair(pair, &mut profiles, &mut drafts);
        }

        self.normalize_drafts(&profiles, &mut drafts, &mut stats);

        let schema = OutputSchema::build(&profiles, &self.config);
        let records = schema.shape(drafts);

        for (column, header) in schema.headers().iter().enumerate() {
            let empty = records
                .iter()
                .filter(|record| record.values()[column].is_empty())
                .count();
            stats.empty_values.insert(header.clone(), empty);
        }

        info!("Source '{}': {}", source.name, stats.summary());

        PipelineResult {
            source: source.name.clone(),
            headers: schema.headers().to_vec(),
            profiles,
            records,
            stats,
        }
    }

    /// Filter rows, sample the survivors and classify the columns
    fn prepare<'s>(&self, source: &'s SourceTable) -> Prepared<'s> {
        let assembler = RecordAssembler::new(
            RowFilter::new(
                &source.headers,
                self.metadata_patterns.clone(),
                self.config.min_header_repeat_matches,
            ),
            self.key_pattern.clone(),
        );

        let mut filter_stats = AssemblyStats::new();
        let data_rows = assembler.filter_rows(&source.rows, &mut filter_stats);

        let samples = sample_columns(
            data_rows.iter().copied(),
            source.headers.len(),
            self.config.sample_size,
        );
        let classification = self.classifier.classify(&source.headers, &samples);

        Prepared {
            assembler,
            data_rows,
            filter_stats,
            classification,
        }
    }

    fn normalize_drafts(
        &self,
        profiles: &[ColumnProfile],
        drafts: &mut [RecordDraft],
        stats: &mut PipelineStats,
    ) {
        for draft in drafts.iter_mut() {
            for (slot, profile) in profiles.iter().enumerate() {
                let Some(value) = draft.values.get_mut(slot) else {
                    continue;
                };

                let normalized = self.normalizer.normalize(profile.role, value);
                if !normalized.recognized {
                    debug!(
                        "Row {}: unrecognized {} value '{}' in '{}'",
                        draft.source_position, profile.role, normalized.value, profile.header
                    );
                    stats.normalization_misses += 1;
                    stats.diagnostics.push(Diagnostic::NormalizationMiss {
                        column: profile.header.clone(),
                        role: profile.role,
                        value: normalized.value.clone(),
                    });
                }
                *value = normalized.value;
            }
        }
    }
}

struct Prepared<'s> {
    assembler: RecordAssembler,
    data_rows: Vec<&'s RawRow>,
    filter_stats: AssemblyStats,
    classification: Classification,
}

/// Fold a time column into its date column and drop the time column
fn fold_date_time_pair(
    pair: &DateTimePair,
    profiles: &mut Vec<ColumnProfile>,
    drafts: &mut [RecordDraft],
) {
    let find = |name: &str| {
        let name = clean_header(name);
        profiles
            .iter()
            .position(|p| p.header.eq_ignore_ascii_case(&name))
    };

    let (Some(date_slot), Some(time_slot)) = (find(&pair.date), find(&pair.time)) else {
        warn!(
            "Date/time pair '{}' + '{}' not found in source; skipped",
            pair.date, pair.time
        );
        return;
    };
    if date_slot == time_slot {
        return;
    }

    for draft in drafts.iter_mut() {
        let combined = combine_date_time(draft.value(date_slot), draft.value(time_slot));
        draft.values[date_slot] = combined;
        draft.values.remove(time_slot);
    }
    profiles.remove(time_slot);
}
