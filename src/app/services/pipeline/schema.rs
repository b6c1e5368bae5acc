//! Output schema shaping

use crate::app::models::{CanonicalRecord, ColumnProfile, ColumnRole, RecordDraft};
use crate::config::Config;
use std::sync::Arc;

/// Output columns and the draft slot feeding each one
#[derive(Debug, Clone)]
pub struct OutputSchema {
    headers: Arc<[String]>,
    slots: Vec<Option<usize>>,
}

impl OutputSchema {
    /// Decide the output columns for a source
    ///
    /// By default every retained column is kept under its cleaned header.
    /// `strict_schema` drops `Other` columns; `standard_schema` emits exactly
    /// one column per role, in priority order, under the standard header
    /// names, leaving unbound roles empty.
    pub fn build(profiles: &[ColumnProfile], config: &Config) -> Self {
        let (headers, slots): (Vec<String>, Vec<Option<usize>>) = if config.standard_schema {
            ColumnRole::PRIORITY
                .iter()
                .filter_map(|role| {
                    let header = role.standard_header()?;
                    let slot = profiles.iter().position(|p| p.role == *role);
                    Some((header.to_string(), slot))
                })
                .unzip()
        } else {
            profiles
                .iter()
                .enumerate()
                .filter(|(_, p)| !(config.strict_schema && p.role == ColumnRole::Other))
                .map(|(slot, p)| (p.header.clone(), Some(slot)))
                .unzip()
        };

        Self {
            headers: headers.into(),
            slots,
        }
    }

    /// Output headers in order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Turn normalized drafts into records aligned with the headers
    pub fn shape(&self, drafts: Vec<RecordDraft>) -> Vec<CanonicalRecord> {
        drafts
            .into_iter()
            .map(|draft| {
                let values = self
                    .slots
                    .iter()
                    .map(|slot| {
                        slot.map(|s| draft.value(s).to_string())
                            .unwrap_or_default()
                    })
                    .collect();
                CanonicalRecord::new(Arc::clone(&self.headers), values, draft.source_position)
            })
            .collect()
    }
}
