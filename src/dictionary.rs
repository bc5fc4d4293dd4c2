use crate::error::{StrikeError, StrikeResult};
use crate::text::{fold_spelling, normalize_phrase};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Raw dictionary row as delivered by a loader. Accepts both the native
/// `{ key, romanizations }` shape and the legacy `{ Pattern, TypePattern }` one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawPatternEntry {
    #[serde(alias = "Pattern")]
    pub key: String,
    #[serde(alias = "TypePattern")]
    pub romanizations: Vec<String>,
}

impl RawPatternEntry {
    pub fn new(key: &str, romanizations: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            romanizations: romanizations.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One grapheme key and its accepted spellings. The first spelling is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    pub key: String,
    pub key_len: usize,
    pub romanizations: Vec<String>,
}

impl PatternEntry {
    pub fn canonical(&self) -> &str {
        &self.romanizations[0]
    }
}

/// Pattern table ordered by descending key length (stable on ties), with an
/// index for exact-key lookup during segmentation.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<PatternEntry>,
    index: HashMap<String, usize>,
    max_key_len: usize,
}

impl Dictionary {
    /// Validates and orders raw rows. Empty keys and rows with no usable
    /// spelling are rejected; a repeated key keeps its first occurrence.
    pub fn build(raw: Vec<RawPatternEntry>) -> StrikeResult<Self> {
        let mut entries = Vec::with_capacity(raw.len());

        for (row, r) in raw.into_iter().enumerate() {
            let key = normalize_phrase(&r.key);
            if key.is_empty() {
                return Err(StrikeError::DataLoad(format!(
                    "dictionary row {} has an empty key",
                    row
                )));
            }

            let romanizations: Vec<String> = r
                .romanizations
                .iter()
                .map(|s| fold_spelling(s.trim()))
                .filter(|s| !s.is_empty())
                .collect();

            if romanizations.is_empty() {
                return Err(StrikeError::DataLoad(format!(
                    "dictionary key '{}' (row {}) has no romanizations",
                    key, row
                )));
            }

            let key_len = key.chars().count();
            entries.push(PatternEntry {
                key,
                key_len,
                romanizations,
            });
        }

        // sort_by is stable, so file order breaks ties
        entries.sort_by(|a, b| b.key_len.cmp(&a.key_len));

        let mut index = HashMap::with_capacity(entries.len());
        entries.retain(|e| {
            if index.contains_key(&e.key) {
                warn!("Duplicate dictionary key '{}' ignored", e.key);
                return false;
            }
            index.insert(e.key.clone(), index.len());
            true
        });

        let max_key_len = entries.first().map(|e| e.key_len).unwrap_or(0);

        debug!(
            "Dictionary built: {} entries, {} unique keys, max key length {}",
            entries.len(),
            index.len(),
            max_key_len
        );

        Ok(Self {
            entries,
            index,
            max_key_len,
        })
    }

    pub fn lookup(&self, key: &str) -> Option<&PatternEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// True when every unit of `phrase` is reachable through some key.
    pub fn covers(&self, phrase: &str) -> bool {
        crate::segmenter::segment(phrase, self, self.max_key_len)
            .iter()
            .all(|g| !g.is_passthrough())
    }
}
