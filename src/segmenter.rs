use crate::dictionary::Dictionary;
use crate::text::{fold_spelling, units};
use serde::Serialize;

/// One matching unit: the source graphemes it covers and the spellings
/// still accepted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub source_units: String,
    /// Full spelling list, used to restore `candidates` when the group becomes current.
    pub romanizations: Vec<String>,
    pub candidates: Vec<String>,
    passthrough: bool,
}

impl Group {
    /// `romanizations` must be non-empty; `Dictionary::build` guarantees it.
    pub(crate) fn new(source_units: &str, romanizations: Vec<String>) -> Self {
        Self {
            source_units: source_units.to_string(),
            candidates: romanizations.clone(),
            romanizations,
            passthrough: false,
        }
    }

    /// Literal fallback for a unit the dictionary does not map.
    pub fn passthrough(unit: char) -> Self {
        let literal = fold_spelling(&unit.to_string());
        Self {
            source_units: unit.to_string(),
            candidates: vec![literal.clone()],
            romanizations: vec![literal],
            passthrough: true,
        }
    }

    pub fn primary(&self) -> &str {
        &self.romanizations[0]
    }

    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    pub fn reset_candidates(&mut self) {
        self.candidates.clone_from(&self.romanizations);
    }
}

/// Greedy longest-match segmentation. At each position, key lengths from
/// `max_key_len` down to 1 are tried and the first dictionary hit wins; a
/// unit with no hit becomes a passthrough group. No backtracking.
pub fn segment(phrase: &str, dictionary: &Dictionary, max_key_len: usize) -> Vec<Group> {
    let chars = units(phrase);
    let mut groups = Vec::with_capacity(chars.len());
    let mut pos = 0;

    'scan: while pos < chars.len() {
        let longest = max_key_len.min(chars.len() - pos);
        for len in (1..=longest).rev() {
            let slice: String = chars[pos..pos + len].iter().collect();
            if let Some(entry) = dictionary.lookup(&slice) {
                groups.push(Group::new(&slice, entry.romanizations.clone()));
                pos += len;
                continue 'scan;
            }
        }
        groups.push(Group::passthrough(chars[pos]));
        pos += 1;
    }

    groups
}

/// Canonical romanization of a whole group list (first spelling of each).
pub fn canonical_spelling(groups: &[Group]) -> String {
    groups.iter().map(|g| g.primary()).collect()
}
