use crate::consts::{NASAL_BLOCKING_CONSONANTS, NASAL_TRIGGER, NASAL_UNIT, NASAL_VOWELS};
use crate::segmenter::Group;

/// Lookahead rule for the standalone moraic nasal.
///
/// A single trigger key completes the nasal group when the following group
/// cannot begin with a spelling that would make the single key ambiguous
/// (a vowel, or one of the blocking consonants such as `n`/`y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NasalPolicy {
    pub enabled: bool,
    pub unit: String,
    pub trigger: char,
    pub vowels: Vec<char>,
    pub blocking: Vec<char>,
}

impl Default for NasalPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            unit: NASAL_UNIT.to_string(),
            trigger: NASAL_TRIGGER,
            vowels: NASAL_VOWELS.chars().collect(),
            blocking: NASAL_BLOCKING_CONSONANTS.chars().collect(),
        }
    }
}

impl NasalPolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// `key` must already be case-folded.
    pub fn applies(&self, current: &Group, partial: &str, next: Option<&Group>, key: char) -> bool {
        if !self.enabled || key != self.trigger || !partial.is_empty() {
            return false;
        }
        if current.source_units != self.unit {
            return false;
        }
        if !current.candidates.iter().any(|c| c.starts_with(key)) {
            return false;
        }
        let Some(next) = next else {
            return false;
        };
        match next.primary().chars().next() {
            Some(c) => !self.vowels.contains(&c) && !self.blocking.contains(&c),
            None => false,
        }
    }
}
