pub mod nasal;

pub use self::nasal::NasalPolicy;
use crate::segmenter::Group;
use crate::text::fold_key;
use serde::Serialize;
use std::sync::Arc;
use strum_macros::Display;
use tracing::trace;

/// Classification of a single keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum KeyOutcome {
    Correct,
    Miss,
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub outcome: KeyOutcome,
    pub question_complete: bool,
}

impl KeyEvent {
    fn new(outcome: KeyOutcome) -> Self {
        Self {
            outcome,
            question_complete: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub groups: Vec<Group>,
    pub current_group_index: usize,
    pub partial_input: String,
}

/// Per-question keystroke state machine.
pub struct MatchEngine {
    state: MatchState,
    policy: Arc<NasalPolicy>,
    // Set after a lookahead completion so one repeated trigger key is absorbed.
    echo_pending: bool,
}

impl MatchEngine {
    pub fn new(groups: Vec<Group>, policy: Arc<NasalPolicy>) -> Self {
        Self {
            state: MatchState {
                groups,
                current_group_index: 0,
                partial_input: String::new(),
            },
            policy,
            echo_pending: false,
        }
    }

    pub fn consume_key(&mut self, key: char) -> KeyEvent {
        let key = fold_key(key);
        let echo = std::mem::take(&mut self.echo_pending);

        let idx = self.state.current_group_index;
        if idx >= self.state.groups.len() {
            trace!("key '{}' after question complete", key);
            return KeyEvent::new(KeyOutcome::Miss);
        }

        if self.policy.applies(
            &self.state.groups[idx],
            &self.state.partial_input,
            self.state.groups.get(idx + 1),
            key,
        ) {
            trace!("nasal lookahead completed group {}", idx);
            self.echo_pending = true;
            return self.advance();
        }

        let mut attempt = self.state.partial_input.clone();
        attempt.push(key);

        let group = &mut self.state.groups[idx];
        let filtered: Vec<String> = group
            .candidates
            .iter()
            .filter(|c| c.starts_with(attempt.as_str()))
            .cloned()
            .collect();

        if filtered.is_empty() {
            // Only exception to the miss rule: the second key of a double
            // trigger after a lookahead completion is swallowed.
            if echo && key == self.policy.trigger && self.state.partial_input.is_empty() {
                trace!("absorbed repeated nasal trigger");
                return KeyEvent::new(KeyOutcome::Continue);
            }
            trace!("miss: '{}' against {:?}", attempt, group.candidates);
            return KeyEvent::new(KeyOutcome::Miss);
        }

        let done = filtered.iter().any(|c| *c == attempt);
        group.candidates = filtered;
        self.state.partial_input = attempt;

        if done {
            self.advance()
        } else {
            KeyEvent::new(KeyOutcome::Continue)
        }
    }

    fn advance(&mut self) -> KeyEvent {
        self.state.current_group_index += 1;
        self.state.partial_input.clear();
        if let Some(next) = self.state.groups.get_mut(self.state.current_group_index) {
            next.reset_candidates();
        }
        KeyEvent {
            outcome: KeyOutcome::Correct,
            question_complete: self.is_complete(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state.current_group_index >= self.state.groups.len()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn current_group(&self) -> Option<&Group> {
        self.state.groups.get(self.state.current_group_index)
    }

    pub fn current_group_index(&self) -> usize {
        self.state.current_group_index
    }

    pub fn partial_input(&self) -> &str {
        &self.state.partial_input
    }

    pub fn group_count(&self) -> usize {
        self.state.groups.len()
    }

    /// Source text of the groups already completed.
    pub fn typed_source(&self) -> String {
        self.state.groups[..self.state.current_group_index]
            .iter()
            .map(|g| g.source_units.as_str())
            .collect()
    }

    /// Source text still to be typed, including the current group.
    pub fn remaining_source(&self) -> String {
        self.state.groups[self.state.current_group_index..]
            .iter()
            .map(|g| g.source_units.as_str())
            .collect()
    }

    /// Spelling still to type: the rest of the first surviving candidate for
    /// the current group, then the canonical spelling of every later group.
    pub fn remaining_guide(&self) -> String {
        let mut out = String::new();
        let idx = self.state.current_group_index;
        if let Some(g) = self.state.groups.get(idx) {
            if let Some(c) = g.candidates.first() {
                out.push_str(&c[self.state.partial_input.len()..]);
            }
            for later in &self.state.groups[idx + 1..] {
                out.push_str(later.primary());
            }
        }
        out
    }

    pub fn suggested_key(&self) -> Option<char> {
        let g = self.current_group()?;
        g.candidates
            .first()
            .and_then(|c| c[self.state.partial_input.len()..].chars().next())
    }
}
