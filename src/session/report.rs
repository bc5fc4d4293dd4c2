use crate::config::Difficulty;
use crate::question::PlayMode;
use crate::segmenter::Group;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FinishReason {
    Cleared,
    TimedOut,
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Idle,
    Active,
    Finished(FinishReason),
}

impl SessionStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionStatus::Finished(_))
    }
}

/// Final statistics of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub reason: FinishReason,
    pub elapsed_time: f64,
    /// Capped at the target's max HP.
    pub total_damage: u32,
    pub correct_count: u32,
    pub miss_count: u32,
    pub keys_per_second: f64,
    pub max_combo: u32,
    pub questions_cleared: u32,
    pub ranking_eligible: bool,
}

pub fn keys_per_second(correct_count: u32, elapsed_time: f64) -> f64 {
    if elapsed_time > 0.0 {
        correct_count as f64 / elapsed_time
    } else {
        0.0
    }
}

/// Record handed to an external ranking store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub name: String,
    pub elapsed_time: f64,
    pub total_damage: u32,
    pub miss_count: u32,
    pub keys_per_second: f64,
    pub mode: PlayMode,
    pub difficulty: Difficulty,
}

impl RankingEntry {
    /// Leaderboard order: more damage first, then fewer misses.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .total_damage
            .cmp(&self.total_damage)
            .then(self.miss_count.cmp(&other.miss_count))
    }
}

/// Read-only view for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub hp: u32,
    pub max_hp: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub time_remaining: f64,
    pub display_text: Option<String>,
    pub typed_source: String,
    pub remaining_source: String,
    pub current_group: Option<Group>,
    pub partial_input: String,
    /// Canonical romaji still to type; only filled in practice sessions.
    pub guide: Option<String>,
}
