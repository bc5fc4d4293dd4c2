pub mod picker;
pub mod report;

use self::picker::QuestionPicker;
pub use self::report::{FinishReason, RankingEntry, SessionSnapshot, SessionStatus, SessionSummary};
use crate::config::SessionPlan;
use crate::dictionary::Dictionary;
use crate::error::{StrikeError, StrikeResult};
use crate::matcher::{KeyOutcome, MatchEngine, NasalPolicy};
use crate::question::{filter_pool, Question, QuestionRecord};
use crate::scoring::ScoreState;
use crate::segmenter::{segment, Group};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub hp: u32,
    pub max_hp: u32,
    pub time_remaining: Duration,
    pub time_limit: Duration,
    pub start_timestamp: Option<Instant>,
    pub status: SessionStatus,
}

/// What a keystroke did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionKeyEvent {
    pub outcome: KeyOutcome,
    pub question_complete: bool,
    pub damage: u32,
    pub finished: Option<FinishReason>,
}

/// Owns one play session: timer, HP, score, and the active question's matcher.
pub struct SessionController {
    dictionary: Arc<Dictionary>,
    plan: SessionPlan,
    nasal: Arc<NasalPolicy>,
    pool: Vec<Question>,
    picker: QuestionPicker,
    score: ScoreState,
    state: SessionState,
    engine: Option<MatchEngine>,
    current: Option<usize>,
    questions_cleared: u32,
}

impl SessionController {
    /// Builds an idle session. The play mode is resolved here, once, for the
    /// whole pool.
    pub fn new(dictionary: Arc<Dictionary>, records: &[QuestionRecord], plan: SessionPlan) -> Self {
        let pool = filter_pool(records, plan.mode.binding(), &plan.levels);
        Self::with_pool(dictionary, pool, plan)
    }

    /// Builds an idle session over already resolved questions. Questions with
    /// an empty target are dropped.
    pub fn with_pool(dictionary: Arc<Dictionary>, mut pool: Vec<Question>, plan: SessionPlan) -> Self {
        let before = pool.len();
        pool.retain(|q| !q.target_phrase.is_empty());
        if pool.len() < before {
            warn!("Dropped {} questions with an empty target.", before - pool.len());
        }
        let state = SessionState {
            hp: plan.max_hp,
            max_hp: plan.max_hp,
            time_remaining: plan.time_limit,
            time_limit: plan.time_limit,
            start_timestamp: None,
            status: SessionStatus::Idle,
        };
        Self {
            nasal: Arc::new(plan.nasal.clone()),
            picker: QuestionPicker::new(plan.seed),
            dictionary,
            plan,
            pool,
            score: ScoreState::default(),
            state,
            engine: None,
            current: None,
            questions_cleared: 0,
        }
    }

    pub fn start(&mut self, now: Instant) -> StrikeResult<()> {
        if self.state.status != SessionStatus::Idle {
            return Err(StrikeError::InvalidState(format!(
                "start() called on a {:?} session",
                self.state.status
            )));
        }
        if self.pool.is_empty() {
            return Err(StrikeError::EmptyPool {
                levels: self.plan.levels.clone(),
            });
        }

        self.score = ScoreState::default();
        self.questions_cleared = 0;
        self.state.hp = self.state.max_hp;
        self.state.time_remaining = self.state.time_limit;
        self.state.start_timestamp = Some(now);
        self.state.status = SessionStatus::Active;

        info!(
            "▶️  Session started: mode={}, difficulty={}, pool={}, hp={}, limit={:.2}s",
            self.plan.mode,
            self.plan.difficulty,
            self.pool.len(),
            self.state.max_hp,
            self.state.time_limit.as_secs_f64()
        );

        self.next_question();
        Ok(())
    }

    fn next_question(&mut self) {
        let idx = self.picker.pick(self.pool.len());
        let q = &self.pool[idx];
        let groups = segment(&q.target_phrase, &self.dictionary, self.dictionary.max_key_len());
        debug!(
            "Question #{}: '{}' -> {} groups",
            idx,
            q.target_phrase,
            groups.len()
        );
        self.engine = Some(MatchEngine::new(groups, Arc::clone(&self.nasal)));
        self.current = Some(idx);
    }

    fn finish(&mut self, reason: FinishReason) {
        self.state.status = SessionStatus::Finished(reason);
        self.engine = None;
        info!(
            "⏹️  Session finished ({}): damage={}, correct={}, miss={}, max combo={}",
            reason,
            self.score.total_damage.min(self.state.max_hp),
            self.score.correct_count,
            self.score.miss_count,
            self.score.max_combo
        );
    }

    /// Feeds one keystroke. Returns `None` when the session is not active.
    pub fn consume_key(&mut self, key: char) -> Option<SessionKeyEvent> {
        if self.state.status != SessionStatus::Active {
            return None;
        }
        let engine = self.engine.as_mut()?;
        let ev = engine.consume_key(key);
        trace!("key '{}' -> {}", key, ev.outcome);

        let mut damage = 0;
        match ev.outcome {
            KeyOutcome::Correct => {
                damage = self
                    .plan
                    .scoring
                    .on_correct_unit(&mut self.score, &mut self.state.hp);
            }
            KeyOutcome::Miss => self.plan.scoring.on_miss(&mut self.score),
            KeyOutcome::Continue => {}
        }

        if ev.question_complete {
            self.questions_cleared = self.questions_cleared.saturating_add(1);
        }

        let mut finished = None;
        if self.state.hp == 0 {
            self.finish(FinishReason::Cleared);
            finished = Some(FinishReason::Cleared);
        } else if ev.question_complete {
            self.next_question();
        }

        Some(SessionKeyEvent {
            outcome: ev.outcome,
            question_complete: ev.question_complete,
            damage,
            finished,
        })
    }

    /// Advances the clock to `now` before classifying the key. A key that
    /// arrives after the deadline finishes the session instead.
    pub fn consume_key_at(&mut self, key: char, now: Instant) -> Option<SessionKeyEvent> {
        if self.tick(now).is_some() {
            return None;
        }
        self.consume_key(key)
    }

    /// Recomputes the remaining time from the start instant.
    pub fn tick(&mut self, now: Instant) -> Option<FinishReason> {
        if self.state.status != SessionStatus::Active {
            return None;
        }
        let start = self.state.start_timestamp?;
        let elapsed = now.saturating_duration_since(start);
        self.state.time_remaining = self.state.time_limit.saturating_sub(elapsed);

        if self.state.time_remaining.is_zero() {
            self.finish(FinishReason::TimedOut);
            return Some(FinishReason::TimedOut);
        }
        None
    }

    /// Ends the session as `Aborted` unless it already finished. Idempotent.
    pub fn abort(&mut self) -> SessionStatus {
        if !self.state.status.is_finished() {
            self.finish(FinishReason::Aborted);
        }
        self.state.status
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    pub fn hp(&self) -> u32 {
        self.state.hp
    }

    pub fn combo(&self) -> u32 {
        self.score.combo_count
    }

    pub fn time_remaining(&self) -> Duration {
        self.state.time_remaining
    }

    pub fn pool(&self) -> &[Question] {
        &self.pool
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.state.status != SessionStatus::Active {
            return None;
        }
        self.current.map(|i| &self.pool[i])
    }

    pub fn engine(&self) -> Option<&MatchEngine> {
        self.engine.as_ref()
    }

    pub fn current_group(&self) -> Option<&Group> {
        self.engine.as_ref().and_then(|e| e.current_group())
    }

    pub fn partial_input(&self) -> &str {
        self.engine.as_ref().map(|e| e.partial_input()).unwrap_or("")
    }

    pub fn elapsed_time(&self) -> f64 {
        (self.state.time_limit - self.state.time_remaining).as_secs_f64()
    }

    pub fn ranking_eligible(&self) -> bool {
        matches!(
            self.state.status,
            SessionStatus::Finished(FinishReason::Cleared | FinishReason::TimedOut)
        ) && !self.plan.practice
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let engine = self.engine.as_ref();
        SessionSnapshot {
            status: self.state.status,
            hp: self.state.hp,
            max_hp: self.state.max_hp,
            combo: self.score.combo_count,
            max_combo: self.score.max_combo,
            time_remaining: self.state.time_remaining.as_secs_f64(),
            display_text: self.current_question().map(|q| q.display_text.clone()),
            typed_source: engine.map(|e| e.typed_source()).unwrap_or_default(),
            remaining_source: engine.map(|e| e.remaining_source()).unwrap_or_default(),
            current_group: engine.and_then(|e| e.current_group().cloned()),
            partial_input: self.partial_input().to_string(),
            guide: if self.plan.practice {
                engine.map(|e| e.remaining_guide())
            } else {
                None
            },
        }
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        let SessionStatus::Finished(reason) = self.state.status else {
            return None;
        };
        let elapsed_time = self.elapsed_time();
        Some(SessionSummary {
            reason,
            elapsed_time,
            total_damage: self.score.total_damage.min(self.state.max_hp),
            correct_count: self.score.correct_count,
            miss_count: self.score.miss_count,
            keys_per_second: report::keys_per_second(self.score.correct_count, elapsed_time),
            max_combo: self.score.max_combo,
            questions_cleared: self.questions_cleared,
            ranking_eligible: self.ranking_eligible(),
        })
    }

    pub fn ranking_entry(&self, name: &str) -> StrikeResult<RankingEntry> {
        let summary = self
            .summary()
            .ok_or_else(|| StrikeError::InvalidState("session has not finished".into()))?;

        if self.plan.practice {
            return Err(StrikeError::RankingIneligible("practice sessions are not ranked".into()));
        }
        if summary.reason == FinishReason::Aborted {
            return Err(StrikeError::RankingIneligible("aborted sessions are not ranked".into()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(StrikeError::RankingIneligible("a player name is required".into()));
        }

        Ok(RankingEntry {
            name: name.to_string(),
            elapsed_time: summary.elapsed_time,
            total_damage: summary.total_damage,
            miss_count: summary.miss_count,
            keys_per_second: summary.keys_per_second,
            mode: self.plan.mode,
            difficulty: self.plan.difficulty,
        })
    }
}
