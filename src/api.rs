use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::StrikeResult;
use crate::loader::{load_dictionary, load_questions};
use crate::question::QuestionRecord;
use crate::session::SessionController;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Dictionary and question pool, loaded once and shared by every session.
#[derive(Debug, Clone)]
pub struct GameData {
    pub dictionary: Arc<Dictionary>,
    pub questions: Arc<Vec<QuestionRecord>>,
}

impl GameData {
    pub fn new(dictionary: Dictionary, questions: Vec<QuestionRecord>) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            questions: Arc::new(questions),
        }
    }

    /// Both files must load; there is no retry.
    pub fn load<P1: AsRef<Path>, P2: AsRef<Path>>(dictionary_path: P1, questions_path: P2) -> StrikeResult<Self> {
        let dictionary = load_dictionary(dictionary_path)?;
        let questions = load_questions(questions_path)?;
        info!(
            "Game data ready: {} dictionary keys, {} questions",
            dictionary.len(),
            questions.len()
        );
        Ok(Self::new(dictionary, questions))
    }

    /// Builds a fresh session context for `config`, without starting it.
    pub fn session(&self, config: &Config) -> StrikeResult<SessionController> {
        let plan = config.plan()?;
        Ok(SessionController::new(
            Arc::clone(&self.dictionary),
            &self.questions,
            plan,
        ))
    }

    /// Builds and starts a session at `now`.
    pub fn start(&self, config: &Config, now: Instant) -> StrikeResult<SessionController> {
        let mut session = self.session(config)?;
        session.start(now)?;
        Ok(session)
    }
}
