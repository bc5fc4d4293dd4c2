use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrikeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dictionary or question pool missing or malformed. Fatal to starting a session.
    #[error("Data Load Error: {0}")]
    DataLoad(String),

    /// The difficulty filter left nothing to ask.
    #[error("Empty Question Pool: no questions for difficulty levels {levels:?}")]
    EmptyPool { levels: Vec<u8> },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Session State: {0}")]
    InvalidState(String),

    #[error("Ranking Ineligible: {0}")]
    RankingIneligible(String),
}

impl StrikeError {
    /// Wraps a source error as a `DataLoad` failure, keeping the origin in the message.
    pub fn data_load(origin: &str, err: impl std::fmt::Display) -> Self {
        StrikeError::DataLoad(format!("{}: {}", origin, err))
    }
}

pub type StrikeResult<T> = Result<T, StrikeError>;
