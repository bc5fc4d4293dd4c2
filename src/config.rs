use crate::consts::{
    DEFAULT_BASE_DAMAGE, DEFAULT_DAMAGE_CAP, NASAL_BLOCKING_CONSONANTS, NASAL_TRIGGER, NASAL_UNIT,
    NASAL_VOWELS,
};
use crate::error::{StrikeError, StrikeResult};
use crate::matcher::NasalPolicy;
use crate::question::PlayMode;
use crate::scoring::ScoringModel;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub time_limit_secs: f64,
    pub max_hp: u32,
    pub levels: &'static [u8],
    pub combo_step: u32,
}

impl Difficulty {
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                time_limit_secs: 60.0,
                max_hp: 1000,
                levels: &[1],
                combo_step: 50,
            },
            Self::Normal => DifficultyProfile {
                time_limit_secs: 90.0,
                max_hp: 3000,
                levels: &[1, 2],
                combo_step: 40,
            },
            Self::Hard => DifficultyProfile {
                time_limit_secs: 120.0,
                max_hp: 8000,
                levels: &[1, 2, 3],
                combo_step: 30,
            },
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub session: SessionParams,
    #[command(flatten)]
    pub scoring: ScoringParams,
    #[command(flatten)]
    pub nasal: NasalParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    #[arg(long, default_value_t = PlayMode::JpJp)]
    pub mode: PlayMode,
    #[arg(long, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,
    /// Practice runs show the romaji guide and never rank.
    #[arg(long, default_value_t = false)]
    pub practice: bool,
    /// Overrides the difficulty's time limit (seconds).
    #[arg(long)]
    pub time_limit: Option<f64>,
    /// Overrides the difficulty's target HP.
    #[arg(long)]
    pub max_hp: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            mode: PlayMode::JpJp,
            difficulty: Difficulty::Easy,
            practice: false,
            time_limit: None,
            max_hp: None,
            seed: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    #[arg(long, default_value_t = DEFAULT_BASE_DAMAGE)]
    pub base_damage: u32,
    #[arg(long, default_value_t = DEFAULT_DAMAGE_CAP)]
    pub damage_cap: u32,
    /// Overrides the difficulty's combo step.
    #[arg(long)]
    pub combo_step: Option<u32>,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            base_damage: DEFAULT_BASE_DAMAGE,
            damage_cap: DEFAULT_DAMAGE_CAP,
            combo_step: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NasalParams {
    #[arg(long, default_value_t = false)]
    pub no_nasal_lookahead: bool,
    #[arg(long, default_value = NASAL_UNIT)]
    pub nasal_unit: String,
    #[arg(long, default_value_t = NASAL_TRIGGER)]
    pub nasal_trigger: char,
    #[arg(long, default_value = NASAL_VOWELS)]
    pub nasal_vowels: String,
    /// Next-group initials that keep a single trigger key ambiguous.
    #[arg(long, default_value = NASAL_BLOCKING_CONSONANTS)]
    pub nasal_blocking: String,
}

impl Default for NasalParams {
    fn default() -> Self {
        Self {
            no_nasal_lookahead: false,
            nasal_unit: NASAL_UNIT.to_string(),
            nasal_trigger: NASAL_TRIGGER,
            nasal_vowels: NASAL_VOWELS.to_string(),
            nasal_blocking: NASAL_BLOCKING_CONSONANTS.to_string(),
        }
    }
}

impl NasalParams {
    pub fn policy(&self) -> NasalPolicy {
        NasalPolicy {
            enabled: !self.no_nasal_lookahead,
            unit: crate::text::normalize_phrase(&self.nasal_unit),
            trigger: crate::text::fold_key(self.nasal_trigger),
            vowels: crate::text::fold_spelling(&self.nasal_vowels).chars().collect(),
            blocking: crate::text::fold_spelling(&self.nasal_blocking).chars().collect(),
        }
    }
}

/// Everything a session needs, resolved once from a `Config`.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    pub mode: PlayMode,
    pub difficulty: Difficulty,
    pub practice: bool,
    pub time_limit: Duration,
    pub max_hp: u32,
    pub levels: Vec<u8>,
    pub scoring: ScoringModel,
    pub nasal: NasalPolicy,
    pub seed: Option<u64>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StrikeResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn plan(&self) -> StrikeResult<SessionPlan> {
        let s = &self.session;
        let profile = s.difficulty.profile();

        let secs = s.time_limit.unwrap_or(profile.time_limit_secs);
        if !secs.is_finite() || secs <= 0.0 {
            return Err(StrikeError::Config(format!(
                "time_limit must be a positive number of seconds, got {}",
                secs
            )));
        }

        let time_limit = Duration::try_from_secs_f64(secs).map_err(|e| {
            StrikeError::Config(format!("time_limit of {} seconds is out of range: {}", secs, e))
        })?;

        let max_hp = s.max_hp.unwrap_or(profile.max_hp);
        if max_hp == 0 {
            return Err(StrikeError::Config("max_hp must be greater than 0".into()));
        }

        let scoring = ScoringModel::new(
            self.scoring.base_damage,
            self.scoring.damage_cap,
            self.scoring.combo_step.unwrap_or(profile.combo_step),
        )?;

        Ok(SessionPlan {
            mode: s.mode,
            difficulty: s.difficulty,
            practice: s.practice,
            time_limit,
            max_hp,
            levels: profile.levels.to_vec(),
            scoring,
            nasal: self.nasal.policy(),
            seed: s.seed,
        })
    }
}
