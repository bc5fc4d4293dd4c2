use crate::text::normalize_phrase;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A reading may arrive as one string or pre-split into units.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PhraseSource {
    Text(String),
    Units(Vec<String>),
}

impl Default for PhraseSource {
    fn default() -> Self {
        PhraseSource::Text(String::new())
    }
}

impl PhraseSource {
    pub fn joined(&self) -> String {
        match self {
            PhraseSource::Text(s) => s.clone(),
            PhraseSource::Units(u) => u.concat(),
        }
    }
}

/// Question row as stored in the question data file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    #[serde(default)]
    pub jp_display: String,
    #[serde(default)]
    pub kr_display: String,
    #[serde(default)]
    pub jp_hiragana: PhraseSource,
    #[serde(default = "default_level")]
    pub difficulty: u8,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_level() -> u8 {
    1
}

impl QuestionRecord {
    pub fn text(&self, source: TextSource) -> String {
        match source {
            TextSource::JapaneseDisplay => self.jp_display.clone(),
            TextSource::KoreanDisplay => self.kr_display.clone(),
            TextSource::Hiragana => self.jp_hiragana.joined(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    JapaneseDisplay,
    KoreanDisplay,
    Hiragana,
}

/// Which field is shown and which one is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeBinding {
    pub display: TextSource,
    pub reading: TextSource,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Japanese shown, kana reading typed as romaji.
    #[default]
    JpJp,
    /// Korean shown, Japanese kana reading typed as romaji.
    KrJp,
    /// Korean shown and typed directly.
    KrKr,
    /// Japanese shown, Korean typed directly.
    JpKr,
}

impl PlayMode {
    pub fn binding(&self) -> ModeBinding {
        use TextSource::*;
        match self {
            Self::JpJp => ModeBinding {
                display: JapaneseDisplay,
                reading: Hiragana,
            },
            Self::KrJp => ModeBinding {
                display: KoreanDisplay,
                reading: Hiragana,
            },
            Self::KrKr => ModeBinding {
                display: KoreanDisplay,
                reading: KoreanDisplay,
            },
            Self::JpKr => ModeBinding {
                display: JapaneseDisplay,
                reading: KoreanDisplay,
            },
        }
    }
}

/// A question with its display and target text already chosen for the mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub display_text: String,
    pub target_phrase: String,
    pub difficulty_level: u8,
}

impl Question {
    pub fn new(display_text: &str, target_phrase: &str, difficulty_level: u8) -> Self {
        Self {
            display_text: display_text.to_string(),
            target_phrase: normalize_phrase(target_phrase),
            difficulty_level,
        }
    }
}

impl ModeBinding {
    pub fn resolve(&self, record: &QuestionRecord) -> Question {
        Question::new(
            &record.text(self.display),
            &record.text(self.reading),
            record.difficulty,
        )
    }
}

/// Resolves the records whose level is in `levels`, dropping ones with no
/// typeable text for this binding.
pub fn filter_pool(records: &[QuestionRecord], binding: ModeBinding, levels: &[u8]) -> Vec<Question> {
    records
        .iter()
        .filter(|r| levels.contains(&r.difficulty))
        .map(|r| binding.resolve(r))
        .filter(|q| !q.target_phrase.is_empty())
        .collect()
}
