#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};
use typestrike::config::{Config, Difficulty, SessionPlan};
use typestrike::dictionary::{Dictionary, RawPatternEntry};
use typestrike::question::{PhraseSource, QuestionRecord};

/// Small kana table with overlapping keys of different lengths.
pub fn kana_entries() -> Vec<RawPatternEntry> {
    vec![
        RawPatternEntry::new("あ", &["a"]),
        RawPatternEntry::new("い", &["i", "yi"]),
        RawPatternEntry::new("う", &["u", "wu"]),
        RawPatternEntry::new("え", &["e"]),
        RawPatternEntry::new("お", &["o"]),
        RawPatternEntry::new("か", &["ka", "ca"]),
        RawPatternEntry::new("き", &["ki"]),
        RawPatternEntry::new("く", &["ku", "cu"]),
        RawPatternEntry::new("こ", &["ko", "co"]),
        RawPatternEntry::new("し", &["si", "shi", "ci"]),
        RawPatternEntry::new("た", &["ta"]),
        RawPatternEntry::new("ち", &["ti", "chi"]),
        RawPatternEntry::new("つ", &["tu", "tsu"]),
        RawPatternEntry::new("て", &["te"]),
        RawPatternEntry::new("と", &["to"]),
        RawPatternEntry::new("な", &["na"]),
        RawPatternEntry::new("に", &["ni"]),
        RawPatternEntry::new("ね", &["ne"]),
        RawPatternEntry::new("の", &["no"]),
        RawPatternEntry::new("や", &["ya"]),
        RawPatternEntry::new("ん", &["nn", "xn", "n'"]),
        RawPatternEntry::new("ゃ", &["xya", "lya"]),
        RawPatternEntry::new("ょ", &["xyo", "lyo"]),
        RawPatternEntry::new("っ", &["xtu", "ltu"]),
        RawPatternEntry::new("ー", &["-"]),
        RawPatternEntry::new("きゃ", &["kya", "kilya"]),
        RawPatternEntry::new("きょ", &["kyo", "kixyo"]),
        RawPatternEntry::new("しゃ", &["sya", "sha"]),
        RawPatternEntry::new("っか", &["kka", "xtuka"]),
        RawPatternEntry::new("っきょ", &["kkyo", "xtukyo"]),
    ]
}

pub fn kana_dictionary() -> Dictionary {
    Dictionary::build(kana_entries()).unwrap()
}

pub fn shared_dictionary() -> Arc<Dictionary> {
    Arc::new(kana_dictionary())
}

pub fn record(jp: &str, kr: &str, kana: &str, level: u8) -> QuestionRecord {
    QuestionRecord {
        jp_display: jp.to_string(),
        kr_display: kr.to_string(),
        jp_hiragana: PhraseSource::Text(kana.to_string()),
        difficulty: level,
        category: None,
    }
}

pub fn records() -> Vec<QuestionRecord> {
    vec![
        record("猫", "고양이", "ねこ", 1),
        record("今日", "오늘", "きょう", 1),
        record("日本", "일본", "にっぽん", 2),
        record("写真", "사진", "しゃしん", 3),
    ]
}

pub fn config(difficulty: Difficulty) -> Config {
    let mut c = Config::default();
    c.session.difficulty = difficulty;
    c.session.seed = Some(1234);
    c
}

pub fn plan(difficulty: Difficulty) -> SessionPlan {
    config(difficulty).plan().unwrap()
}

pub fn at(start: Instant, secs: f64) -> Instant {
    start + Duration::from_secs_f64(secs)
}
