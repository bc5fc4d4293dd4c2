use crate::dictionary::{Dictionary, RawPatternEntry};
use crate::error::{StrikeError, StrikeResult};
use crate::question::QuestionRecord;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Accepted dictionary file shapes.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum DictionarySource {
    /// `[{ "key": "きゃ", "romanizations": ["kya", "kilya"] }, ...]`
    List(Vec<RawPatternEntry>),
    /// `{ "きゃ": ["kya", "kilya"], ... }`
    Map(BTreeMap<String, Vec<String>>),
}

impl DictionarySource {
    pub fn into_entries(self) -> Vec<RawPatternEntry> {
        match self {
            DictionarySource::List(v) => v,
            DictionarySource::Map(m) => m
                .into_iter()
                .map(|(key, romanizations)| RawPatternEntry { key, romanizations })
                .collect(),
        }
    }
}

/// Accepted question file shapes.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum QuestionSource {
    Flat(Vec<QuestionRecord>),
    /// `{ "category": [records...] }`; the key is copied into each record.
    Categorized(BTreeMap<String, Vec<QuestionRecord>>),
}

impl QuestionSource {
    pub fn into_records(self) -> Vec<QuestionRecord> {
        match self {
            QuestionSource::Flat(v) => v,
            QuestionSource::Categorized(m) => m
                .into_iter()
                .flat_map(|(cat, records)| {
                    records.into_iter().map(move |mut r| {
                        if r.category.is_none() {
                            r.category = Some(cat.clone());
                        }
                        r
                    })
                })
                .collect(),
        }
    }
}

fn open(path: &Path, what: &str) -> StrikeResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        StrikeError::data_load(&format!("could not open {} at '{}'", what, path.display()), e)
    })?;
    Ok(BufReader::new(file))
}

pub fn load_dictionary<P: AsRef<Path>>(path: P) -> StrikeResult<Dictionary> {
    let path = path.as_ref();
    info!("📚 Loading Dictionary: {}", path.display());
    dictionary_from_reader(open(path, "dictionary")?)
}

pub fn dictionary_from_reader<R: Read>(reader: R) -> StrikeResult<Dictionary> {
    let source: DictionarySource = serde_json::from_reader(reader)
        .map_err(|e| StrikeError::data_load("malformed dictionary", e))?;

    let entries = source.into_entries();
    if entries.is_empty() {
        return Err(StrikeError::DataLoad("dictionary is empty".into()));
    }
    Dictionary::build(entries)
}

pub fn load_questions<P: AsRef<Path>>(path: P) -> StrikeResult<Vec<QuestionRecord>> {
    let path = path.as_ref();
    info!("📂 Loading Questions: {}", path.display());
    questions_from_reader(open(path, "question pool")?)
}

pub fn questions_from_reader<R: Read>(reader: R) -> StrikeResult<Vec<QuestionRecord>> {
    let source: QuestionSource = serde_json::from_reader(reader)
        .map_err(|e| StrikeError::data_load("malformed question pool", e))?;

    let records = source.into_records();
    let before = records.len();
    let kept: Vec<QuestionRecord> = records
        .into_iter()
        .filter(|r| {
            !(r.jp_display.is_empty() && r.kr_display.is_empty() && r.jp_hiragana.joined().is_empty())
        })
        .collect();

    if kept.len() < before {
        warn!("Skipped {} question rows with no text.", before - kept.len());
    }
    if kept.is_empty() {
        return Err(StrikeError::DataLoad("question pool is empty".into()));
    }
    Ok(kept)
}
