use serde::Serialize;

use crate::language::Language;
use crate::normalize::is_empty_text;

/// One curated phrase pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictionaryEntry {
    pub id: String,
    pub english: String,
    pub klingon: String,
    /// Pronunciation guide for the Klingon text
    pub pronunciation: Option<String>,
    pub part_of_speech: Option<PartOfSpeech>,
    pub category: Option<String>,
    pub examples: Vec<UsageExample>,
}

impl DictionaryEntry {
    /// Entry with only the two language fields set
    pub fn new(id: impl Into<String>, english: impl Into<String>, klingon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            english: english.into(),
            klingon: klingon.into(),
            pronunciation: None,
            part_of_speech: None,
            category: None,
            examples: vec![],
        }
    }

    /// Text for `language`, or `None` when that side is blank
    pub fn text(&self, language: Language) -> Option<&str> {
        let text = match language {
            Language::English => &self.english,
            Language::Klingon => &self.klingon,
        };

        if is_empty_text(text) { None } else { Some(text.as_str()) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageExample {
    pub english: String,
    pub klingon: String,
    pub pronunciation: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Conjunction,
    Exclamation,
    Question,
    Numeral,
    Unknown,
}

impl PartOfSpeech {
    /// Parse a tag, mapping anything unrecognised to `Unknown`
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "pronoun" => PartOfSpeech::Pronoun,
            "conjunction" => PartOfSpeech::Conjunction,
            "exclamation" => PartOfSpeech::Exclamation,
            "question" => PartOfSpeech::Question,
            "numeral" => PartOfSpeech::Numeral,
            _ => PartOfSpeech::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Exclamation => "exclamation",
            PartOfSpeech::Question => "question",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Unknown => "unknown",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid entry: {0}")]
    Invalid(String),
}
