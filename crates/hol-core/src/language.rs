use std::fmt;
use std::str::FromStr;

use hol_config::engine::EngineConfig;

use crate::dictionary::DictionaryEntry;
use crate::error::UnsupportedLanguage;
use crate::result::is_successful;
use crate::types::TranslationResult;

/// Reads one language side of an entry
pub type FieldAccessor = fn(&DictionaryEntry) -> Option<&str>;

/// The two languages a dictionary pairs up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Natural language side
    English,
    /// Constructed language side, the one pronunciation guides describe
    Klingon,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Klingon => "klingon",
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::English => Language::Klingon,
            Language::Klingon => Language::English,
        }
    }

    pub fn is_constructed(&self) -> bool {
        matches!(self, Language::Klingon)
    }

    pub fn field(&self) -> FieldAccessor {
        match self {
            Language::English => english_field,
            Language::Klingon => klingon_field,
        }
    }
}

fn english_field(entry: &DictionaryEntry) -> Option<&str> {
    entry.text(Language::English)
}

fn klingon_field(entry: &DictionaryEntry) -> Option<&str> {
    entry.text(Language::Klingon)
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "klingon" => Ok(Language::Klingon),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dictionary-backed translation for one language pair
pub trait PhraseTranslator: Send + Sync {
    /// Translate free text between two language identifiers
    fn translate(&self, text: &str, from: &str, to: &str) -> TranslationResult;

    /// Unranked substring lookup over both languages and categories
    fn search(&self, query: &str) -> Vec<&DictionaryEntry>;

    fn by_category(&self, category: &str) -> Vec<&DictionaryEntry>;

    fn categories(&self) -> Vec<&str>;

    fn config(&self) -> &EngineConfig;

    fn is_successful(&self, result: &TranslationResult) -> bool {
        is_successful(result, self.config().success_threshold)
    }
}
