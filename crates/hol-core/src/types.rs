use serde::Serialize;

use crate::dictionary::DictionaryEntry;

/// Matching strategy that scored a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Exact,
    Partial,
    Fuzzy,
}

impl Tier {
    pub const EXACT_SCORE: f64 = 1.0;
    pub const PARTIAL_SCORE: f64 = 0.9;
}

/// Scored entry produced during one matching call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate<'a> {
    pub entry: &'a DictionaryEntry,
    pub similarity: f64,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub input: String,
    /// Empty, the bracketed input, or a dictionary translation
    pub output: String,
    pub pronunciation: Option<String>,
    pub confidence: f64,
    /// Runner-up entries, most similar first
    pub suggestions: Vec<DictionaryEntry>,
}

impl TranslationResult {
    /// Result for blank input or a rejected language pair
    pub fn empty(input: &str) -> Self {
        Self {
            input: input.to_string(),
            output: String::new(),
            pronunciation: None,
            confidence: 0.0,
            suggestions: vec![],
        }
    }

    /// Result when nothing in the dictionary matched
    pub fn untranslated(input: &str) -> Self {
        Self {
            output: format!("[{input}]"),
            ..Self::empty(input)
        }
    }

    pub fn is_untranslated(&self) -> bool {
        self.output.starts_with('[')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PartOfSpeech;

    #[test]
    fn json_keys_are_snake_case() {
        let result = TranslationResult {
            suggestions: vec![DictionaryEntry {
                part_of_speech: Some(PartOfSpeech::Noun),
                ..DictionaryEntry::new("1", "warrior", "SuvwI'")
            }],
            ..TranslationResult::untranslated("x")
        };

        let json = serde_json::to_value(&result).unwrap();
        let entry = &json["suggestions"][0];
        assert_eq!(entry["part_of_speech"], "noun");
        assert!(entry.get("partOfSpeech").is_none());
        assert_eq!(json["output"], "[x]");
    }
}
