use std::collections::HashMap;
use std::path::Path;

use hol_core::dictionary::{DictionaryEntry, LoadError, PartOfSpeech, UsageExample};
use hol_core::normalize::is_empty_text;
use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

// JSON structures for the phrase list format
#[derive(Debug, Deserialize)]
struct DictionaryJson {
    entries: Vec<EntryJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryJson {
    id: Option<String>,
    #[serde(default)]
    english: String,
    #[serde(default)]
    klingon: String,
    pronunciation: Option<String>,
    part_of_speech: Option<String>,
    category: Option<String>,
    #[serde(default)]
    examples: Vec<ExampleJson>,
}

#[derive(Debug, Deserialize)]
struct ExampleJson {
    english: String,
    klingon: String,
    pronunciation: Option<String>,
    context: Option<String>,
}

fn nfc(text: &str) -> String {
    text.nfc().collect()
}

fn nfc_opt(text: Option<String>) -> Option<String> {
    text.as_deref().map(nfc)
}

impl EntryJson {
    fn into_entry(self, index: usize) -> Result<DictionaryEntry, LoadError> {
        let english = nfc(&self.english);
        let klingon = nfc(&self.klingon);

        if is_empty_text(&english) && is_empty_text(&klingon) {
            return Err(LoadError::Invalid(format!(
                "entry {index} has neither english nor klingon text"
            )));
        }

        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(DictionaryEntry {
            id,
            english,
            klingon,
            pronunciation: nfc_opt(self.pronunciation),
            part_of_speech: self.part_of_speech.as_deref().map(PartOfSpeech::from_tag),
            category: nfc_opt(self.category),
            examples: self
                .examples
                .into_iter()
                .map(|ex| UsageExample {
                    english: nfc(&ex.english),
                    klingon: nfc(&ex.klingon),
                    pronunciation: nfc_opt(ex.pronunciation),
                    context: nfc_opt(ex.context),
                })
                .collect(),
        })
    }
}

/// Phrase list compiled into the crate
const BUNDLED: &str = include_str!("../data/dictionary.json");

/// Ordered English ↔ Klingon phrase list
#[derive(Debug, Clone, Default)]
pub struct KlingonDictionary {
    entries: Vec<DictionaryEntry>,
    id_index: HashMap<String, usize>,
}

impl KlingonDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON phrase list format
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: DictionaryJson = serde_json::from_str(json_str)?;

        let mut dict = Self::new();
        for (index, json_entry) in data.entries.into_iter().enumerate() {
            dict.insert(json_entry.into_entry(index)?);
        }

        Ok(dict)
    }

    /// The phrase list shipped with the crate
    pub fn bundled() -> Result<Self, LoadError> {
        let dict = Self::from_json(BUNDLED)?;
        tracing::debug!("Bundled phrase list has {} entries", dict.entry_count());
        Ok(dict)
    }

    /// Read a phrase list file
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let dict = Self::from_json(&std::fs::read_to_string(path)?)?;
        tracing::info!("Read {} phrases from {}", dict.entry_count(), path.display());
        Ok(dict)
    }

    /// Add an entry, replacing any entry with the same id in place
    pub fn insert(&mut self, entry: DictionaryEntry) {
        match self.id_index.get(&entry.id) {
            Some(&idx) => self.entries[idx] = entry,
            None => {
                self.id_index.insert(entry.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Overlay `other`: shared ids take its version, new ids go at the end
    pub fn merge(mut self, other: KlingonDictionary) -> Self {
        for entry in other.entries {
            self.insert(entry);
        }
        self
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&DictionaryEntry> {
        self.id_index.get(id).and_then(|&idx| self.entries.get(idx))
    }
}

impl FromIterator<DictionaryEntry> for KlingonDictionary {
    fn from_iter<T: IntoIterator<Item = DictionaryEntry>>(iter: T) -> Self {
        let mut dict = Self::new();
        for entry in iter {
            dict.insert(entry);
        }
        dict
    }
}
