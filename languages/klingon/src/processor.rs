use std::path::Path;

use hol_config::Config;
use hol_config::engine::EngineConfig;
use hol_core::dictionary::DictionaryEntry;
use hol_core::language::PhraseTranslator;
use hol_core::matcher::{get_by_category, list_categories, search_dictionary};
use hol_core::translate::translate;
use hol_core::types::TranslationResult;

use crate::dictionary::KlingonDictionary;

/// English ↔ Klingon phrase translator
pub struct KlingonProcessor {
    dictionary: KlingonDictionary,
    config: EngineConfig,
}

impl KlingonProcessor {
    /// Bundled phrases only
    pub fn new(config: EngineConfig) -> Self {
        Self::from_config(&Config {
            engine: config,
            ..Config::default()
        })
    }

    pub fn from_dictionary(dictionary: KlingonDictionary, config: EngineConfig) -> Self {
        Self {
            dictionary,
            config: config.validated(),
        }
    }

    /// Bundled phrases (unless disabled) with `additional_paths` layered on top in order
    ///
    /// Unreadable phrase files are logged and left out.
    pub fn from_config(config: &Config) -> Self {
        let base = if config.dictionary.enabled {
            KlingonDictionary::bundled().unwrap_or_else(|e| {
                tracing::error!("Bundled phrase list is corrupt: {}", e);
                KlingonDictionary::new()
            })
        } else {
            tracing::info!("Bundled phrase list disabled by config");
            KlingonDictionary::new()
        };

        let dictionary = config
            .dictionary
            .additional_paths
            .iter()
            .fold(base, |dict, path| match KlingonDictionary::open(Path::new(path)) {
                Ok(overlay) => dict.merge(overlay),
                Err(e) => {
                    tracing::warn!("Skipping phrase file {}: {}", path, e);
                    dict
                }
            });

        tracing::debug!("{} phrases available", dictionary.entry_count());
        Self::from_dictionary(dictionary, config.engine)
    }

    pub fn dictionary(&self) -> &KlingonDictionary {
        &self.dictionary
    }
}

impl PhraseTranslator for KlingonProcessor {
    fn translate(&self, text: &str, from: &str, to: &str) -> TranslationResult {
        translate(text, from, to, self.dictionary.entries(), &self.config)
    }

    fn search(&self, query: &str) -> Vec<&DictionaryEntry> {
        search_dictionary(query, self.dictionary.entries())
    }

    fn by_category(&self, category: &str) -> Vec<&DictionaryEntry> {
        get_by_category(category, self.dictionary.entries())
    }

    fn categories(&self) -> Vec<&str> {
        list_categories(self.dictionary.entries())
    }

    fn config(&self) -> &EngineConfig {
        &self.config
    }
}
