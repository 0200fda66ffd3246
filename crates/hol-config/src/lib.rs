use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::engine::{EngineConfig, unit_interval};

pub mod dictionary;
pub mod engine;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    /// Defaults overridden by `HOL_*` environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Thresholds outside `[0, 1]` reset to defaults
    pub fn validated(self) -> Self {
        Self {
            engine: self.engine.validated(),
            ..self
        }
    }

    /// Same as [`Config::new`] but reads variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = EngineConfig::default();

        let match_threshold = lookup("HOL_MATCH_THRESHOLD")
            .and_then(|v| v.trim().parse().ok())
            .and_then(unit_interval)
            .unwrap_or(defaults.match_threshold);

        let success_threshold = lookup("HOL_SUCCESS_THRESHOLD")
            .and_then(|v| v.trim().parse().ok())
            .and_then(unit_interval)
            .unwrap_or(defaults.success_threshold);

        let max_suggestions = lookup("HOL_MAX_SUGGESTIONS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.max_suggestions);

        let dictionary = match lookup("HOL_DICTIONARY_PATHS") {
            Some(paths) => DictionaryConfig::with_paths(&paths),
            None => DictionaryConfig::default(),
        };

        Config {
            engine: EngineConfig {
                match_threshold,
                success_threshold,
                max_suggestions,
            },
            dictionary,
        }
    }
}
