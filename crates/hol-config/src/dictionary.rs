use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Load the bundled phrase list
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Extra dictionary files merged over the bundled one, in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    /// Build from a `;`-separated path list, dropping blank items
    pub fn with_paths(list: &str) -> Self {
        Self {
            additional_paths: list
                .split(';')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            ..Self::default()
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            additional_paths: vec![],
        }
    }
}
