use serde::{Deserialize, Serialize};

fn default_match_threshold() -> f64 {
    0.6
}

fn default_success_threshold() -> f64 {
    0.5
}

fn default_max_suggestions() -> usize {
    3
}

/// Tunables for the matching engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Entries must score strictly above this to be returned as matches
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    /// Minimum confidence for a result to count as successful
    #[serde(default = "default_success_threshold")]
    pub success_threshold: f64,
    /// Runner-up entries kept on a result
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

/// `value` if it is a finite number in `[0, 1]`
pub fn unit_interval(value: f64) -> Option<f64> {
    (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(value)
}

impl EngineConfig {
    /// Replace any threshold outside `[0, 1]` (or NaN) with its default
    pub fn validated(self) -> Self {
        Self {
            match_threshold: unit_interval(self.match_threshold)
                .unwrap_or_else(default_match_threshold),
            success_threshold: unit_interval(self.success_threshold)
                .unwrap_or_else(default_success_threshold),
            max_suggestions: self.max_suggestions,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            success_threshold: default_success_threshold(),
            max_suggestions: default_max_suggestions(),
        }
    }
}
