use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use hol_config::Config;

/// Config from a JSON file, or from `.env` and the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            let config: Config = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse config {}", path.display()))?;
            let validated = config.clone().validated();
            if validated != config {
                tracing::warn!("Thresholds in {} must be within 0..=1, using defaults", path.display());
            }
            Ok(validated)
        }
        None => {
            if let Ok(env_file) = dotenvy::dotenv() {
                tracing::debug!("Loaded environment from {}", env_file.display());
            }
            Ok(Config::new())
        }
    }
}
