mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Result of [`load`]. Loading runs before logging is installed, so anything
/// worth reporting is carried here for `main` to log afterwards.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from; `None` when defaults were used.
    pub source: Option<String>,
    pub warnings: Vec<String>,
}

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// environment overrides once.
///
/// The default file is optional; a path named through `CONFIG_PATH` must exist.
pub async fn load() -> Result<LoadedConfig> {
    let (config_path, explicit) = match env::var("CONFIG_PATH") {
        Ok(path) => (path, true),
        Err(_) => (DEFAULT_CONFIG_PATH.to_string(), false),
    };

    let source = (explicit || Path::new(&config_path).exists()).then(|| config_path.clone());

    let mut config = load_from(&config_path, explicit).await?;
    let warnings = config.apply_env_overrides(|name| env::var(name).ok());

    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

pub async fn load_from(config_path: &str, required: bool) -> Result<Config> {
    if !required && !Path::new(config_path).exists() {
        return Ok(Config::default());
    }

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", config_path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overrides file values with the credential variable and `PORT`.
    ///
    /// Returns a warning for every variable that was present but ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        if let Some(key) = lookup(&self.llm.api_key_env).filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }

        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warnings.push(format!("Ignoring invalid PORT value: {}", port)),
            }
        }

        warnings
    }
}
