use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

/// Environment variable naming a TOML file that replaces the embedded defaults.
pub const CONFIG_ENV: &str = "POKEDEX_CONFIG";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub pokeapi: PokeApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PokeApiConfig {
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout: u32,
}

impl PokeApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| {
            tracing::error!("Failed to parse configuration: {}", e);
            ConfigError::from(e)
        })
    }

    /// Loads the file named by [`CONFIG_ENV`] if set, the embedded defaults otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let source = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                Self::from_toml(&source)
            }
            Err(_) => Self::from_toml(DEFAULT_CONFIG),
        }
    }
}
