use crate::error::{DirectoryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_taxonomy")]
    pub taxonomy: String,
}

fn default_port() -> u16 {
    8080
}

fn default_catalog() -> String {
    "data/services.json".to_string()
}

fn default_taxonomy() -> String {
    "data/categories.json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            taxonomy: default_taxonomy(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let content = fs::read_to_string(CONFIG_PATH).map_err(|e| {
            DirectoryError::Config(format!("Failed to read config file '{CONFIG_PATH}': {e}"))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `config.toml` when present, otherwise fall back to defaults.
    pub fn load_or_default() -> Result<Self> {
        if Path::new(CONFIG_PATH).exists() {
            Self::load()
        } else {
            Ok(Config::default())
        }
    }
}
