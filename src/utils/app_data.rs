use super::tokenizer::DEFAULT_DELIMITERS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "rhidx";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the user config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Occupancy above which a build logs a warning
    #[serde(default = "default_load_factor_threshold")]
    pub load_factor_threshold: f64,

    /// Characters that separate words
    #[serde(default = "default_delimiters")]
    pub delimiters: String,

    /// Table capacity when none is given on the command line
    #[serde(default = "default_capacity")]
    pub default_capacity: usize,

    /// Lines tokenized per parallel batch (bounds memory on huge inputs)
    #[serde(default = "default_chunk_lines")]
    pub chunk_lines: usize,
}

fn default_load_factor_threshold() -> f64 {
    0.9
}

fn default_delimiters() -> String {
    DEFAULT_DELIMITERS.to_string()
}

fn default_capacity() -> usize {
    200_003
}

fn default_chunk_lines() -> usize {
    65_536
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            load_factor_threshold: default_load_factor_threshold(),
            delimiters: default_delimiters(),
            default_capacity: default_capacity(),
            chunk_lines: default_chunk_lines(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the config directory, creating it if needed
    pub fn save(&self) -> Result<PathBuf> {
        let path = get_config_path().context("Could not determine config directory")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content).context("Failed to write config file")?;
        Ok(path)
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let config: AppConfig = serde_json::from_str(r#"{"default_capacity": 101}"#).unwrap();
        assert_eq!(config.default_capacity, 101);
        assert_eq!(config.load_factor_threshold, 0.9);
        assert_eq!(config.delimiters, DEFAULT_DELIMITERS);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"delimiters": " -", "chunk_lines": 8}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.delimiters, " -");
        assert_eq!(config.chunk_lines, 8);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
