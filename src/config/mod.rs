//! Configuration loading and management

mod settings;

pub use settings::{OracleSettings, Settings, VoiceSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the oracle API key
pub const API_KEY_ENV: &str = "PARADISE_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from the global config dir, falling back to
    /// defaults when no file exists yet
    pub fn load_global() -> Result<Self> {
        let path = Self::global_config_dir().join("config.toml");
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Global configuration/state directory (~/.paradise)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".paradise")
    }

    /// Directory holding the state database, honoring the config override
    pub fn data_dir(&self) -> PathBuf {
        self.settings
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }

    /// Oracle API key from the environment, if configured
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.settings.voice.enabled);
        assert!(config.settings.oracle.enabled);
        assert_eq!(config.settings.oracle.model, "snark-2-flash");
        assert!(config.settings.data_dir.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [settings.voice]
            enabled = false

            [settings.oracle]
            model = "snark-3"
            "#,
        )
        .unwrap();
        assert!(!config.settings.voice.enabled);
        assert_eq!(config.settings.oracle.model, "snark-3");
        // untouched fields keep their defaults
        assert_eq!(config.settings.oracle.tts_model, "snark-2-tts");
    }
}
