//! Analytics configuration
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! user_id = "main_user"
//!
//! [sentiment]
//! positive = ["happy", "joy", "great"]
//! negative = ["sad", "stress", "tired"]
//! ```
//!
//! Any omitted key falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::journal::SentimentLexicon;

pub const DEFAULT_USER_ID: &str = "main_user";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Profile used when no user is given explicitly
    pub user_id: String,
    /// Keyword lists for journal sentiment
    pub sentiment: SentimentLexicon,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            sentiment: SentimentLexicon::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Default config file location (`<config dir>/moodlog/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("moodlog").join("config.toml"))
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AnalyticsConfig::load(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AnalyticsConfig::default());
        assert_eq!(config.user_id, "main_user");
    }

    #[test]
    fn test_lexicon_override() {
        let config = AnalyticsConfig::from_toml(
            r#"
            user_id = "alex"

            [sentiment]
            positive = ["Happy", "great"]
            negative = ["sad"]
            "#,
        )
        .unwrap();

        assert_eq!(config.user_id, "alex");
        assert_eq!(config.sentiment.positive(), ["happy".to_string(), "great".to_string()]);
        assert_eq!(config.sentiment.negative(), ["sad".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[sentiment]\nnegative = [\"tired\"]\n").unwrap();

        let config = AnalyticsConfig::load(&path).unwrap();
        assert_eq!(config.user_id, "main_user");
        assert_eq!(config.sentiment.negative(), ["tired".to_string()]);
        assert_eq!(config.sentiment.positive(), SentimentLexicon::default().positive());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            AnalyticsConfig::from_toml("user_id = ["),
            Err(ConfigError::Parse(_))
        ));
    }
}
