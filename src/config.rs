//! Configuration management for the tag extractor

use crate::error::{Result, TagExtractorError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BUNDLED_STOP_WORDS: &str = "stopwords/English Stop Words.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub stop_words: StopWordConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopWordConfig {
    /// Used only when no stop-word file is chosen explicitly
    pub bundled_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
    pub tag_column_width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Text,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_words: StopWordConfig {
                bundled_path: PathBuf::from(DEFAULT_BUNDLED_STOP_WORDS),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
                tag_column_width: 20,
            },
        }
    }
}

impl Config {
    /// Load from an explicit file, or from the default location.
    ///
    /// An explicit file must exist. The default file is created with
    /// default values on first use.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TagExtractorError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                warn!("Could not write default configuration: {}", e);
            }
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| TagExtractorError::io_at(path, e))?;
        toml::from_str(&content)
            .map_err(|e| TagExtractorError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TagExtractorError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("tag-extractor")
            .join("config.toml")
    }

    pub fn bundled_stop_words(&self) -> &Path {
        &self.stop_words.bundled_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bundled_stop_words(), Path::new("stopwords/English Stop Words.txt"));
        assert_eq!(config.output.format, OutputFormat::Console);
        assert_eq!(config.output.tag_column_width, 20);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.stop_words.bundled_path = PathBuf::from("/opt/stops.txt");
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert_eq!(loaded.bundled_stop_words(), Path::new("/opt/stops.txt"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(TagExtractorError::Configuration(_))));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(TagExtractorError::Configuration(_))));
    }
}
