use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::DataValidError;
use crate::logging::LoggingConfig;

/// Output formats understood by the CLI
pub const OUTPUT_FORMATS: &[&str] = &["text", "json"];

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub length: LengthConfig,
    pub output: OutputConfig,
}

/// Bounds used by the `length` command when none are given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthConfig {
    pub default_min: usize,
    pub default_max: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            default_min: 0,
            default_max: 255,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults
    pub async fn load() -> Result<Self> {
        let config_path = get_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            debug!("No configuration file at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from specific file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DataValidError::InvalidConfig {
                path: path.display().to_string(),
                source,
            })?;
        let config: AppConfig = toml::from_str(&content).map_err(DataValidError::from)?;

        config.validate()?;

        debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific file
    pub async fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.length.default_min > self.length.default_max {
            return Err(DataValidError::InvalidBounds {
                min: self.length.default_min,
                max: self.length.default_max,
            }
            .into());
        }

        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(DataValidError::config(format!(
                "Unknown output format '{}', expected one of: {}",
                self.output.format,
                OUTPUT_FORMATS.join(", ")
            ))
            .into());
        }

        if self.logging.level.trim().is_empty() {
            return Err(DataValidError::config("Logging level must not be empty").into());
        }

        debug!("Configuration validation passed");
        Ok(())
    }
}

/// Get the configuration file path
pub fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "datavalid", "datavalid")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join("config.toml"))
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut AppConfig) {
        Self::apply_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides read through `lookup`
    pub fn apply_from<F>(config: &mut AppConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("DV_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(min) = lookup("DV_MIN_LENGTH").and_then(|v| v.parse::<usize>().ok()) {
            config.length.default_min = min;
        }

        if let Some(max) = lookup("DV_MAX_LENGTH").and_then(|v| v.parse::<usize>().ok()) {
            config.length.default_max = max;
        }

        if let Some(format) = lookup("DV_OUTPUT_FORMAT") {
            config.output.format = format.to_lowercase();
        }

        debug!("Applied environment variable overrides");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.length.default_max, 255);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut config = AppConfig::default();
        config.length.default_min = 10;
        config.length.default_max = 3;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min 10"));
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let mut config = AppConfig::default();
        config.output.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DV_LOG_LEVEL", "trace"),
            ("DV_MIN_LENGTH", "2"),
            ("DV_MAX_LENGTH", "not-a-number"),
            ("DV_OUTPUT_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        ConfigOverrides::apply_from(&mut config, |key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.length.default_min, 2);
        assert_eq!(config.length.default_max, 255);
        assert_eq!(config.output.format, "json");
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.length.default_min = 1;
        config.length.default_max = 64;
        config.save_to(&path).await.unwrap();

        let loaded = AppConfig::load_from_file(&path).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[length]\ndefault_max = 20\n").await.unwrap();

        let loaded = AppConfig::load_from_file(&path).await.unwrap();
        assert_eq!(loaded.length.default_min, 0);
        assert_eq!(loaded.length.default_max, 20);
        assert_eq!(loaded.output.format, "text");
    }

    #[tokio::test]
    async fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = AppConfig::load_from_file(&path).await.unwrap_err();
        assert!(err.to_string().contains("absent.toml"));

        match err.downcast_ref::<DataValidError>() {
            Some(DataValidError::InvalidConfig { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
