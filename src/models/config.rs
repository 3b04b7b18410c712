//! Configuration data model and validation

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed for identifier generation; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Open the saved chart in the platform image viewer
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,

    /// Font file used for chart text
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            enable_color: default_enable_color(),
            show_chart: default_show_chart(),
            font_path: None,
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Font path as a `Path`, if one is configured
    pub fn font(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if let Some(font) = &self.font_path {
            if font.as_os_str().is_empty() {
                return Err(AppError::config("Font path cannot be empty"));
            }
            if !font.is_file() {
                return Err(AppError::config(format!("Font file not found: {}", font.display())));
            }
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(seed) = std::env::var("BENCH_SEED") {
            let seed = seed.trim();
            if !seed.is_empty() {
                self.seed = Some(seed.parse()
                    .map_err(|e| AppError::config(format!("Invalid BENCH_SEED value '{}': {}", seed, e)))?);
            }
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        if let Ok(show_chart) = std::env::var("SHOW_CHART") {
            self.show_chart = show_chart.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid SHOW_CHART value '{}': {}", show_chart, e)))?;
        }

        if let Ok(font) = std::env::var("CHART_FONT") {
            let font = font.trim();
            if !font.is_empty() {
                self.font_path = Some(PathBuf::from(font));
            }
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

fn default_show_chart() -> bool {
    crate::defaults::DEFAULT_SHOW_CHART
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.seed.is_none());
        assert!(config.show_chart);
    }

    #[test]
    fn test_missing_font_invalid() {
        let mut config = Config::default();
        config.font_path = Some(PathBuf::from("/definitely/not/here/font.ttf"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_font_invalid() {
        let mut config = Config::default();
        config.font_path = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_existing_font_file_valid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.font_path = Some(file.path().to_path_buf());
        assert!(config.validate().is_ok());
        assert_eq!(config.font(), Some(file.path()));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert!(config.enable_color);
        assert!(config.show_chart);
        assert!(!config.verbose);
    }
}
