//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variables read into [`crate::models::Config`]
pub const SUPPORTED_ENV_VARS: [&str; 4] = ["BENCH_SEED", "ENABLE_COLOR", "SHOW_CHART", "CHART_FONT"];

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                println!("Loaded configuration from .env file");
            }
        } else if debug {
            println!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "BENCH_SEED" => {
                value.trim().parse::<u64>()
                    .map_err(|e| AppError::config(format!("Invalid BENCH_SEED value '{}': {}", value, e)))?;
            }
            "ENABLE_COLOR" | "SHOW_CHART" => {
                value.trim().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
            }
            "CHART_FONT" => {
                if value.trim().is_empty() {
                    return Err(AppError::config("CHART_FONT cannot be empty"));
                }
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Vec<String> {
        let mut warnings = Vec::new();

        for var_name in SUPPORTED_ENV_VARS {
            if let Ok(value) = std::env::var(var_name) {
                if let Err(e) = Self::validate_env_var(var_name, &value) {
                    warnings.push(format!("Warning: {}", e));
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_manager_validate_env_var() {
        assert!(EnvManager::validate_env_var("BENCH_SEED", "42").is_ok());
        assert!(EnvManager::validate_env_var("ENABLE_COLOR", "true").is_ok());
        assert!(EnvManager::validate_env_var("SHOW_CHART", "false").is_ok());
        assert!(EnvManager::validate_env_var("CHART_FONT", "/fonts/a.ttf").is_ok());
        assert!(EnvManager::validate_env_var("SOMETHING_ELSE", "whatever").is_ok());

        assert!(EnvManager::validate_env_var("BENCH_SEED", "-1").is_err());
        assert!(EnvManager::validate_env_var("ENABLE_COLOR", "maybe").is_err());
        assert!(EnvManager::validate_env_var("SHOW_CHART", "yes").is_err());
        assert!(EnvManager::validate_env_var("CHART_FONT", "  ").is_err());
    }

    #[test]
    fn test_validate_current_env_reports_bad_values() {
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for var_name in SUPPORTED_ENV_VARS {
            std::env::remove_var(var_name);
        }
        assert!(EnvManager::validate_current_env().is_empty());

        std::env::set_var("SHOW_CHART", "sometimes");
        let warnings = EnvManager::validate_current_env();
        std::env::remove_var("SHOW_CHART");

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("SHOW_CHART"));
    }
}
