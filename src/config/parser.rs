//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::{supports_color, Cli},
    models::Config,
    error::{AppError, Result},
    config::env::EnvManager,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        self.cli.validate().map_err(AppError::validation)?;

        let mut config = Config::default();

        // .env values only fill variables that are not already set
        EnvManager::load_env_file(self.cli.debug)?;
        config.merge_from_env()?;

        self.apply_cli_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.cli.seed {
            config.seed = Some(seed);
        }

        match self.cli.color_override() {
            Some(enabled) => config.enable_color = enabled,
            None => config.enable_color = config.enable_color && supports_color(),
        }

        if self.cli.no_show {
            config.show_chart = false;
        }

        if let Some(ref font) = self.cli.font {
            config.font_path = Some(font.clone());
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if config.debug {
            println!("Applied CLI overrides to configuration");
        }
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Whether error reports should be colored.
///
/// Used when configuration loading may have failed part way, so it reads the
/// color setting with the same precedence as [`ConfigParser::parse`] but
/// ignores every other variable.
pub fn resolve_error_color(cli: &Cli) -> bool {
    if let Some(enabled) = cli.color_override() {
        return enabled;
    }

    // Already-set variables are never overwritten, so a second load is harmless
    let _ = EnvManager::load_env_file(false);
    let enabled = std::env::var("ENABLE_COLOR")
        .ok()
        .and_then(|value| value.trim().parse::<bool>().ok())
        .unwrap_or(crate::defaults::DEFAULT_ENABLE_COLOR);

    enabled && supports_color()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("List Sizes: {:?}", crate::defaults::LIST_SIZES));
    summary.push(format!("Seed: {}", config.seed.map_or("(entropy)".to_string(), |s| s.to_string())));
    summary.push(format!("Chart: {} ({}x{})",
        crate::defaults::CHART_FILE_NAME,
        crate::defaults::CHART_WIDTH,
        crate::defaults::CHART_HEIGHT));
    summary.push(format!("Font: {}", config.font().map_or("(auto)".to_string(), |p| p.display().to_string())));
    summary.push(format!("Show Chart: {}", config.show_chart));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::env;

    const VARS: [&str; 4] = ["BENCH_SEED", "ENABLE_COLOR", "SHOW_CHART", "CHART_FONT"];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_cli_overrides() {
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let cli = Cli::parse_from(["test", "--seed", "10", "--no-color", "--no-show", "--verbose"]);
        let config = ConfigParser::new(cli).parse().unwrap();

        assert_eq!(config.seed, Some(10));
        assert!(!config.enable_color);
        assert!(!config.show_chart);
        assert!(config.verbose);
        assert!(!config.debug);
    }

    #[test]
    fn test_env_values_merge() {
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("BENCH_SEED", "99");
        env::set_var("SHOW_CHART", "false");

        let config = ConfigParser::new(Cli::parse_from(["test"])).parse();
        clear_env();
        let config = config.unwrap();

        assert_eq!(config.seed, Some(99));
        assert!(!config.show_chart);
    }

    #[test]
    fn test_error_color_follows_env() {
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let force_color = env::var_os("FORCE_COLOR");
        env::set_var("ENABLE_COLOR", "false");
        env::set_var("FORCE_COLOR", "1");

        let plain = resolve_error_color(&Cli::parse_from(["test"]));
        let forced = resolve_error_color(&Cli::parse_from(["test", "--color"]));
        env::set_var("ENABLE_COLOR", "true");
        let from_env = resolve_error_color(&Cli::parse_from(["test"]));
        match force_color {
            Some(v) => env::set_var("FORCE_COLOR", v),
            None => env::remove_var("FORCE_COLOR"),
        }
        clear_env();

        assert!(!plain);
        assert!(forced);
        assert!(from_env || env::var_os("NO_COLOR").is_some() || env::var("TERM").as_deref() == Ok("dumb"));
    }

    #[test]
    fn test_cli_seed_beats_env() {
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("BENCH_SEED", "1");

        let config = ConfigParser::new(Cli::parse_from(["test", "--seed", "2"])).parse();
        clear_env();

        assert_eq!(config.unwrap().seed, Some(2));
    }

    #[test]
    fn test_invalid_env_value_is_config_error() {
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("BENCH_SEED", "not-a-seed");

        let result = ConfigParser::new(Cli::parse_from(["test"])).parse();
        clear_env();

        let err = result.unwrap_err();
        assert_eq!(err.category(), "CONFIG");
        assert!(err.to_string().contains("BENCH_SEED"));
    }

    #[test]
    fn test_conflicting_color_flags_rejected() {
        let cli = Cli::parse_from(["test", "--color", "--no-color"]);
        let err = ConfigParser::new(cli).parse().unwrap_err();
        assert_eq!(err.category(), "VALIDATION");
    }

    #[test]
    fn test_display_config_summary() {
        let mut config = Config::default();
        config.seed = Some(5);
        let summary = display_config_summary(&config);

        assert!(summary.contains("Seed: 5"));
        assert!(summary.contains("performance_comparison.png"));
        assert!(summary.contains("50000"));
    }
}
