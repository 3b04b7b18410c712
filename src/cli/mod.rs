//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

/// Lookup Bench - times nested-loop against set-based matching and charts the result
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "lookup-bench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed for identifier generation (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the per-size timing table
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Do not open the chart in an image viewer
    #[arg(long)]
    pub no_show: bool,

    /// Font file used for chart text
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        Ok(())
    }

    /// Color preference from the flags, `None` when neither was given
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Command Line:\n");
        match self.seed {
            Some(seed) => summary.push_str(&format!("  Seed: {}\n", seed)),
            None => summary.push_str("  Seed: (entropy)\n"),
        }
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));
        summary.push_str(&format!("  Show chart: {}\n", !self.no_show));
        if let Some(ref font) = self.font {
            summary.push_str(&format!("  Font: {}\n", font.display()));
        }

        summary
    }
}

/// Check whether the terminal is likely to render ANSI colors
pub fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    std::io::IsTerminal::is_terminal(&std::io::stdout())
}
