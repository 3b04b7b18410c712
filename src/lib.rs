//! Lookup Bench
//!
//! Times a nested-loop matcher against a set-based matcher over randomly
//! generated identifier lists of growing size and renders the running times
//! as a PNG chart.

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod harness;
pub mod logging;
pub mod matching;
pub mod models;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use generator::generate_user_ids;
pub use harness::measure_performance;
pub use matching::{find_matches_nested_loops, find_matches_using_set};
pub use models::{Config, PerformanceReport, SizeMeasurement};
pub use output::{OutputFormatter, ColoredFormatter, PlainFormatter, OutputFormatterFactory};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// List sizes exercised by a default run
    pub const LIST_SIZES: &[usize] = &[100, 500, 1000, 5000, 10000, 20000, 50000];

    /// Exclusive upper bound of generated identifiers; the lower bound is 1
    pub const ID_UPPER_BOUND: u32 = 1_000_000;

    pub const CHART_FILE_NAME: &str = "performance_comparison.png";
    pub const CHART_WIDTH: u32 = 1000;
    pub const CHART_HEIGHT: u32 = 600;

    pub const DEFAULT_ENABLE_COLOR: bool = true;
    pub const DEFAULT_SHOW_CHART: bool = true;
}
