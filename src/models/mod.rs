//! Data models and structures for the lookup benchmark

pub mod config;
pub mod metrics;

// Re-export main model types
pub use config::Config;
pub use metrics::{PerformanceReport, SizeMeasurement};
