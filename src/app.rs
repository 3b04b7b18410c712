//! Main application orchestration and execution

use crate::{
    chart::{self, ChartOptions, RenderedChart},
    defaults,
    error::Result,
    generator::seeded_rng,
    harness::measure_each,
    logging::{LoggerFactory, PerformanceLogger},
    models::{Config, PerformanceReport},
    output::OutputFormatterFactory,
};
use std::path::Path;

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: PerformanceReport,
    pub chart: RenderedChart,
}

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
    loggers: LoggerFactory,
}

impl App {
    /// Create a new application instance from a loaded configuration
    pub fn new(config: Config) -> Self {
        colored::control::set_override(config.enable_color);
        let loggers = LoggerFactory::new(config.clone());
        Self { config, loggers }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Benchmark the default sizes and save the chart in the working directory
    pub async fn run(&self) -> Result<RunOutcome> {
        let options = ChartOptions::in_current_dir()?.with_font(self.config.font_path.clone());
        self.run_with(defaults::LIST_SIZES, &options).await
    }

    /// Benchmark `sizes` and save the chart as described by `options`.
    ///
    /// Failures are logged with the run's correlation ID before being returned.
    pub async fn run_with(&self, sizes: &[usize], options: &ChartOptions) -> Result<RunOutcome> {
        let perf = self.loggers.create_performance_logger().await;
        let correlation_id = perf.start_run(sizes, self.config.seed).await;

        match self.execute(&perf, &correlation_id, sizes, options).await {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                let errors = self.loggers.create_error_logger().await;
                errors.log_error(&error, Some("benchmark run failed"), Some(&correlation_id)).await;
                perf.logger().end_operation(&correlation_id, "benchmark", false).await;
                Err(error)
            }
        }
    }

    /// Whether the saved chart should be opened in an image viewer
    pub fn should_open_viewer(&self) -> bool {
        self.config.show_chart && chart::display_available()
    }

    async fn execute(
        &self,
        perf: &PerformanceLogger,
        correlation_id: &str,
        sizes: &[usize],
        options: &ChartOptions,
    ) -> Result<RunOutcome> {
        let mut rng = seeded_rng(self.config.seed);
        let mut report = PerformanceReport::new(self.config.seed);
        for measurement in measure_each(sizes, &mut rng) {
            let measurement = measurement?;
            perf.log_measurement(&measurement).await;
            report.add_measurement(measurement);
        }
        report.complete();
        perf.finish_run(correlation_id, &report).await;

        let rendered = chart::render_chart(
            &report.sizes(),
            &report.nested_times(),
            &report.set_times(),
            options,
        )?;

        let logger = perf.logger();
        logger.debug("Chart rendered")
            .field("path", rendered.path.display().to_string())
            .field("font", rendered.font.to_string())
            .log()
            .await;

        let formatter = OutputFormatterFactory::create_formatter(self.config.enable_color);
        if self.config.verbose {
            println!("{}", formatter.format_header("Lookup Benchmark")?);
            println!("{}", formatter.format_timing_table(&report)?);
            println!("{}", formatter.format_run_summary(&report)?);
            println!();
        }

        let file_name = rendered.path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| defaults::CHART_FILE_NAME.to_string());
        let dir = rendered.path.parent().unwrap_or_else(|| Path::new("."));
        println!("{}", formatter.format_saved(&file_name, dir)?);

        if self.should_open_viewer() {
            if let Err(e) = chart::open_in_viewer(&rendered.path) {
                logger.warn("Could not open the chart in an image viewer")
                    .error_info(&e)
                    .log()
                    .await;
            }
        } else {
            logger.debug("Interactive display skipped")
                .field("show_chart", self.config.show_chart)
                .log()
                .await;
        }

        Ok(RunOutcome { report, chart: rendered })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn quiet_config() -> Config {
        Config {
            seed: Some(99),
            enable_color: false,
            show_chart: false,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_run_with_small_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(quiet_config());

        let outcome = app.run_with(&[10, 100], &ChartOptions::in_dir(dir.path())).await.unwrap();

        assert_eq!(outcome.report.sizes(), vec![10, 100]);
        assert_eq!(outcome.report.seed, Some(99));
        assert!(outcome.report.completed_at.is_some());
        assert!(dir.path().join("performance_comparison.png").is_file());
    }

    #[tokio::test]
    async fn test_sampling_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(quiet_config());

        let err = app.run_with(&[1_000_000], &ChartOptions::in_dir(dir.path())).await.unwrap_err();

        assert!(matches!(err, AppError::Sampling(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(!dir.path().join("performance_comparison.png").exists());
    }

    #[tokio::test]
    async fn test_unwritable_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(quiet_config());
        let options = ChartOptions::in_dir(&dir.path().join("does-not-exist"));

        let err = app.run_with(&[10], &options).await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_viewer_disabled_by_config() {
        let app = App::new(quiet_config());
        assert!(!app.should_open_viewer());
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn test_viewer_needs_a_display() {
        let _guard = crate::config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<_> = ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .map(|var| (*var, std::env::var_os(var)))
            .collect();

        std::env::remove_var("DISPLAY");
        std::env::remove_var("WAYLAND_DISPLAY");
        let app = App::new(Config { show_chart: true, ..quiet_config() });
        assert!(!app.should_open_viewer());

        std::env::set_var("DISPLAY", ":0");
        assert!(app.should_open_viewer());

        for (var, value) in saved {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
    }
}
