//! Error handling for the lookup benchmark

use thiserror::Error;

/// Custom error types for the lookup benchmark
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid sampling requests (more identifiers than the value range holds)
    #[error("Sampling error: {0}")]
    Sampling(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (chart file writes, working directory lookups, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (environment values, numbers, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Chart drawing errors
    #[error("Render error: {0}")]
    Render(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new sampling error
    pub fn sampling<S: Into<String>>(message: S) -> Self {
        Self::Sampling(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Sampling(_) => "SAMPLING",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Render(_) => "RENDER",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Same error kind with `prefix` prepended to its message
    pub fn with_prefix(self, prefix: &str) -> Self {
        match self {
            Self::Config(msg) => Self::Config(format!("{}: {}", prefix, msg)),
            Self::Sampling(msg) => Self::Sampling(format!("{}: {}", prefix, msg)),
            Self::Validation(msg) => Self::Validation(format!("{}: {}", prefix, msg)),
            Self::Io(msg) => Self::Io(format!("{}: {}", prefix, msg)),
            Self::Parse(msg) => Self::Parse(format!("{}: {}", prefix, msg)),
            Self::Render(msg) => Self::Render(format!("{}: {}", prefix, msg)),
            Self::Internal(msg) => Self::Internal(format!("{}: {}", prefix, msg)),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file, environment variables or command line arguments.", msg)
            }
            Self::Sampling(msg) => {
                format!("Cannot generate identifiers: {}\n\nSuggestion: Request at most as many identifiers as the value range holds.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check that the size and timing series have matching lengths.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check that the working directory is writable and has free space.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Check the format of your configuration values.", msg)
            }
            Self::Render(msg) => {
                format!("Chart rendering failed: {}\n\nSuggestion: Try a different font with --font or CHART_FONT.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1,  // Invalid configuration/usage
            Self::Sampling(_) => 2,
            Self::Io(_) => 5,
            Self::Render(_) => 6,
            Self::Internal(_) => 99,  // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Sampling(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Io(_) | Self::Render(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::parse(format!("Integer parse error: {}", error))
    }
}

impl From<std::str::ParseBoolError> for AppError {
    fn from(error: std::str::ParseBoolError) -> Self {
        Self::parse(format!("Boolean parse error: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error, keeping its category
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_prefix(&f()))
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}

/// Error reporter for user feedback on the terminal
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Render the report for an error
    pub fn format_error(&self, error: &AppError) -> String {
        let mut report = error.format_for_console(self.use_color);
        if self.verbose {
            report.push_str("\n\n");
            report.push_str(&error.user_friendly_message());
        }
        report
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.format_error(error));
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_error = AppError::config("Invalid configuration");
        assert_eq!(config_error.category(), "CONFIG");
        assert_eq!(config_error.exit_code(), 1);

        let sampling_error = AppError::sampling("too many");
        assert_eq!(sampling_error.category(), "SAMPLING");
        assert_eq!(sampling_error.exit_code(), 2);
    }

    #[test]
    fn test_error_display() {
        let error = AppError::sampling("requested 5 identifiers from a range of 3");
        let display = error.to_string();
        assert!(display.contains("Sampling error"));
        assert!(display.contains("range of 3"));
    }

    #[test]
    fn test_error_categories() {
        let errors = [
            AppError::config("config"),
            AppError::sampling("sampling"),
            AppError::validation("validation"),
            AppError::io("io"),
            AppError::parse("parse"),
            AppError::render("render"),
            AppError::internal("internal"),
        ];

        let expected_categories = [
            "CONFIG", "SAMPLING", "VALIDATION", "IO", "PARSE", "RENDER", "INTERNAL"
        ];

        for (error, expected) in errors.iter().zip(expected_categories.iter()) {
            assert_eq!(error.category(), *expected);
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::config("test").exit_code(), 1);
        assert_eq!(AppError::parse("test").exit_code(), 1);
        assert_eq!(AppError::sampling("test").exit_code(), 2);
        assert_eq!(AppError::io("test").exit_code(), 5);
        assert_eq!(AppError::render("test").exit_code(), 6);
        assert_eq!(AppError::internal("test").exit_code(), 99);
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = AppError::io("Permission denied");
        let message = error.user_friendly_message();
        assert!(message.contains("File operation failed"));
        assert!(message.contains("Suggestion:"));
        assert!(message.contains("Permission denied"));
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let app_error: AppError = io_error.into();
        assert_eq!(app_error.category(), "IO");

        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let app_error: AppError = parse_error.into();
        assert_eq!(app_error.category(), "PARSE");

        let bool_error = "maybe".parse::<bool>().unwrap_err();
        let app_error: AppError = bool_error.into();
        assert_eq!(app_error.category(), "PARSE");
    }

    #[test]
    fn test_error_context_keeps_category() {
        let result: Result<()> = Err(AppError::io("read-only file system"));
        let error = result.context("While saving chart").unwrap_err();

        assert_eq!(error.category(), "IO");
        assert!(error.to_string().contains("While saving chart"));
        assert!(error.to_string().contains("read-only file system"));
    }

    #[test]
    fn test_error_reporter() {
        let reporter = ErrorReporter::new(false, true);
        let report = reporter.format_error(&AppError::config("Test error"));

        assert!(report.starts_with("[CONFIG] Configuration error: Test error"));
        assert!(report.contains("Suggestion:"));

        let terse = ErrorReporter::new(false, false).format_error(&AppError::config("Test error"));
        assert!(!terse.contains("Suggestion:"));
    }

    #[test]
    fn test_console_formatting() {
        let error = AppError::render("font missing");
        let formatted_no_color = error.format_for_console(false);
        assert_eq!(formatted_no_color, "[RENDER] Render error: font missing");

        let formatted_color = error.format_for_console(true);
        assert!(formatted_color.contains("font missing"));
    }
}
