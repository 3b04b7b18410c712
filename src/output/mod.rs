//! Console output formatting
//!
//! Formats the optional per-size timing table and the save confirmation,
//! in plain text or with terminal colors.

mod formatter;
mod colored;

pub use formatter::{
    OutputFormatter,
    PlainFormatter,
    TableFormat,
    FormattingOptions,
    Column,
    Alignment,
    RowData,
    saved_message,
};
pub use colored::ColoredFormatter;

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            ..FormattingOptions::default()
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_save_line_is_identical_across_formatters() {
        let dir = Path::new("/tmp/run");
        let plain = OutputFormatterFactory::create_formatter(false);
        let colored = OutputFormatterFactory::create_formatter(true);

        let expected = "Graph saved as 'performance_comparison.png' in /tmp/run";
        assert_eq!(plain.format_saved("performance_comparison.png", dir).unwrap(), expected);
        assert_eq!(colored.format_saved("performance_comparison.png", dir).unwrap(), expected);
    }
}
