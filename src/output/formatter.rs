//! Core formatting traits and implementations
//!
//! This module defines the output formatting interface and provides
//! a plain text implementation with table formatting capabilities.

use crate::{
    error::{AppError, Result},
    models::metrics::PerformanceReport,
    types::MatchStrategy,
};
use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format the per-size timing table
    fn format_timing_table(&self, report: &PerformanceReport) -> Result<String>;

    /// Format the one-line run summary shown under the table
    fn format_run_summary(&self, report: &PerformanceReport) -> Result<String>;

    /// Format the save confirmation; always plain text
    fn format_saved(&self, file_name: &str, dir: &Path) -> Result<String> {
        Ok(saved_message(file_name, dir))
    }
}

/// Console line confirming where the chart was written
pub fn saved_message(file_name: &str, dir: &Path) -> String {
    format!("Graph saved as '{}' in {}", file_name, dir.display())
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Show table borders
    pub table_borders: bool,
    /// Decimal places for durations in seconds
    pub seconds_precision: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            table_borders: true,
            seconds_precision: 6,
        }
    }
}

/// Table formatting configuration
#[derive(Debug, Clone)]
pub struct TableFormat {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Show borders around table
    pub show_borders: bool,
    /// Show header row
    pub show_header: bool,
}

impl TableFormat {
    /// Columns of the timing table
    pub fn timing_table(show_borders: bool) -> Self {
        Self {
            columns: vec![
                Column::new("Size (n)", Alignment::Right, 8),
                Column::new(MatchStrategy::NestedLoops.label(), Alignment::Right, 12),
                Column::new(MatchStrategy::SetLookup.label(), Alignment::Right, 12),
                Column::new("Speedup", Alignment::Right, 8),
            ],
            show_borders,
            show_header: true,
        }
    }
}

/// Column definition for table formatting
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header
    pub header: String,
    /// Column alignment
    pub alignment: Alignment,
    /// Minimum width
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str, alignment: Alignment, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            alignment,
            min_width,
        }
    }
}

/// Text alignment options
#[derive(Debug, Clone)]
pub enum Alignment {
    Left,
    Right,
}

/// Row data for table formatting
pub type RowData = Vec<String>;

/// Seconds with fixed precision
pub(crate) fn format_seconds(duration: Duration, precision: usize) -> String {
    format!("{:.*}", precision, duration.as_secs_f64())
}

/// Nested/set ratio, or a dash when the set timing was zero
pub(crate) fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(ratio) if ratio >= 100.0 => format!("{:.0}x", ratio),
        Some(ratio) => format!("{:.1}x", ratio),
        None => "-".to_string(),
    }
}

/// Table rows for a report, one per measured size
pub(crate) fn timing_rows(report: &PerformanceReport, precision: usize) -> Vec<RowData> {
    report.measurements.iter()
        .map(|m| vec![
            m.size.to_string(),
            format_seconds(m.nested_duration, precision),
            format_seconds(m.set_duration, precision),
            format_speedup(m.speedup()),
        ])
        .collect()
}

/// Calculate column widths from headers and cell contents
pub(crate) fn column_widths(format: &TableFormat, rows: &[RowData]) -> Vec<usize> {
    format.columns.iter()
        .enumerate()
        .map(|(idx, column)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .fold(column.min_width.max(column.header.chars().count()), usize::max)
        })
        .collect()
}

/// Align text within specified width
pub(crate) fn align_text(text: &str, width: usize, alignment: &Alignment) -> String {
    match alignment {
        Alignment::Left => format!("{:<width$}", text, width = width),
        Alignment::Right => format!("{:>width$}", text, width = width),
    }
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Create a table with the given format and data
    fn create_table(&self, format: &TableFormat, rows: &[RowData]) -> String {
        let widths = column_widths(format, rows);
        let mut output = String::new();

        if format.show_header {
            if format.show_borders {
                output.push_str(&self.create_horizontal_border(&widths));
                output.push('\n');
            }

            let headers: Vec<String> = format.columns.iter().map(|c| c.header.clone()).collect();
            output.push_str(&self.create_row(&headers, &widths, format));
            output.push('\n');
        }

        if format.show_borders {
            output.push_str(&self.create_horizontal_border(&widths));
            output.push('\n');
        }

        for row in rows {
            output.push_str(&self.create_row(row, &widths, format));
            output.push('\n');
        }

        if format.show_borders {
            output.push_str(&self.create_horizontal_border(&widths));
        }

        output.trim_end().to_string()
    }

    /// Create a table row
    fn create_row(&self, data: &[String], widths: &[usize], format: &TableFormat) -> String {
        let mut row = String::new();

        if format.show_borders {
            row.push('|');
        }

        for ((cell, &width), column) in data.iter().zip(widths).zip(&format.columns) {
            let padded_cell = align_text(cell, width, &column.alignment);

            if format.show_borders {
                row.push(' ');
                row.push_str(&padded_cell);
                row.push_str(" |");
            } else {
                row.push_str(&padded_cell);
                row.push_str("  ");
            }
        }

        row.trim_end().to_string()
    }

    /// Create horizontal border for table
    fn create_horizontal_border(&self, widths: &[usize]) -> String {
        let mut border = String::from("+");
        for &width in widths {
            border.push_str(&"-".repeat(width + 2));
            border.push('+');
        }
        border
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "=".repeat(title.chars().count() + 4);

        writeln!(output, "{}", border)
            .map_err(|e| AppError::internal(format!("Failed to format header: {}", e)))?;
        writeln!(output, "  {}  ", title)
            .map_err(|e| AppError::internal(format!("Failed to format header: {}", e)))?;
        write!(output, "{}", border)
            .map_err(|e| AppError::internal(format!("Failed to format header: {}", e)))?;

        Ok(output)
    }

    fn format_timing_table(&self, report: &PerformanceReport) -> Result<String> {
        if report.is_empty() {
            return Ok("No measurements recorded".to_string());
        }

        let format = TableFormat::timing_table(self.options.table_borders);
        let rows = timing_rows(report, self.options.seconds_precision);
        Ok(self.create_table(&format, &rows))
    }

    fn format_run_summary(&self, report: &PerformanceReport) -> Result<String> {
        let mut output = String::new();

        write!(output, "Measured {} sizes", report.len())
            .map_err(|e| AppError::internal(format!("Failed to format summary: {}", e)))?;
        if let Some(seed) = report.seed {
            write!(output, " (seed {})", seed)
                .map_err(|e| AppError::internal(format!("Failed to format summary: {}", e)))?;
        }
        if let Some(elapsed) = report.total_elapsed().and_then(|d| d.to_std().ok()) {
            write!(output, " in {:.2}s", elapsed.as_secs_f64())
                .map_err(|e| AppError::internal(format!("Failed to format summary: {}", e)))?;
        }

        Ok(output)
    }
}
