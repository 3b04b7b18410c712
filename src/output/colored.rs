//! Colored formatter implementation with terminal color support
//!
//! Speedups are color coded by [`SpeedupLevel`]; everything else follows
//! the plain layout.

use crate::{
    error::Result,
    models::metrics::PerformanceReport,
    types::SpeedupLevel,
};
use super::formatter::{
    align_text, column_widths, format_speedup, timing_rows,
    FormattingOptions, OutputFormatter, PlainFormatter, TableFormat,
};
use colored::*;

impl SpeedupLevel {
    /// Get color for this speedup level
    pub fn color(&self) -> Color {
        match self {
            Self::None => Color::Red,
            Self::Modest => Color::Yellow,
            Self::Large => Color::Cyan,
            Self::Dramatic => Color::Green,
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub warning: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            warning: Color::Yellow,
            muted: Color::BrightBlack,
            border: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    plain_formatter: PlainFormatter,
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        let plain_formatter = PlainFormatter::new(options.clone());
        Self {
            plain_formatter,
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Apply bold formatting if colors are enabled
    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }

    fn border_line(&self, widths: &[usize]) -> String {
        let line = widths.iter()
            .map(|w| "─".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("┼");
        self.colorize(&line, self.color_scheme.border).to_string()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let border = "═".repeat(title.chars().count() + 4);
        Ok(format!(
            "{}\n  {}  \n{}",
            self.colorize(&border, self.color_scheme.border),
            self.bold(title).color(self.color_scheme.header),
            self.colorize(&border, self.color_scheme.border),
        ))
    }

    fn format_timing_table(&self, report: &PerformanceReport) -> Result<String> {
        if report.is_empty() {
            return Ok(self.colorize("No measurements recorded", self.color_scheme.muted).to_string());
        }

        let format = TableFormat::timing_table(false);
        let rows = timing_rows(report, self.options.seconds_precision);
        let widths = column_widths(&format, &rows);
        let separator = self.colorize("│", self.color_scheme.border).to_string();

        let mut lines = Vec::with_capacity(rows.len() + 2);

        let header = format.columns.iter()
            .zip(&widths)
            .map(|(column, &width)| {
                format!(" {} ", self.bold(&align_text(&column.header, width, &column.alignment)))
            })
            .collect::<Vec<_>>()
            .join(&separator);
        lines.push(header);
        lines.push(self.border_line(&widths));

        for (row, measurement) in rows.iter().zip(&report.measurements) {
            let speedup_color = measurement.speedup()
                .map(SpeedupLevel::from_ratio)
                .map(|level| level.color())
                .unwrap_or(self.color_scheme.muted);

            let cells = row.iter()
                .zip(&format.columns)
                .zip(&widths)
                .enumerate()
                .map(|(idx, ((cell, column), &width))| {
                    let aligned = align_text(cell, width, &column.alignment);
                    if idx == row.len() - 1 {
                        format!(" {} ", self.colorize(&aligned, speedup_color))
                    } else {
                        format!(" {} ", aligned)
                    }
                })
                .collect::<Vec<_>>()
                .join(&separator);
            lines.push(cells);
        }

        Ok(lines.join("\n"))
    }

    fn format_run_summary(&self, report: &PerformanceReport) -> Result<String> {
        let summary = self.plain_formatter.format_run_summary(report)?;
        let best = report.speedups().into_iter().flatten().fold(None, |best: Option<f64>, r| {
            Some(best.map_or(r, |b| b.max(r)))
        });

        match best {
            Some(ratio) => Ok(format!(
                "{}, best speedup {}",
                self.colorize(&summary, self.color_scheme.muted),
                self.colorize(&format_speedup(Some(ratio)), SpeedupLevel::from_ratio(ratio).color()),
            )),
            None => Ok(self.colorize(&summary, self.color_scheme.muted).to_string()),
        }
    }
}
