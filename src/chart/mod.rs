//! Chart rendering of matcher running times
//!
//! Draws one line series per matching strategy (running time in seconds
//! against list size) and saves the bitmap as a PNG file.

pub mod font;
pub mod viewer;

pub use font::{ensure_font, FontSource, FONT_FAMILY};
pub use viewer::{display_available, open_in_viewer};

use crate::{
    defaults,
    error::{AppError, ErrorContext, Result},
    types::MatchStrategy,
};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CHART_TITLE: &str = "Performance Comparison: Nested Loops vs Set-based Lookup";
pub const X_AXIS_LABEL: &str = "Size of List (n)";
pub const Y_AXIS_LABEL: &str = "Running Time (seconds)";

const MARKER_RADIUS: i32 = 4;

/// Where and how to draw the chart
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Font for chart text; system fonts, then the bundled font, when unset
    pub font_path: Option<PathBuf>,
}

impl ChartOptions {
    /// Default chart written to `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            output_path: dir.join(defaults::CHART_FILE_NAME),
            width: defaults::CHART_WIDTH,
            height: defaults::CHART_HEIGHT,
            font_path: None,
        }
    }

    /// Default chart written to the current working directory
    pub fn in_current_dir() -> Result<Self> {
        let dir = std::env::current_dir().context("Cannot determine working directory")?;
        Ok(Self::in_dir(&dir))
    }

    pub fn with_font(mut self, font_path: Option<PathBuf>) -> Self {
        self.font_path = font_path;
        self
    }
}

/// Result of a successful render
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub path: PathBuf,
    /// Font the title, axis labels and legend were drawn with
    pub font: FontSource,
}

/// Series color of a strategy
pub fn series_color(strategy: MatchStrategy) -> RGBColor {
    match strategy {
        MatchStrategy::NestedLoops => RED,
        MatchStrategy::SetLookup => BLUE,
    }
}

/// Label text for the running-time axis
fn format_seconds(value: f64, y_max: f64) -> String {
    if y_max < 0.01 {
        format!("{:.1e}", value)
    } else {
        format!("{:.3}", value)
    }
}

struct Series {
    strategy: MatchStrategy,
    points: Vec<(f64, f64)>,
}

fn build_series(sizes: &[usize], nested: &[Duration], set: &[Duration]) -> Result<Vec<Series>> {
    if sizes.len() != nested.len() || sizes.len() != set.len() {
        return Err(AppError::validation(format!(
            "series lengths differ: {} sizes, {} nested timings, {} set timings",
            sizes.len(), nested.len(), set.len()
        )));
    }

    let points = |durations: &[Duration]| -> Vec<(f64, f64)> {
        sizes.iter()
            .zip(durations)
            .map(|(&size, duration)| (size as f64, duration.as_secs_f64()))
            .collect()
    };

    Ok(vec![
        Series { strategy: MatchStrategy::NestedLoops, points: points(nested) },
        Series { strategy: MatchStrategy::SetLookup, points: points(set) },
    ])
}

/// Upper bounds of both axes with some headroom
fn axis_bounds(series: &[Series]) -> (f64, f64) {
    let (x_max, y_max) = series.iter()
        .flat_map(|s| s.points.iter())
        .fold((0.0f64, 0.0f64), |(x, y), &(px, py)| (x.max(px), y.max(py)));

    let x_max = if x_max > 0.0 { x_max * 1.05 } else { 1.0 };
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1e-6 };
    (x_max, y_max)
}

fn draw_err<E: std::fmt::Display>(error: E) -> AppError {
    AppError::render(error.to_string())
}

fn draw_chart(root: &DrawingArea<BitMapBackend<'_>, Shift>, series: &[Series]) -> Result<()> {
    let (x_max, y_max) = axis_bounds(series);

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, (FONT_FAMILY, 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    let x_formatter = |v: &f64| format!("{:.0}", v);
    let y_formatter = |v: &f64| format_seconds(*v, y_max);
    chart.configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style((FONT_FAMILY, 14))
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()
        .map_err(draw_err)?;

    for s in series {
        let color = series_color(s.strategy);
        chart.draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(2)))
            .map_err(draw_err)?
            .label(s.strategy.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(s.points.iter().map(|&p| Circle::new(p, MARKER_RADIUS, color.filled())))
            .map_err(draw_err)?;
    }

    chart.configure_series_labels()
        .label_font((FONT_FAMILY, 14))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
        .map_err(draw_err)?;

    Ok(())
}

/// Sibling path the bitmap is drawn to before it replaces `output`
fn staging_path(output: &Path) -> PathBuf {
    let name = output.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| defaults::CHART_FILE_NAME.to_string());
    output.with_file_name(format!(".{}.partial.png", name.trim_end_matches(".png")))
}

fn draw_to<F>(path: &Path, target: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    draw(&root)?;
    root.present().map_err(|e| {
        AppError::io(format!("Failed to write chart to {}: {}", target.display(), e))
    })
}

/// Draw with `draw` and save the bitmap at `path`, which is only replaced
/// once drawing and encoding both succeeded
fn save_drawing<F>(path: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    let staging = staging_path(path);

    // The backend flushes whatever was drawn when dropped, even on failure
    if let Err(e) = draw_to(&staging, path, size, draw) {
        let _ = std::fs::remove_file(&staging);
        return Err(e);
    }

    std::fs::rename(&staging, path)
        .with_context(|| format!("Failed to move chart into place at {}", path.display()))
}

/// Render both duration series against `sizes` and save the PNG.
///
/// An existing file at the output path is overwritten only by a complete
/// chart. Failing to write the file is an [`AppError::Io`]; drawing failures
/// are [`AppError::Render`].
pub fn render_chart(
    sizes: &[usize],
    nested: &[Duration],
    set: &[Duration],
    options: &ChartOptions,
) -> Result<RenderedChart> {
    let series = build_series(sizes, nested, set)?;
    let font = ensure_font(options.font_path.as_deref())?;

    save_drawing(&options.output_path, (options.width, options.height), |root| {
        draw_chart(root, &series)
    })?;

    Ok(RenderedChart {
        path: options.output_path.clone(),
        font,
    })
}
