//! Terminal rendering: charts as text blocks, the list view as record cards.

use std::fmt::Write as _;

use dash_core::{BarPoint, PieChartData, Record};

use crate::surface::{Chart, ChartRenderer, ChartSpec};

const DEFAULT_BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 18;

/// A rendered chart: plain text bound to its surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChart {
    pub surface: String,
    pub body: String,
}

impl Chart for TextChart {
    fn destroy(self) {
        tracing::trace!(surface = %self.surface, "text chart released");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Width in cells of the longest bar.
    pub bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl ChartRenderer for TextRenderer {
    type Chart = TextChart;

    fn create(&mut self, surface: &str, spec: &ChartSpec) -> TextChart {
        let body = match spec {
            ChartSpec::Bar {
                series_label,
                points,
                ..
            } => render_bars(series_label, points, self.bar_width),
            ChartSpec::Pie(pie) => render_pie(pie),
        };
        TextChart {
            surface: surface.to_string(),
            body,
        }
    }
}

fn render_bars(series_label: &str, points: &[BarPoint], width: usize) -> String {
    let mut out = format!("{series_label}\n");
    let max = points
        .iter()
        .filter_map(|p| p.value)
        .fold(0.0_f64, f64::max);

    for point in points {
        let label = fit(&point.label, LABEL_WIDTH);
        match point.value {
            Some(value) => {
                let cells = if max > 0.0 {
                    scaled_cells(value, max, width)
                } else {
                    0
                };
                let _ = writeln!(
                    out,
                    "{label:<LABEL_WIDTH$} | {} {}",
                    "█".repeat(cells),
                    format_number(value)
                );
            }
            None => {
                let _ = writeln!(out, "{label:<LABEL_WIDTH$} | -");
            }
        }
    }
    out
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scaled_cells(value: f64, max: f64, width: usize) -> usize {
    ((value.max(0.0) / max) * width as f64).round() as usize
}

#[allow(clippy::cast_precision_loss)]
fn render_pie(pie: &PieChartData) -> String {
    let total = pie.total();
    let mut out = String::from("Sectors\n");
    for slice in &pie.slices {
        let share = if total == 0 {
            0.0
        } else {
            slice.count as f64 * 100.0 / total as f64
        };
        let label = if slice.label.is_empty() {
            "(none)"
        } else {
            slice.label.as_str()
        };
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$} {:>5} {:>6.1}%  {}",
            fit(label, LABEL_WIDTH),
            slice.count,
            share,
            slice.color
        );
    }
    out
}

/// Render the list view: one card per record.
#[must_use]
pub fn render_list(records: &[Record]) -> String {
    if records.is_empty() {
        return String::from("(no records)\n");
    }
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "## {}", record.title);
        let _ = writeln!(out, "Intensity: {}", format_opt(record.intensity));
        let _ = writeln!(out, "Likelihood: {}", format_opt(record.likelihood));
        let _ = writeln!(out, "Relevance: {}", format_opt(record.relevance));
        let _ = writeln!(out, "Country: {}", record.country);
        let _ = writeln!(out, "Topic: {}", record.topic);
        let _ = writeln!(out, "Region: {}", record.region);
        let _ = writeln!(out, "Link: {}", record.url);
        out.push('\n');
    }
    out
}

fn format_opt(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
