//! Chart input types.
//!
//! Renderers take these as labelled numeric series; how they draw them is
//! their own business.

use indexmap::IndexMap;
use serde::Serialize;

/// Fixed pie palette. Slices past the end wrap around.
pub const PIE_PALETTE: [&str; 18] = [
    "#FF0000", "#FFA500", "#FFFF00", "#008000", "#0000FF", "#4B0082", "#9400D3", "#FF1493",
    "#00FFFF", "#00CED1", "#32CD32", "#FFD700", "#FF4500", "#00FF00", "#1E90FF", "#8A2BE2",
    "#FF69B4", "#B22222",
];

/// Bar colour for the intensity series.
pub const BAR_COLOR: &str = "darkBlue";

/// Dataset label for the intensity series.
pub const BAR_SERIES_LABEL: &str = "Intensity";

/// One bar: a record's topic and intensity. Absent intensity draws no bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub label: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub color: &'static str,
}

/// Pie chart input: sector counts paired with palette colours.
///
/// Colours are assigned by key position, so the same sector order always
/// yields the same colours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PieChartData {
    pub slices: Vec<PieSlice>,
}

impl PieChartData {
    #[must_use]
    pub fn from_counts(counts: &IndexMap<String, usize>) -> Self {
        let slices = counts
            .iter()
            .enumerate()
            .map(|(index, (label, count))| PieSlice {
                label: label.clone(),
                count: *count,
                color: PIE_PALETTE[index % PIE_PALETTE.len()],
            })
            .collect();
        Self { slices }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.slices.iter().map(|slice| slice.count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
