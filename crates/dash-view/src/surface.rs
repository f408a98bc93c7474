//! Chart surfaces with scoped chart ownership.
//!
//! A surface is a named display slot ("bar-chart", "pie-chart"). It holds at
//! most one chart. Rendering onto a surface destroys the chart already attached
//! before the renderer creates the next one, and dropping the surface destroys
//! whatever is still attached.

use dash_core::chart::{BAR_COLOR, BAR_SERIES_LABEL};
use dash_core::{BarPoint, PieChartData};

/// What to draw. Renderers treat this as opaque labelled series.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Bar {
        series_label: &'static str,
        color: &'static str,
        points: Vec<BarPoint>,
    },
    Pie(PieChartData),
}

impl ChartSpec {
    #[must_use]
    pub fn intensity_bars(points: &[BarPoint]) -> Self {
        Self::Bar {
            series_label: BAR_SERIES_LABEL,
            color: BAR_COLOR,
            points: points.to_vec(),
        }
    }
}

/// A live chart bound to one surface.
pub trait Chart {
    /// Release the chart's resources. Called exactly once per chart.
    fn destroy(self);
}

/// Something that turns a `ChartSpec` into a live chart on a surface.
pub trait ChartRenderer {
    type Chart: Chart;

    fn create(&mut self, surface: &str, spec: &ChartSpec) -> Self::Chart;
}

pub struct ChartSurface<C: Chart> {
    id: String,
    current: Option<C>,
}

impl<C: Chart> ChartSurface<C> {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Destroy the attached chart, then create and attach a new one.
    pub fn render<R>(&mut self, renderer: &mut R, spec: &ChartSpec) -> &C
    where
        R: ChartRenderer<Chart = C>,
    {
        self.clear();
        let chart = renderer.create(&self.id, spec);
        self.current.insert(chart)
    }

    /// The attached chart, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&C> {
        self.current.as_ref()
    }

    /// Destroy the attached chart, leaving the surface empty.
    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            tracing::trace!(surface = %self.id, "destroying previous chart");
            old.destroy();
        }
    }
}

impl<C: Chart> Drop for ChartSurface<C> {
    fn drop(&mut self) {
        self.clear();
    }
}
