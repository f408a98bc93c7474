//! The dashboard view: controller plus the two chart surfaces.

use dash_core::CategoricalField;

use crate::dashboard::{Dashboard, DashboardEvent, Recomputed};
use crate::surface::{ChartRenderer, ChartSpec, ChartSurface};

pub const BAR_SURFACE: &str = "bar-chart";
pub const PIE_SURFACE: &str = "pie-chart";

/// Routes events into the controller and re-renders charts when their
/// inputs change.
///
/// Charts are only drawn once there is data; an empty record set leaves both
/// surfaces blank.
pub struct DashboardView<R: ChartRenderer> {
    dashboard: Dashboard,
    renderer: R,
    bar: ChartSurface<R::Chart>,
    pie: ChartSurface<R::Chart>,
}

impl<R: ChartRenderer> DashboardView<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            dashboard: Dashboard::new(),
            renderer,
            bar: ChartSurface::new(BAR_SURFACE),
            pie: ChartSurface::new(PIE_SURFACE),
        }
    }

    pub fn handle(&mut self, event: DashboardEvent) -> Recomputed {
        let recomputed = self.dashboard.apply(event);
        if recomputed.charts {
            self.render_charts();
        }
        recomputed
    }

    /// Convenience for a selector change.
    pub fn select(&mut self, field: CategoricalField, value: Option<String>) -> Recomputed {
        self.handle(DashboardEvent::SelectionChanged { field, value })
    }

    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    #[must_use]
    pub const fn bar_chart(&self) -> Option<&R::Chart> {
        self.bar.current()
    }

    #[must_use]
    pub const fn pie_chart(&self) -> Option<&R::Chart> {
        self.pie.current()
    }

    fn render_charts(&mut self) {
        if self.dashboard.records().is_empty() {
            self.bar.clear();
            self.pie.clear();
            return;
        }
        let bars = ChartSpec::intensity_bars(self.dashboard.bar_series());
        self.bar.render(&mut self.renderer, &bars);
        let pie = ChartSpec::Pie(self.dashboard.pie());
        self.pie.render(&mut self.renderer, &pie);
    }
}
