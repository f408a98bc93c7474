//! # dash-view
//!
//! Client side of the dashboard.
//!
//! A session fetches the full record set once ([`DataClient`]), feeds it to the
//! [`Dashboard`] controller, and re-renders on every selector change. The two
//! charts live on [`ChartSurface`]s that own at most one chart each;
//! [`TextRenderer`] draws them for a terminal.

pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod surface;
pub mod text;
pub mod view;

pub use dashboard::{Dashboard, DashboardEvent, DashboardSnapshot, Recomputed};
pub use error::ViewError;
pub use fetch::DataClient;
pub use surface::{Chart, ChartRenderer, ChartSpec, ChartSurface};
pub use text::{TextChart, TextRenderer, render_list};
pub use view::{BAR_SURFACE, DashboardView, PIE_SURFACE};
