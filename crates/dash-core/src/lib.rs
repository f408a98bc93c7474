//! # dash-core
//!
//! Record model, filter selection, and aggregation engine for the dashboard.
//!
//! This crate provides the types shared by the server and the client:
//! - `Record`, the dataset entry, with lenient deserialization of the bundled dataset
//! - `CategoricalField`, the five filterable fields
//! - `Selection`, up to five simultaneous equality constraints
//! - Engine functions deriving option lists, the filtered subset, and chart inputs
//! - Chart input types (bar points, pie slices, colour palette)

pub mod chart;
pub mod engine;
pub mod errors;
pub mod field;
pub mod record;
pub mod selection;

pub use chart::{BarPoint, PIE_PALETTE, PieChartData, PieSlice};
pub use engine::{
    ALL_OPTION_LABEL, SelectOption, apply_filters, bar_series, distinct_values, sector_counts,
    select_options,
};
pub use errors::CoreError;
pub use field::CategoricalField;
pub use record::Record;
pub use selection::Selection;
