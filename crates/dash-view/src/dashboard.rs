//! Event-driven dashboard controller.
//!
//! Owns the full record set and the current selection for one session and
//! keeps the derived views in step with them:
//!
//! | input change      | filtered subset | bar series / sector counts |
//! |-------------------|-----------------|----------------------------|
//! | records loaded    | recomputed      | recomputed                 |
//! | selection changed | recomputed      | unchanged                  |
//!
//! Chart inputs always describe the unfiltered set; only the list view follows
//! the selection.

use indexmap::IndexMap;
use serde::Serialize;

use dash_core::{
    BarPoint, CategoricalField, PieChartData, Record, SelectOption, Selection, apply_filters,
    bar_series, sector_counts, select_options,
};

/// An input change the controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The one-shot fetch succeeded.
    Loaded(Vec<Record>),
    /// The one-shot fetch failed; the record set stays empty.
    FetchFailed(String),
    /// A selector changed. `None` or `Some("")` means "All".
    SelectionChanged {
        field: CategoricalField,
        value: Option<String>,
    },
    /// Every selector back to "All".
    ResetSelection,
}

/// Which derived views an event recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recomputed {
    pub filtered: bool,
    pub charts: bool,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    records: Vec<Record>,
    selection: Selection,
    filtered: Vec<Record>,
    bars: Vec<BarPoint>,
    sectors: IndexMap<String, usize>,
    last_error: Option<String>,
}

impl Dashboard {
    /// A dashboard with no records yet. Every view is empty until `Loaded`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and recompute what depends on it.
    pub fn apply(&mut self, event: DashboardEvent) -> Recomputed {
        match event {
            DashboardEvent::Loaded(records) => {
                tracing::debug!(count = records.len(), "record set loaded");
                self.records = records;
                self.selection.reset();
                self.last_error = None;
                self.recompute_charts();
                self.recompute_filtered();
                Recomputed {
                    filtered: true,
                    charts: true,
                }
            }
            DashboardEvent::FetchFailed(reason) => {
                tracing::error!(%reason, "error fetching data");
                self.last_error = Some(reason);
                Recomputed::default()
            }
            DashboardEvent::SelectionChanged { field, value } => {
                self.selection.set(field, value);
                self.recompute_filtered();
                Recomputed {
                    filtered: true,
                    charts: false,
                }
            }
            DashboardEvent::ResetSelection => {
                self.selection.reset();
                self.recompute_filtered();
                Recomputed {
                    filtered: true,
                    charts: false,
                }
            }
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Records matching the current selection, in record order.
    #[must_use]
    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    /// Bar chart input over the full record set.
    #[must_use]
    pub fn bar_series(&self) -> &[BarPoint] {
        &self.bars
    }

    /// Per-sector counts over the full record set.
    #[must_use]
    pub const fn sector_counts(&self) -> &IndexMap<String, usize> {
        &self.sectors
    }

    #[must_use]
    pub fn pie(&self) -> PieChartData {
        PieChartData::from_counts(&self.sectors)
    }

    /// Selector options for `field`, from the full record set.
    #[must_use]
    pub fn options(&self, field: CategoricalField) -> Vec<SelectOption> {
        select_options(&self.records, field)
    }

    /// Reason of the last failed fetch, cleared by a successful load.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Serializable view of everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            total: self.records.len(),
            selection: self.selection.clone(),
            filtered: self.filtered.clone(),
            bar_series: self.bars.clone(),
            pie: self.pie(),
        }
    }

    fn recompute_filtered(&mut self) {
        self.filtered = apply_filters(&self.records, &self.selection);
    }

    fn recompute_charts(&mut self) {
        self.bars = bar_series(&self.records);
        self.sectors = sector_counts(&self.records);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub total: usize,
    pub selection: Selection,
    pub filtered: Vec<Record>,
    pub bar_series: Vec<BarPoint>,
    pub pie: PieChartData,
}
