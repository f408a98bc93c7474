//! Filter and aggregation engine.
//!
//! Pure derivations over an immutable record set:
//!
//! ```text
//! records ──┬── distinct_values(field) ──> selector options
//!           ├── apply_filters(selection) ──> list view
//!           ├── bar_series ──> bar chart      (full set, ignores selection)
//!           └── sector_counts ──> pie chart   (full set, ignores selection)
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::chart::BarPoint;
use crate::field::CategoricalField;
use crate::record::Record;
use crate::selection::Selection;

/// Label of the implicit option that leaves a field unconstrained.
pub const ALL_OPTION_LABEL: &str = "All";

/// Unique values of `field` across `records`, in first-occurrence order.
///
/// The empty string is a value like any other and is kept.
#[must_use]
pub fn distinct_values(records: &[Record], field: CategoricalField) -> IndexSet<String> {
    let mut values = IndexSet::new();
    for record in records {
        let value = field.value_of(record);
        if !values.contains(value) {
            values.insert(value.to_string());
        }
    }
    values
}

/// Records satisfying every set constraint of `selection`, in input order.
#[must_use]
pub fn apply_filters(records: &[Record], selection: &Selection) -> Vec<Record> {
    if selection.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect()
}

/// One `(topic, intensity)` point per record, in record order.
///
/// Duplicate topics are kept as separate bars.
#[must_use]
pub fn bar_series(records: &[Record]) -> Vec<BarPoint> {
    records
        .iter()
        .map(|record| BarPoint {
            label: record.topic.clone(),
            value: record.intensity,
        })
        .collect()
}

/// Record count per sector, keyed in first-occurrence order.
#[must_use]
pub fn sector_counts(records: &[Record]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.sector.clone()).or_insert(0) += 1;
    }
    counts
}

/// One entry in a selector's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    /// Empty for the "All" option.
    pub value: String,
}

/// Options for one selector: "All" followed by the field's distinct values.
#[must_use]
pub fn select_options(records: &[Record], field: CategoricalField) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        label: ALL_OPTION_LABEL.to_string(),
        value: String::new(),
    })
    .chain(
        distinct_values(records, field)
            .into_iter()
            .map(|value| SelectOption {
                label: value.clone(),
                value,
            }),
    )
    .collect()
}
