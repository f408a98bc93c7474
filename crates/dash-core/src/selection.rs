//! Filter selection: one optional equality constraint per categorical field.

use serde::{Deserialize, Serialize};

use crate::field::CategoricalField;
use crate::record::Record;

/// Up to five simultaneous equality constraints, combined with AND.
///
/// An unset field matches every record. Setting a field to `""` is the same
/// as unsetting it, because the "All" option of a selector carries the empty
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pestle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl Selection {
    /// A selection with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Selection::set`].
    #[must_use]
    pub fn with(mut self, field: CategoricalField, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    /// Set or unset one field. `Some("")` unsets.
    pub fn set(&mut self, field: CategoricalField, value: Option<String>) {
        *self.slot_mut(field) = value.filter(|v| !v.is_empty());
    }

    /// Unset every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn get(&self, field: CategoricalField) -> Option<&str> {
        let slot = match field {
            CategoricalField::Topic => &self.topic,
            CategoricalField::Sector => &self.sector,
            CategoricalField::Region => &self.region,
            CategoricalField::Pestle => &self.pestle,
            CategoricalField::Source => &self.source,
        };
        // Deserialized selections may carry "" directly.
        slot.as_deref().filter(|value| !value.is_empty())
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        CategoricalField::ALL
            .iter()
            .all(|field| self.get(*field).is_none())
    }

    /// The set constraints, in field declaration order.
    pub fn constraints(&self) -> impl Iterator<Item = (CategoricalField, &str)> {
        CategoricalField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// Whether `record` satisfies every set constraint.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.constraints()
            .all(|(field, value)| field.value_of(record) == value)
    }

    fn slot_mut(&mut self, field: CategoricalField) -> &mut Option<String> {
        match field {
            CategoricalField::Topic => &mut self.topic,
            CategoricalField::Sector => &mut self.sector,
            CategoricalField::Region => &mut self.region,
            CategoricalField::Pestle => &mut self.pestle,
            CategoricalField::Source => &mut self.source,
        }
    }
}
