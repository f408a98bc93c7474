//! The five categorical fields a selection can constrain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::record::Record;

/// A categorical record attribute that can be filtered on.
///
/// Declaration order is the order selectors are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    Topic,
    Sector,
    Region,
    Pestle,
    Source,
}

impl CategoricalField {
    pub const ALL: [Self; 5] = [
        Self::Topic,
        Self::Sector,
        Self::Region,
        Self::Pestle,
        Self::Source,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Sector => "sector",
            Self::Region => "region",
            Self::Pestle => "pestle",
            Self::Source => "source",
        }
    }

    /// Label used by selector widgets, e.g. `"Select Topic:"`.
    #[must_use]
    pub const fn selector_label(self) -> &'static str {
        match self {
            Self::Topic => "Select Topic:",
            Self::Sector => "Select Sector:",
            Self::Region => "Select Region:",
            Self::Pestle => "Select Pestle:",
            Self::Source => "Select Source:",
        }
    }

    /// The record's value for this field. Missing values read as `""`.
    #[must_use]
    pub fn value_of(self, record: &Record) -> &str {
        match self {
            Self::Topic => &record.topic,
            Self::Sector => &record.sector,
            Self::Region => &record.region,
            Self::Pestle => &record.pestle,
            Self::Source => &record.source,
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoricalField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "Sector".parse::<CategoricalField>().unwrap(),
            CategoricalField::Sector
        );
        assert_eq!(
            " pestle ".parse::<CategoricalField>().unwrap(),
            CategoricalField::Pestle
        );
    }

    #[test]
    fn rejects_unknown_field() {
        let err = "country".parse::<CategoricalField>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownField(name) if name == "country"));
    }

    #[test]
    fn display_matches_as_str() {
        for field in CategoricalField::ALL {
            assert_eq!(field.to_string(), field.as_str());
        }
    }

    #[test]
    fn value_of_reads_matching_attribute() {
        let record = Record {
            topic: "oil".into(),
            sector: "Energy".into(),
            region: "Asia".into(),
            pestle: "Economic".into(),
            source: "EIA".into(),
            ..Default::default()
        };
        let values: Vec<&str> = CategoricalField::ALL
            .iter()
            .map(|field| field.value_of(&record))
            .collect();
        assert_eq!(values, ["oil", "Energy", "Asia", "Economic", "EIA"]);
    }
}
