//! The dataset record.
//!
//! The bundled dataset is loosely typed: numeric attributes use `""` for
//! "no value" and any attribute may be `null`, missing, or of an unexpected
//! type. Deserialization is lenient so one odd attribute never rejects the
//! whole dataset: unreadable numbers become "no value" and non-text values in
//! text attributes are kept as their JSON text. Only a body that is not an
//! array of objects fails. Serialization writes `null` for absent numbers and
//! whole numbers as integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::errors::CoreError;

/// One dataset entry. Immutable once loaded into the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub url: String,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub topic: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub sector: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub region: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub pestle: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub source: String,

    #[serde(
        default,
        deserialize_with = "lenient_number",
        serialize_with = "whole_or_float"
    )]
    pub intensity: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        serialize_with = "whole_or_float"
    )]
    pub likelihood: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        serialize_with = "whole_or_float"
    )]
    pub relevance: Option<f64>,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub country: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub insight: String,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        serialize_with = "whole_or_float"
    )]
    pub impact: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        serialize_with = "whole_or_float"
    )]
    pub start_year: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        serialize_with = "whole_or_float"
    )]
    pub end_year: Option<f64>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub added: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub published: String,
}

impl Record {
    /// Parse a dataset file body: a JSON array of record objects.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if the body is not a JSON array or an
    /// element cannot be read as a record.
    pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<Self>, CoreError> {
        serde_json::from_slice(bytes).map_err(|e| CoreError::InvalidRecord(e.to_string()))
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Numbers, numeric strings, or nothing. Anything else reads as no value.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

/// Whole numbers are written as integers, so `6` in the dataset comes back as `6`.
#[allow(
    clippy::ref_option,
    clippy::trivially_copy_pass_by_ref,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
fn whole_or_float<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const EXACT_INT: f64 = 9_007_199_254_740_992.0;
    match *value {
        Some(n) if n.fract() == 0.0 && n.abs() <= EXACT_INT => serializer.serialize_i64(n as i64),
        Some(n) => serializer.serialize_f64(n),
        None => serializer.serialize_none(),
    }
}
