//! Cross-cutting error types for the dashboard.
//!
//! Store, configuration, and HTTP errors live in their own crates. `CoreError`
//! covers what can go wrong when interpreting user input against the model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A field name did not match any categorical field.
    #[error("Unknown categorical field '{0}' (expected one of: topic, sector, region, pestle, source)")]
    UnknownField(String),

    /// A dataset document could not be interpreted as a record.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
