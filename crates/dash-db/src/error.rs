//! Database error types for dash-db.

use thiserror::Error;

/// Errors from record store and seeding operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned an unexpected shape.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema creation failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (bad configuration, bad data in the store).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A stored document could not be encoded or decoded.
    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    /// The dataset file could not be read or parsed.
    #[error("Seed file '{path}' unusable: {reason}")]
    Seed { path: String, reason: String },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
