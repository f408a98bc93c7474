//! Dataset seeding.
//!
//! Reads a JSON array of records from disk and inserts it into a
//! [`RecordStore`]. Either the whole dataset parses and is inserted, or nothing
//! is touched: a malformed file never reaches the store.

use std::fmt;
use std::path::Path;

use dash_config::SeedMode;
use dash_core::Record;

use crate::error::DatabaseError;
use crate::store::RecordStore;

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The dataset was inserted; carries the number of records.
    Inserted(usize),
    /// The collection already held records (count attached), so nothing was inserted.
    SkippedNonEmpty(u64),
    /// Seeding is turned off.
    Disabled,
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted(n) => write!(f, "{n} documents inserted"),
            Self::SkippedNonEmpty(n) => write!(f, "skipped, collection already holds {n} documents"),
            Self::Disabled => f.write_str("seeding disabled"),
        }
    }
}

/// Read and parse the dataset file.
///
/// # Errors
///
/// Returns `DatabaseError::Seed` if the file cannot be read or is not a JSON
/// array of records.
pub async fn load_dataset(path: &Path) -> Result<Vec<Record>, DatabaseError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| DatabaseError::Seed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Record::parse_dataset(&bytes).map_err(|e| DatabaseError::Seed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Seed `store` from the dataset at `path` according to `mode`.
///
/// The file is only read when the mode calls for an insert.
///
/// # Errors
///
/// Returns `DatabaseError` if the dataset is unusable or the store fails.
/// Existing collection contents are left as they were.
pub async fn seed<S>(store: &S, path: &Path, mode: SeedMode) -> Result<SeedOutcome, DatabaseError>
where
    S: RecordStore + ?Sized,
{
    match mode {
        SeedMode::Never => return Ok(SeedOutcome::Disabled),
        SeedMode::IfEmpty => {
            let existing = store.count().await?;
            if existing > 0 {
                tracing::info!(existing, "collection not empty; skipping seed");
                return Ok(SeedOutcome::SkippedNonEmpty(existing));
            }
        }
        SeedMode::Always => {}
    }

    let records = load_dataset(path).await?;
    let inserted = store.insert_many(&records).await?;
    tracing::info!(inserted, path = %path.display(), "documents inserted from dataset");
    Ok(SeedOutcome::Inserted(inserted))
}
