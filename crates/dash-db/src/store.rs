//! The collection-store seam.
//!
//! HTTP handlers and the seeder talk to a `RecordStore`, not to libSQL, so
//! they can be exercised against in-memory fakes and failing stores.

use async_trait::async_trait;
use dash_core::Record;

use crate::DashDb;
use crate::error::DatabaseError;

/// A collection of records supporting bulk insert and full scan.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append every record. Returns the number inserted.
    async fn insert_many(&self, records: &[Record]) -> Result<usize, DatabaseError>;

    /// Every record, in insertion order.
    async fn find_all(&self) -> Result<Vec<Record>, DatabaseError>;

    /// Number of records held.
    async fn count(&self) -> Result<u64, DatabaseError>;
}

#[async_trait]
impl RecordStore for DashDb {
    async fn insert_many(&self, records: &[Record]) -> Result<usize, DatabaseError> {
        Self::insert_many(self, records).await
    }

    async fn find_all(&self) -> Result<Vec<Record>, DatabaseError> {
        Self::find_all(self).await
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        Self::count(self).await
    }
}
