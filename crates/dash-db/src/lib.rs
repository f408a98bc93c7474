//! # dash-db
//!
//! libSQL-backed record collection for the dashboard.
//!
//! The store is treated as a document collection: records go in with
//! `insert_many` and come back with `find_all`, in insertion order. Each row
//! keeps one record as a JSON document. A local file, `:memory:`, or a remote
//! libSQL server can back it.
//!
//! [`seed`] loads the bundled dataset into the collection, guarded by a
//! [`SeedMode`](dash_config::SeedMode).

pub mod error;
mod migrations;
pub mod seed;
pub mod store;

pub use error::DatabaseError;
pub use seed::{SeedOutcome, load_dataset, seed};
pub use store::RecordStore;

use dash_config::StoreConfig;
use dash_core::Record;
use libsql::Builder;

/// Handle to one record collection.
pub struct DashDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    collection: String,
}

impl DashDb {
    /// Open the store described by `config` and create the collection if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the configuration is invalid, the database
    /// cannot be reached, or schema creation fails.
    pub async fn open(config: &StoreConfig) -> Result<Self, DatabaseError> {
        config
            .validate()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;

        let db = if config.is_remote() {
            Builder::new_remote(config.url.clone(), config.auth_token.clone())
                .build()
                .await?
        } else {
            Builder::new_local(&config.url).build().await?
        };
        let conn = db.connect()?;

        let dash_db = Self {
            db,
            conn,
            collection: config.collection.clone(),
        };
        dash_db.run_migrations().await?;
        tracing::debug!(url = %config.url, collection = %config.collection, "record store opened");
        Ok(dash_db)
    }

    /// Open a local-only database at `path` (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the collection name is invalid or the
    /// database cannot be opened.
    pub async fn open_local(path: &str, collection: &str) -> Result<Self, DatabaseError> {
        Self::open(&StoreConfig {
            url: path.to_string(),
            auth_token: String::new(),
            collection: collection.to_string(),
        })
        .await
    }

    /// Name of the backing collection.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Insert every record in one transaction. Returns the number inserted.
    ///
    /// Nothing is deduplicated; inserting the same records twice stores them twice.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if encoding or any insert fails; the
    /// transaction is then rolled back.
    pub async fn insert_many(&self, records: &[Record]) -> Result<usize, DatabaseError> {
        if records.is_empty() {
            return Ok(0);
        }

        let sql = format!("INSERT INTO {} (doc) VALUES (?1)", self.collection);
        let tx = self.conn.transaction().await?;
        for record in records {
            let doc = serde_json::to_string(record)?;
            tx.execute(&sql, libsql::params![doc]).await?;
        }
        tx.commit().await?;
        Ok(records.len())
    }

    /// Every record in the collection, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored document is not
    /// a valid record.
    pub async fn find_all(&self) -> Result<Vec<Record>, DatabaseError> {
        let sql = format!("SELECT doc FROM {} ORDER BY id", self.collection);
        let mut rows = self.conn.query(&sql, ()).await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            let doc = row.get::<String>(0)?;
            records.push(serde_json::from_str(&doc)?);
        }
        Ok(records)
    }

    /// Number of records in the collection.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count(&self) -> Result<u64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.collection);
        let mut rows = self.conn.query(&sql, ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }
}
