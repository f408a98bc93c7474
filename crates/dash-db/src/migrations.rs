//! Schema creation.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::DashDb;
use crate::error::DatabaseError;

/// One collection table keyed by insertion order.
const MIGRATION_001: &str = include_str!("../migrations/001_records.sql");

/// Render a migration for a concrete collection name.
///
/// The name must already be validated as a plain identifier.
pub(crate) fn render(template: &str, collection: &str) -> String {
    template.replace("{collection}", collection)
}

impl DashDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(&render(MIGRATION_001, &self.collection))
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_records: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_every_placeholder() {
        let sql = render(MIGRATION_001, "internship");
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS internship"));
        assert!(!sql.contains("{collection}"));
    }
}
