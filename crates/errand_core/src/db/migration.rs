//! Simplified database migration system for schema versioning

use surrealdb::{Connection, Surreal};

use crate::db::schema::Schema;
use crate::db::{Result, StoreError};

/// Database migration runner
pub struct MigrationRunner;

impl MigrationRunner {
    /// Run all migrations
    pub async fn run<C: Connection>(db: &Surreal<C>) -> Result<()> {
        let current_version = Self::get_schema_version(db).await?;

        if current_version < 1 {
            tracing::info!("Running migration v1: Initial schema");
            Self::migrate_v1(db).await?;
            Self::update_schema_version(db, 1).await?;
        }

        // Add more migrations here as needed

        Ok(())
    }

    /// Migration v1: Initial schema
    async fn migrate_v1<C: Connection>(db: &Surreal<C>) -> Result<()> {
        for table in Schema::tables() {
            db.query(&table.schema)
                .await
                .map_err(|e| StoreError::QueryFailed(Box::new(e)))?;

            for index in &table.indexes {
                db.query(index)
                    .await
                    .map_err(|e| StoreError::QueryFailed(Box::new(e)))?;
            }
        }

        Ok(())
    }

    /// Get schema version
    async fn get_schema_version<C: Connection>(db: &Surreal<C>) -> Result<u32> {
        let mut result = db
            .query("SELECT schema_version FROM system_metadata LIMIT 1")
            .await
            .map_err(|e| StoreError::QueryFailed(Box::new(e)))?;

        #[derive(serde::Deserialize)]
        struct SchemaVersion {
            schema_version: u32,
        }

        let versions: Vec<SchemaVersion> = result.take(0).unwrap_or_default();

        Ok(versions.first().map(|v| v.schema_version).unwrap_or(0))
    }

    /// Update schema version
    async fn update_schema_version<C: Connection>(db: &Surreal<C>, version: u32) -> Result<()> {
        // Try to update an existing record first
        let updated: Vec<serde_json::Value> = db
            .query("UPDATE system_metadata SET schema_version = $version, updated_at = time::now()")
            .bind(("version", version))
            .await
            .map_err(|e| StoreError::QueryFailed(Box::new(e)))?
            .take(0)
            .unwrap_or_default();

        // If no record was updated, create a new one
        if updated.is_empty() {
            db.query("CREATE system_metadata SET schema_version = $version, created_at = time::now(), updated_at = time::now()")
                .bind(("version", version))
                .await
                .map_err(|e| StoreError::QueryFailed(Box::new(e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::client;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        // create_test_db already runs migrations once
        let db = client::create_test_db().await.unwrap();

        // A second run must be a no-op, not an error
        MigrationRunner::run(&db).await.unwrap();

        let version = MigrationRunner::get_schema_version(&db).await.unwrap();
        assert_eq!(version, 1);
    }
}
