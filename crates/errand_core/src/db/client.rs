//! SurrealDB connection management
//!
//! The connection is established once at process startup and passed by
//! handle; there is no global instance. Callers must refuse to serve
//! requests when [`connect`] fails.

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};

use crate::db::migration::MigrationRunner;
use crate::db::{DatabaseConfig, Result, StoreError};

pub const NAMESPACE: &str = "errand";
pub const DATABASE: &str = "errand";

/// Establish the process-wide store connection.
///
/// Idempotent per configuration and safe to share: the returned handle is
/// cheaply cloneable and internally synchronized for concurrent use. No
/// retries happen here; retry policy stays with the caller.
pub async fn connect(config: &DatabaseConfig) -> Result<Surreal<Any>> {
    match config {
        DatabaseConfig::Embedded { path } => {
            let address = if path.is_empty() {
                "memory".to_string()
            } else {
                // Ensure parent directory exists for file-based storage
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        std::fs::create_dir_all(parent).map_err(|e| {
                            StoreError::Other(format!(
                                "Failed to create database directory: {}",
                                e
                            ))
                        })?;
                    }
                }
                format!("surrealkv://{}", path)
            };

            tracing::info!("Connecting to embedded database at: {}", address);
            let db = any::connect(address)
                .await
                .map_err(|e| StoreError::ConnectionFailed(Box::new(e)))?;

            db.use_ns(NAMESPACE)
                .use_db(DATABASE)
                .await
                .map_err(|e| StoreError::ConnectionFailed(Box::new(e)))?;

            MigrationRunner::run(&db).await?;

            Ok(db)
        }
        DatabaseConfig::Remote {
            url,
            username,
            password,
            namespace,
            database,
        } => {
            use surrealdb::opt::auth::Root;

            tracing::info!("Connecting to remote database at: {}", url);
            let db = any::connect(url.as_str())
                .await
                .map_err(|e| StoreError::ConnectionFailed(Box::new(e)))?;

            // Authenticate if credentials provided
            if let (Some(user), Some(pass)) = (username, password) {
                db.signin(Root {
                    username: user.as_str(),
                    password: pass.as_str(),
                })
                .await
                .map_err(|e| StoreError::ConnectionFailed(Box::new(e)))?;
            }

            db.use_ns(namespace.as_str())
                .use_db(database.as_str())
                .await
                .map_err(|e| StoreError::ConnectionFailed(Box::new(e)))?;

            MigrationRunner::run(&db).await?;

            Ok(db)
        }
    }
}

/// Create an in-memory database instance for testing
pub async fn create_test_db() -> Result<Surreal<Any>> {
    let db = any::connect("memory")
        .await
        .map_err(|e| StoreError::ConnectionFailed(Box::new(e)))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| StoreError::ConnectionFailed(Box::new(e)))?;

    MigrationRunner::run(&db).await?;

    Ok(db)
}

/// Check that the connection is healthy
pub async fn health_check(db: &Surreal<Any>) -> Result<()> {
    db.health()
        .await
        .map_err(|e| StoreError::ConnectionFailed(Box::new(e)))
}
