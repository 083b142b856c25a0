//! Task persistence for Errand
//!
//! One SurrealDB connection per process, established at startup and
//! shared by handle. Everything task documents need lives here: the
//! connection lifecycle, schema and migrations, the record wrappers, and
//! the create/list operations.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;
pub mod migration;
pub mod models;
pub mod ops;
pub mod schema;

use crate::error::ValidationError;

/// Core store error type
#[derive(Error, Debug, Diagnostic)]
pub enum StoreError {
    #[error("Connection failed")]
    #[diagnostic(help(
        "Check your database configuration and ensure the database is reachable"
    ))]
    ConnectionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Store is not ready")]
    #[diagnostic(help(
        "The database connection is not established; the request may be retried"
    ))]
    Unavailable,

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidContent(#[from] ValidationError),

    #[error("Query failed")]
    #[diagnostic(help("Check the query syntax and table schema"))]
    QueryFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Configuration for the store backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatabaseConfig {
    Embedded {
        #[serde(default = "default_db_path")]
        path: String,
    },
    Remote {
        url: String,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        namespace: String,
        database: String,
    },
}

fn default_db_path() -> String {
    "./errand.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig::Embedded {
            path: default_db_path(),
        }
    }
}

/// Classify a query-time error: an uninitialised connection is a
/// retryable outage, everything else is permanent for the request.
pub(crate) fn store_error(e: surrealdb::Error) -> StoreError {
    match e {
        surrealdb::Error::Api(surrealdb::error::Api::ConnectionUninitialised) => {
            StoreError::Unavailable
        }
        other => StoreError::QueryFailed(Box::new(other)),
    }
}
