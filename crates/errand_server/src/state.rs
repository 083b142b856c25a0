//! Application state

use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use errand_core::db::client;

use crate::{config::ServerConfig, error::ServerResult};

/// Shared state for all request handlers.
///
/// The database handle is the one process-wide shared resource: connected
/// once here, then cloned into each request. All task reads and writes go
/// through it; nothing is cached in-process.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub db: Arc<Surreal<Any>>,
    pub jwt_decoding_key: jsonwebtoken::DecodingKey,
}

impl AppState {
    pub async fn new(config: ServerConfig) -> ServerResult<Self> {
        // Connect to database; failure here must abort startup
        let db = client::connect(&config.database).await?;

        // Create JWT decoding key
        let jwt_decoding_key = jsonwebtoken::DecodingKey::from_secret(config.jwt_secret.as_bytes());

        Ok(Self {
            config,
            db: Arc::new(db),
            jwt_decoding_key,
        })
    }
}
