//! Server error types

use axum::response::{IntoResponse, Response};

use errand_api::ApiError;

use crate::auth::AuthError;
use crate::config::ConfigError;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Store error: {0}")]
    Store(#[from] errand_core::StoreError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Convert to ApiError for consistent error responses
        let api_error = match self {
            ServerError::Store(e) => ApiError::from(e),
            ServerError::Api(e) => e,
            ServerError::Auth(e) => ApiError::from(e),
            _ => ApiError::ServiceUnavailable {
                retry_after_seconds: Some(30),
            },
        };

        api_error.into_response()
    }
}
