//! API error types

use miette::Diagnostic;
use serde::{Deserialize, Serialize};

use errand_core::{StoreError, ValidationError};

/// API error response
///
/// The framework layer turns these into the user-visible conversational
/// failure message; every failed request still gets a response body.
#[derive(Debug, thiserror::Error, Diagnostic, Serialize, Deserialize)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation failed: {message}")]
    #[diagnostic(
        code(api::validation_error),
        help("Correct the request content and try again")
    )]
    Validation { message: String },

    /// Authentication required
    #[error("Authentication required")]
    #[diagnostic(
        code(api::unauthorized),
        help("Link the account and retry with a valid credential")
    )]
    Unauthorized { message: Option<String> },

    /// Store error from errand-core
    #[error("{message}")]
    #[diagnostic(code(api::store_error), help("Store operation failed"))]
    Store { message: String },

    /// JSON error
    #[error("{message}")]
    #[diagnostic(
        code(api::json_error),
        help("Check that your JSON is valid and matches the expected schema")
    )]
    Json { message: String },

    /// Service temporarily unavailable
    #[error("Service temporarily unavailable")]
    #[diagnostic(
        code(api::service_unavailable),
        help("Retry the whole request after a short delay")
    )]
    ServiceUnavailable { retry_after_seconds: Option<u64> },
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation { .. } => 400,
            ApiError::Unauthorized { .. } => 401,
            ApiError::Json { .. } => 400,
            ApiError::Store { .. } => 500,
            ApiError::ServiceUnavailable { .. } => 503,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: Some(message.into()),
        }
    }
}

// Conversion implementations

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // Transient: the caller may retry the whole request
            StoreError::Unavailable => Self::ServiceUnavailable {
                retry_after_seconds: Some(30),
            },
            StoreError::InvalidContent(e) => Self::from(e),
            other => Self::Store {
                message: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

// Server-side response conversion
#[cfg(feature = "server")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_type = match &self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::Unauthorized { .. } => "unauthorized",
            ApiError::Store { .. } => "store_error",
            ApiError::Json { .. } => "json_error",
            ApiError::ServiceUnavailable { .. } => "service_unavailable",
        };

        let message = match &self {
            ApiError::Unauthorized {
                message: Some(message),
            } => message.clone(),
            other => other.to_string(),
        };

        let body = serde_json::json!({
            "error": {
                "type": error_type,
                "message": message,
            },
            "timestamp": chrono::Utc::now(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(ApiError::validation("empty").status_code(), 400);
        assert_eq!(ApiError::unauthorized("no token").status_code(), 401);
        assert_eq!(
            ApiError::ServiceUnavailable {
                retry_after_seconds: Some(30)
            }
            .status_code(),
            503
        );
    }

    #[test]
    fn store_unavailable_maps_to_retryable_service_error() {
        let err = ApiError::from(StoreError::Unavailable);
        assert!(matches!(
            err,
            ApiError::ServiceUnavailable {
                retry_after_seconds: Some(_)
            }
        ));
    }

    #[test]
    fn store_validation_maps_to_user_correctable_error() {
        let err = ApiError::from(StoreError::InvalidContent(ValidationError::EmptyContent));
        assert!(matches!(err, ApiError::Validation { .. }));
    }
}
