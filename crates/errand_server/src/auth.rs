//! Identity decoding
//!
//! Turns the bearer credential on an inbound fulfillment event into the
//! opaque [`UserIdentity`] the task store partitions by. Structural,
//! signature, and expiry checks are delegated to `jsonwebtoken`.

use axum::http::HeaderMap;
use jsonwebtoken::{DecodingKey, Validation, decode};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use errand_api::ApiError;
use errand_core::UserIdentity;

#[derive(Error, Diagnostic, Debug)]
pub enum AuthError {
    #[error("No credential attached to the request")]
    #[diagnostic(
        code(errand::auth::unauthenticated),
        help("Send the account-link token in the Authorization header")
    )]
    Unauthenticated,

    #[error("Credential is malformed or expired")]
    #[diagnostic(
        code(errand::auth::invalid_credential),
        help("Re-link the account to obtain a fresh credential")
    )]
    InvalidCredential,
}

/// Claims carried by the account-link token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Decode and validate a credential into the caller's identity.
///
/// Pure transformation; no side effects on failure.
pub fn decode_identity(token: &str, decoding_key: &DecodingKey) -> Result<UserIdentity, AuthError> {
    let token_data = decode::<Claims>(token, decoding_key, &Validation::default())
        .map_err(|_| AuthError::InvalidCredential)?;

    Ok(UserIdentity::new(token_data.claims.sub))
}

/// Authenticate an inbound request from its headers
pub fn authenticate(
    headers: &HeaderMap,
    decoding_key: &DecodingKey,
) -> Result<UserIdentity, AuthError> {
    let token = extract_bearer_token(headers).ok_or(AuthError::Unauthenticated)?;
    decode_identity(token, decoding_key)
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::unauthorized(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use pretty_assertions::assert_eq;

    const SECRET: &str = "test-secret";

    fn keypair() -> (EncodingKey, DecodingKey) {
        (
            EncodingKey::from_secret(SECRET.as_bytes()),
            DecodingKey::from_secret(SECRET.as_bytes()),
        )
    }

    fn token_for(subject: &str, ttl_seconds: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        };
        encode(&Header::default(), &claims, &keypair().0).unwrap()
    }

    #[test]
    fn valid_credential_yields_the_subject_identity() {
        let token = token_for("user-42", 3600);
        let identity = decode_identity(&token, &keypair().1).unwrap();
        assert_eq!(identity, UserIdentity::from("user-42"));
    }

    #[test]
    fn malformed_credential_is_rejected() {
        let err = decode_identity("not-a-jwt", &keypair().1).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredential));
    }

    #[test]
    fn expired_credential_is_rejected() {
        // Past the default validation leeway
        let token = token_for("user-42", -3600);
        let err = decode_identity(&token, &keypair().1).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredential));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let token = token_for("user-42", 3600);
        let other_key = DecodingKey::from_secret(b"some-other-secret");
        let err = decode_identity(&token, &other_key).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredential));
    }

    #[test]
    fn missing_header_means_unauthenticated() {
        let err = authenticate(&HeaderMap::new(), &keypair().1).unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[test]
    fn bearer_prefix_is_required() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Token abc".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Bearer abc".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), Some("abc"));
    }
}
