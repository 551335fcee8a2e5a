//! Bearer extraction and HS256 session-token validation.
//!
//! Token issuance lives in the (out of scope) account service; this module
//! only verifies. Validation is local and side-effect free.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use reelvault_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user_id
    pub iat: i64,  // issued at timestamp
    pub exp: i64,  // expiration timestamp
}

/// Extract the bearer credential from request headers.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthenticated("Missing authorization header".to_string()))?;

    header
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppError::Unauthenticated("Invalid authorization header format".to_string())
        })
}

/// Validate a session token against the shared secret, yielding the
/// caller's user id. Expired or tampered tokens are rejected.
pub fn validate_token(token: &str, secret: &str) -> Result<Uuid, AppError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims.sub)
    .map_err(|e| AppError::Unauthenticated(format!("Invalid session token: {}", e)))
}
