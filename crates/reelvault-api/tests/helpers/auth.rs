//! Session-token helpers for tests. Token issuance belongs to the account
//! service in production; tests mint their own against the test secret.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use reelvault_api::auth::jwt::Claims;

pub const TEST_JWT_SECRET: &str = "reelvault-test-secret-reelvault-test-secret";

pub fn sign_token(user_id: Uuid, secret: &str, ttl_seconds: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        iat: now,
        exp: now + ttl_seconds,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// `Authorization` header value for a user signed with the test secret.
pub fn bearer_for(user_id: Uuid) -> String {
    format!("Bearer {}", sign_token(user_id, TEST_JWT_SECRET, 3600))
}
