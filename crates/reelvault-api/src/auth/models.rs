use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use reelvault_core::AppError;
use uuid::Uuid;

use crate::error::HttpAppError;

/// Caller identity extracted from a validated bearer token and stored in
/// request extensions by the auth middleware.
#[derive(Debug, Clone, Copy)]
pub struct UserContext {
    pub user_id: Uuid,
}

// Implement FromRequestParts for UserContext so it composes with Multipart:
// extension-based extractors must run before the body is consumed.
impl<S> FromRequestParts<S> for UserContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<UserContext>().copied().ok_or_else(|| {
            HttpAppError(AppError::Unauthenticated(
                "Missing authentication context".to_string(),
            ))
        })
    }
}
