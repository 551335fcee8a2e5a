//! Authentication middleware for protected routes.
//!
//! Validates the bearer credential and places a `UserContext` in request
//! extensions; the ownership check against the target record runs later in
//! the handlers, after the metadata fetch.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::jwt::{extract_bearer_token, validate_token};
use crate::auth::models::UserContext;
use crate::error::HttpAppError;

#[derive(Clone)]
pub struct AuthState {
    pub jwt_secret: String,
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let verified = extract_bearer_token(request.headers())
        .and_then(|token| validate_token(token, &auth_state.jwt_secret));

    match verified {
        Ok(user_id) => {
            request.extensions_mut().insert(UserContext { user_id });
            next.run(request).await
        }
        Err(err) => HttpAppError(err).into_response(),
    }
}
