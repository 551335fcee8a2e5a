//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use reelvault_core::Config;

use crate::auth::middleware::{auth_middleware, AuthState};
use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;

/// Slack for multipart boundaries and part headers that sit outside the
/// per-file ceiling enforced while staging.
const MULTIPART_FRAMING_SLACK: usize = 16 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let auth_state = Arc::new(AuthState {
        jwt_secret: config.jwt_secret.clone(),
    });

    // Protected routes (require authentication). State is applied here so
    // handlers taking Multipart work with the UserContext extractor.
    let protected_routes = Router::new()
        .route(
            &format!("{}/videos/{{id}}", API_PREFIX),
            get(handlers::video_get::get_video),
        )
        .route(
            &format!("{}/videos/{{id}}/video", API_PREFIX),
            post(handlers::video_upload::upload_video),
        )
        .route(
            &format!("{}/videos/{{id}}/thumbnail", API_PREFIX),
            post(handlers::thumbnail_upload::upload_thumbnail),
        )
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(state.clone());

    // The transport-level cap rejects oversized bodies before any byte is
    // read; the per-file ceiling is enforced precisely while staging.
    let body_limit = config
        .max_video_size_bytes
        .max(config.max_thumbnail_size_bytes)
        + MULTIPART_FRAMING_SLACK;

    // Server-level concurrency limit to protect against resource exhaustion
    // under extreme load.
    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);

    Router::new()
        .route("/health", get(health))
        .merge(protected_routes)
        .nest_service("/assets", ServeDir::new(&config.assets_root))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
