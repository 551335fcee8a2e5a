//! Video metadata fetch handler.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use reelvault_core::models::Video;
use reelvault_core::AppError;

use crate::auth::{ensure_owner, UserContext};
use crate::error::HttpAppError;
use crate::state::AppState;

/// `GET /api/videos/{id}`
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    Path(video_id): Path<Uuid>,
) -> Result<Json<Video>, HttpAppError> {
    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;
    ensure_owner(&video, user.user_id)?;

    Ok(Json(video))
}
