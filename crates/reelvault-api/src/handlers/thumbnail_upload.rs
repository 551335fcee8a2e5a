//! Thumbnail upload handler.
//!
//! The video pipeline's simpler sibling: same authorization gate, no
//! classification step. Thumbnails are small, so the field is buffered in
//! memory and written to the local assets directory.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use reelvault_core::models::Video;
use reelvault_core::AppError;

use crate::auth::{ensure_owner, UserContext};
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{
    media_type_extension, normalize_mime_type, validate_content_type, validate_file_size,
};

const THUMBNAIL_FIELD: &str = "thumbnail";

/// `POST /api/videos/{id}/thumbnail`
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    Path(video_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Video>, HttpAppError> {
    let mut video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;
    ensure_owner(&video, user.user_id)?;

    let (content_type, data) = read_thumbnail_field(&state, &mut multipart).await?;
    let extension = media_type_extension(&content_type)?;

    let filename = format!("{}.{}", video_id, extension);
    let path = state.config.assets_root.join(&filename);
    tokio::fs::write(&path, &data).await.map_err(|e| {
        tracing::error!(error = %e, path = %path.display(), "Failed to write thumbnail");
        AppError::Internal("Could not write thumbnail".to_string())
    })?;

    tracing::info!(
        video_id = %video_id,
        size_bytes = data.len(),
        path = %path.display(),
        "Thumbnail stored"
    );

    video.thumbnail_url = Some(format!(
        "{}/assets/{}",
        state.config.asset_base_url(),
        filename
    ));
    video.updated_at = Utc::now();
    state.videos.update(&video).await?;

    Ok(Json(video))
}

/// Pull the `thumbnail` multipart field into memory, validating its declared
/// content type against the configured allowlist and its size against the
/// thumbnail ceiling.
async fn read_thumbnail_field(
    state: &AppState,
    multipart: &mut Multipart,
) -> Result<(String, Bytes), HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart form: {}", e)))?
    {
        if field.name() != Some(THUMBNAIL_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|ct| normalize_mime_type(ct).to_ascii_lowercase())
            .ok_or_else(|| {
                AppError::InvalidInput("Missing content type on thumbnail field".to_string())
            })?;
        validate_content_type(&content_type, &state.config.thumbnail_allowed_content_types)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;
        validate_file_size(data.len(), state.config.max_thumbnail_size_bytes)?;

        return Ok((content_type, data));
    }

    Err(AppError::InvalidInput("Missing 'thumbnail' form field".to_string()).into())
}
