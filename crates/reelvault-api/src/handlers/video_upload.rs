//! Video upload handler: the upload-and-classify pipeline.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use reelvault_core::models::{Orientation, Video};
use reelvault_core::AppError;
use reelvault_processing::StagedUpload;
use reelvault_storage::video_storage_key;

use crate::auth::{ensure_owner, UserContext};
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::normalize_mime_type;

/// The only media type accepted for video uploads.
const VIDEO_MEDIA_TYPE: &str = "video/mp4";
const VIDEO_FIELD: &str = "video";

/// `POST /api/videos/{id}/video`
///
/// Streams the inbound file into a staging buffer under the size ceiling,
/// classifies its orientation with the prober, uploads it to the object
/// store under an orientation-partitioned key, and records the resulting
/// URL on the video's metadata record. Steps run strictly in order, at most
/// once each; any failure short-circuits into an error response and the
/// staging buffer is dropped on every exit path.
pub async fn upload_video(
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

    let (content_type, mut staged) = stage_video_field(&state, &mut multipart).await?;

    let dimensions = state.prober.probe(staged.path()).await?;
    let orientation = Orientation::classify(dimensions.width, dimensions.height);

    let key = video_storage_key(orientation, &content_type)?;
    let data = staged.read_to_end().await?;
    let url = state.storage.put_object(&key, &content_type, data).await?;

    tracing::info!(
        video_id = %video_id,
        orientation = %orientation,
        key = %key,
        size_bytes = staged.len(),
        "Video upload stored"
    );

    // A failure past this point leaves the stored object orphaned; the
    // pipeline accepts that rather than attempting a compensating delete.
    video.video_url = Some(url);
    video.updated_at = Utc::now();
    state.videos.update(&video).await?;

    Ok(Json(video))
}

/// Pull the `video` multipart field and stream it into a staging buffer
/// under the configured ceiling. The staged file is rewound after the copy
/// so later stages read it from the start.
async fn stage_video_field(
    state: &AppState,
    multipart: &mut Multipart,
) -> Result<(String, StagedUpload), HttpAppError> {
    let mut uploaded: Option<(String, StagedUpload)> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart form: {}", e)))?
    {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }
        if uploaded.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple video fields are not allowed; send exactly one field named 'video'"
                    .to_string(),
            )
            .into());
        }

        let content_type = field
            .content_type()
            .map(|ct| normalize_mime_type(ct).to_ascii_lowercase())
            .ok_or_else(|| {
                AppError::InvalidInput("Missing content type on video field".to_string())
            })?;
        if content_type != VIDEO_MEDIA_TYPE {
            return Err(AppError::InvalidInput(format!(
                "Only {} uploads are accepted",
                VIDEO_MEDIA_TYPE
            ))
            .into());
        }

        let mut staged = StagedUpload::create(state.config.max_video_size_bytes as u64)?;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read upload stream: {}", e)))?
        {
            staged.write_chunk(&chunk).await?;
        }
        staged.rewind().await?;

        uploaded = Some((content_type, staged));
    }

    uploaded
        .ok_or_else(|| AppError::InvalidInput("Missing 'video' form field".to_string()).into())
}
