//! Video metadata repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use reelvault_core::models::Video;
use reelvault_core::AppError;

/// Metadata record store: get by identity, update in place.
///
/// A record's `user_id` never changes after creation; callers only set the
/// URL fields and `updated_at`. Concurrent updates for the same record are
/// not mutually excluded; the last write wins.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError>;
    async fn update(&self, video: &Video) -> Result<(), AppError>;
}

/// Postgres-backed video repository.
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, user_id, title, description, video_url, thumbnail_url,
                   created_at, updated_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    async fn update(&self, video: &Video) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET title = $2,
                description = $3,
                video_url = $4,
                thumbnail_url = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.video_url)
        .bind(&video.thumbnail_url)
        .bind(video.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }

        Ok(())
    }
}
