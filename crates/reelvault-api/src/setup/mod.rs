//! Application setup: database, routes, server, telemetry.

pub mod database;
pub mod routes;
pub mod server;
pub mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;

use reelvault_core::Config;
use reelvault_db::{PgVideoRepository, VideoRepository};
use reelvault_processing::{FfprobeProber, VideoProber};
use reelvault_storage::{ObjectStorage, S3Storage};

use crate::state::AppState;

/// Wire up the application: connect to the database, run migrations, build
/// the storage and prober collaborators, and assemble the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let pool = database::connect(&config).await?;
    database::run_migrations(&pool).await?;

    tokio::fs::create_dir_all(&config.assets_root)
        .await
        .with_context(|| {
            format!(
                "Failed to create assets directory {}",
                config.assets_root.display()
            )
        })?;

    let storage: Arc<dyn ObjectStorage> = Arc::new(
        S3Storage::new(
            config.s3_bucket.clone(),
            config.s3_region.clone(),
            config.s3_endpoint.clone(),
        )
        .map_err(|e| anyhow::anyhow!("Failed to initialize S3 storage: {}", e))?,
    );
    let prober: Arc<dyn VideoProber> = Arc::new(FfprobeProber::new(config.ffprobe_path.clone()));
    let videos: Arc<dyn VideoRepository> = Arc::new(PgVideoRepository::new(pool));

    let state = Arc::new(AppState {
        config: config.clone(),
        videos,
        storage,
        prober,
    });

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
