//! Test helpers: build AppState and router with in-process fakes.
//!
//! Run from workspace root: `cargo test -p reelvault-api --test videos_test`
//! or `cargo test -p reelvault-api`.

pub mod auth;
pub mod fakes;

use std::path::PathBuf;
use std::sync::Arc;

use axum_test::TestServer;
use chrono::Utc;
use tempfile::TempDir;
use uuid::Uuid;

use reelvault_api::constants;
use reelvault_api::setup::routes::setup_routes;
use reelvault_api::state::AppState;
use reelvault_core::models::Video;
use reelvault_core::Config;

use fakes::{FakeVideoRepository, RecordingStorage, StubProbe, StubProber};

pub const TEST_BUCKET: &str = "reelvault-test";
pub const TEST_REGION: &str = "us-east-1";

/// API path prefix for tests (e.g. `/api`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Knobs for fault injection and sizing in a test application.
pub struct TestOptions {
    pub probe: StubProbe,
    pub storage_fails: bool,
    pub update_fails: bool,
    pub max_video_size_bytes: usize,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            probe: StubProbe::Dimensions(1920, 1080),
            storage_fails: false,
            update_fails: false,
            max_video_size_bytes: 1 << 30,
        }
    }
}

/// Test application: server plus handles on the fakes for assertions.
pub struct TestApp {
    pub server: TestServer,
    pub videos: Arc<FakeVideoRepository>,
    pub storage: Arc<RecordingStorage>,
    pub assets_root: PathBuf,
    _assets_dir: TempDir,
}

pub fn setup_test_app(options: TestOptions) -> TestApp {
    let assets_dir = tempfile::tempdir().expect("Failed to create assets directory");

    let config = Config {
        server_port: 8080,
        environment: "test".to_string(),
        database_url: "postgresql://unused-in-tests".to_string(),
        jwt_secret: auth::TEST_JWT_SECRET.to_string(),
        s3_bucket: TEST_BUCKET.to_string(),
        s3_region: TEST_REGION.to_string(),
        s3_endpoint: None,
        assets_root: assets_dir.path().to_path_buf(),
        asset_base_url: None,
        max_video_size_bytes: options.max_video_size_bytes,
        max_thumbnail_size_bytes: 10 << 20,
        thumbnail_allowed_content_types: vec![
            "image/jpeg".to_string(),
            "image/png".to_string(),
            "image/webp".to_string(),
        ],
        ffprobe_path: "ffprobe".to_string(),
    };

    let videos = Arc::new(FakeVideoRepository::new(options.update_fails));
    let storage = Arc::new(RecordingStorage::new(
        TEST_BUCKET,
        TEST_REGION,
        options.storage_fails,
    ));

    let state = Arc::new(AppState {
        config: config.clone(),
        videos: videos.clone(),
        storage: storage.clone(),
        prober: Arc::new(StubProber(options.probe)),
    });

    let server = TestServer::new(setup_routes(&config, state)).expect("Failed to build server");

    TestApp {
        server,
        videos,
        storage,
        assets_root: assets_dir.path().to_path_buf(),
        _assets_dir: assets_dir,
    }
}

/// Insert a fresh metadata record owned by `owner` and return it.
pub fn seed_video(app: &TestApp, owner: Uuid) -> Video {
    let video = Video {
        id: Uuid::new_v4(),
        user_id: owner,
        title: "test video".to_string(),
        description: Some("seeded by tests".to_string()),
        video_url: None,
        thumbnail_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    app.videos.insert(video.clone());
    video
}
