//! In-process fakes for the pipeline's collaborators.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use reelvault_core::models::Video;
use reelvault_core::AppError;
use reelvault_db::VideoRepository;
use reelvault_processing::{ProbeError, VideoDimensions, VideoProber};
use reelvault_storage::{ObjectStorage, StorageError, StorageResult};

/// In-memory video repository with optional write-failure injection.
pub struct FakeVideoRepository {
    videos: Mutex<HashMap<Uuid, Video>>,
    fail_updates: bool,
}

impl FakeVideoRepository {
    pub fn new(fail_updates: bool) -> Self {
        Self {
            videos: Mutex::new(HashMap::new()),
            fail_updates,
        }
    }

    pub fn insert(&self, video: Video) {
        self.videos.lock().unwrap().insert(video.id, video);
    }

    /// The currently persisted record, for before/after assertions.
    pub fn stored(&self, id: Uuid) -> Option<Video> {
        self.videos.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl VideoRepository for FakeVideoRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.videos.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, video: &Video) -> Result<(), AppError> {
        if self.fail_updates {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }
        let mut videos = self.videos.lock().unwrap();
        if !videos.contains_key(&video.id) {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }
        videos.insert(video.id, video.clone());
        Ok(())
    }
}

/// One recorded `put_object` call.
pub struct RecordedPut {
    pub key: String,
    pub content_type: String,
    pub size: usize,
}

/// Object store fake that records puts instead of uploading.
pub struct RecordingStorage {
    bucket: String,
    region: String,
    fail_puts: bool,
    pub puts: Mutex<Vec<RecordedPut>>,
}

impl RecordingStorage {
    pub fn new(bucket: &str, region: &str, fail_puts: bool) -> Self {
        Self {
            bucket: bucket.to_string(),
            region: region.to_string(),
            fail_puts,
            puts: Mutex::new(Vec::new()),
        }
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn put_object(
        &self,
        key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        if self.fail_puts {
            return Err(StorageError::UploadFailed("injected failure".to_string()));
        }
        self.puts.lock().unwrap().push(RecordedPut {
            key: key.to_string(),
            content_type: content_type.to_string(),
            size: data.len(),
        });
        Ok(self.object_url(key))
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}

/// Probe behavior for a test.
pub enum StubProbe {
    Dimensions(i64, i64),
    Fails,
}

/// Prober fake returning fixed dimensions without running a subprocess.
pub struct StubProber(pub StubProbe);

#[async_trait]
impl VideoProber for StubProber {
    async fn probe(&self, path: &Path) -> Result<VideoDimensions, ProbeError> {
        // The handler probes the staged file; it must exist on disk.
        assert!(path.exists(), "staged file missing at probe time");
        match self.0 {
            StubProbe::Dimensions(width, height) => Ok(VideoDimensions { width, height }),
            StubProbe::Fails => Err(ProbeError::Failed {
                tool: "ffprobe".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "injected failure".to_string(),
            }),
        }
    }
}
