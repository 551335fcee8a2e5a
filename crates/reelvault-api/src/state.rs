//! Application state threaded into handlers.
//!
//! Everything here is immutable per-process: configuration plus the three
//! collaborators the pipeline talks to, each behind a trait so tests can
//! swap in fakes.

use std::sync::Arc;

use reelvault_core::Config;
use reelvault_db::VideoRepository;
use reelvault_processing::VideoProber;
use reelvault_storage::ObjectStorage;

pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoRepository>,
    pub storage: Arc<dyn ObjectStorage>,
    pub prober: Arc<dyn VideoProber>,
}
