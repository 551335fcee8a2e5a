//! Media probing via an external ffprobe subprocess.
//!
//! The prober is an I/O boundary, not a library call: it is abstracted
//! behind the one-method `VideoProber` trait so handlers can be tested
//! without invoking a real binary.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::process::Command;

use reelvault_core::AppError;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("unparseable probe output: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ProbeError> for AppError {
    fn from(err: ProbeError) -> Self {
        AppError::Probe(err.to_string())
    }
}

/// Dimensions of the probed video stream.
///
/// When the prober finds no video-typed stream both fields stay zero; the
/// orientation classifier handles that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoDimensions {
    pub width: i64,
    pub height: i64,
}

/// Black-box media analyzer.
#[async_trait]
pub trait VideoProber: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<VideoDimensions, ProbeError>;
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_type: Option<String>,
    #[serde(default)]
    width: i64,
    #[serde(default)]
    height: i64,
}

/// Reduce a probe document to dimensions, keeping the last video-typed
/// stream found.
fn parse_dimensions(stdout: &[u8]) -> Result<VideoDimensions, ProbeError> {
    let output: ProbeOutput = serde_json::from_slice(stdout)?;

    let mut dimensions = VideoDimensions {
        width: 0,
        height: 0,
    };
    for stream in &output.streams {
        if stream.codec_type.as_deref() == Some("video") {
            dimensions = VideoDimensions {
                width: stream.width,
                height: stream.height,
            };
        }
    }

    Ok(dimensions)
}

/// ffprobe-backed prober.
pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: String) -> Self {
        Self { ffprobe_path }
    }

    /// Run ffprobe against a staged file and reduce its stream list to
    /// dimensions.
    #[tracing::instrument(skip(self), fields(ffprobe_path = %self.ffprobe_path))]
    async fn probe_path(&self, path: &Path) -> Result<VideoDimensions, ProbeError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .output()
            .await
            .map_err(|e| ProbeError::Spawn {
                tool: self.ffprobe_path.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                tool: self.ffprobe_path.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let dimensions = parse_dimensions(&output.stdout)?;

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            width = dimensions.width,
            height = dimensions.height,
            "Video probe completed"
        );

        Ok(dimensions)
    }
}

#[async_trait]
impl VideoProber for FfprobeProber {
    async fn probe(&self, path: &Path) -> Result<VideoDimensions, ProbeError> {
        self.probe_path(path).await
    }
}
