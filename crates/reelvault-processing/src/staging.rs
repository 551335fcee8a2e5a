//! Request-scoped staging of an inbound upload.
//!
//! The staged file exists only between "bytes received" and "durable upload
//! attempted or abandoned". Removal is tied to Drop, so every exit path -
//! success, probe failure, upload failure, client abort, panic - releases
//! the file without per-return-site cleanup code.

use std::io;
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

use reelvault_core::AppError;

#[derive(Debug, Error)]
pub enum StagingError {
    #[error("upload exceeds the {limit} byte ceiling")]
    TooLarge { limit: u64 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<StagingError> for AppError {
    fn from(err: StagingError) -> Self {
        match err {
            StagingError::TooLarge { limit } => AppError::PayloadTooLarge(format!(
                "Upload exceeds the maximum allowed size of {} bytes",
                limit
            )),
            StagingError::Io(e) => AppError::Internal(format!("Staging IO error: {}", e)),
        }
    }
}

/// Scoped temporary file receiving the inbound byte stream.
///
/// The size ceiling is enforced per chunk, so a stream that overruns the
/// limit fails before unbounded data reaches disk.
pub struct StagedUpload {
    temp: NamedTempFile,
    file: File,
    written: u64,
    limit: u64,
}

impl StagedUpload {
    pub fn create(limit: u64) -> Result<Self, StagingError> {
        let temp = NamedTempFile::new()?;
        // Separate handle for async IO; the NamedTempFile keeps ownership of
        // the path and removes it on drop.
        let file = File::from_std(temp.reopen()?);
        Ok(Self {
            temp,
            file,
            written: 0,
            limit,
        })
    }

    /// Append one chunk of the inbound stream.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), StagingError> {
        let next = self.written + chunk.len() as u64;
        if next > self.limit {
            return Err(StagingError::TooLarge { limit: self.limit });
        }
        self.file.write_all(chunk).await?;
        self.written = next;
        Ok(())
    }

    /// Flush buffered writes and move the cursor back to the start, so later
    /// stages read the file from its beginning.
    pub async fn rewind(&mut self) -> Result<(), StagingError> {
        self.file.flush().await?;
        self.file.rewind().await?;
        Ok(())
    }

    /// Path of the staged file, for subprocess-based inspection.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Total bytes staged so far.
    pub fn len(&self) -> u64 {
        self.written
    }

    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    /// Read the full staged contents from the current cursor position.
    /// Call `rewind` first to read from the start.
    pub async fn read_to_end(&mut self) -> Result<Vec<u8>, StagingError> {
        let mut buf = Vec::with_capacity(self.written as usize);
        self.file.read_to_end(&mut buf).await?;
        Ok(buf)
    }
}
