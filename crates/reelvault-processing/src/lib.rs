//! Reelvault processing library
//!
//! Request-scoped media handling: the staging buffer an inbound upload is
//! streamed into, and the ffprobe-backed prober that reads stream
//! dimensions off the staged file.

pub mod probe;
pub mod staging;

pub use probe::{FfprobeProber, ProbeError, VideoDimensions, VideoProber};
pub use staging::{StagedUpload, StagingError};
