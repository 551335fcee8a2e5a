//! Reelvault database library
//!
//! The video metadata record store. The `VideoRepository` trait is the seam
//! the upload pipeline reads and writes through; `PgVideoRepository` is the
//! Postgres implementation.

pub mod videos;

pub use videos::{PgVideoRepository, VideoRepository};
