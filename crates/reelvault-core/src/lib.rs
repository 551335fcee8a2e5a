//! Reelvault core library
//!
//! Domain models, the unified `AppError` type, and process configuration
//! shared by the storage, processing, db, and api crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
