//! Reelvault API
//!
//! HTTP surface for the upload-and-classify pipeline: auth middleware,
//! upload/fetch handlers, and route/server setup.

pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod utils;
