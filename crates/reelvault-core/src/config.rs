//! Configuration module
//!
//! Process-wide, read-only configuration loaded once at startup from the
//! environment and threaded explicitly into the request state. Nothing here
//! is mutated during request handling.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_SERVER_PORT: u16 = 8080;
/// 1 GiB ceiling on an inbound video body.
const DEFAULT_MAX_VIDEO_SIZE_BYTES: usize = 1 << 30;
/// 10 MiB ceiling on an inbound thumbnail.
const DEFAULT_MAX_THUMBNAIL_SIZE_BYTES: usize = 10 << 20;
const MIN_JWT_SECRET_LEN: usize = 32;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub s3_bucket: String,
    pub s3_region: String,
    /// Custom endpoint for S3-compatible providers (e.g. MinIO).
    pub s3_endpoint: Option<String>,
    /// Local directory thumbnails are written to and served from.
    pub assets_root: PathBuf,
    /// Public base URL for served assets; defaults to the local server.
    pub asset_base_url: Option<String>,
    pub max_video_size_bytes: usize,
    pub max_thumbnail_size_bytes: usize,
    pub thumbnail_allowed_content_types: Vec<String>,
    pub ffprobe_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = env_or("SERVER_PORT", DEFAULT_SERVER_PORT)?;

        let config = Config {
            server_port,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL environment variable not set")?,
            jwt_secret: env::var("JWT_SECRET")
                .context("JWT_SECRET environment variable not set")?,
            s3_bucket: env::var("S3_BUCKET").context("S3_BUCKET environment variable not set")?,
            s3_region: env::var("S3_REGION").context("S3_REGION environment variable not set")?,
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            assets_root: env::var("ASSETS_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./assets")),
            asset_base_url: env::var("ASSET_BASE_URL").ok(),
            max_video_size_bytes: env_or("MAX_VIDEO_SIZE_BYTES", DEFAULT_MAX_VIDEO_SIZE_BYTES)?,
            max_thumbnail_size_bytes: env_or(
                "MAX_THUMBNAIL_SIZE_BYTES",
                DEFAULT_MAX_THUMBNAIL_SIZE_BYTES,
            )?,
            thumbnail_allowed_content_types: env::var("THUMBNAIL_ALLOWED_CONTENT_TYPES")
                .unwrap_or_else(|_| "image/jpeg,image/png,image/webp".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            anyhow::bail!("JWT_SECRET must be at least {} characters long", MIN_JWT_SECRET_LEN);
        }
        if self.s3_bucket.is_empty() {
            anyhow::bail!("S3_BUCKET must not be empty");
        }
        if self.s3_region.is_empty() {
            anyhow::bail!("S3_REGION must not be empty");
        }
        if self.max_video_size_bytes == 0 {
            anyhow::bail!("MAX_VIDEO_SIZE_BYTES must be greater than zero");
        }
        if self.max_thumbnail_size_bytes == 0 {
            anyhow::bail!("MAX_THUMBNAIL_SIZE_BYTES must be greater than zero");
        }
        if self.thumbnail_allowed_content_types.is_empty() {
            anyhow::bail!("THUMBNAIL_ALLOWED_CONTENT_TYPES must not be empty");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Base URL thumbnails are served under.
    pub fn asset_base_url(&self) -> String {
        self.asset_base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.server_port))
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
