//! Reelvault storage library
//!
//! Durable object storage for accepted uploads: the `ObjectStorage` trait,
//! the S3 backend, and orientation-partitioned storage-key derivation.
//!
//! # Storage key format
//!
//! Video objects are keyed `{category}/{token}.{extension}` where `category`
//! is the orientation classification (`landscape`, `portrait`, `other`),
//! `token` is 32 bytes from a CSPRNG encoded base64 URL-safe without
//! padding, and `extension` comes from the declared media type. Keys are
//! never reused; key generation is centralized in the `keys` module.

pub mod keys;
pub mod s3;
pub mod traits;

pub use keys::video_storage_key;
pub use s3::S3Storage;
pub use traits::{ObjectStorage, StorageError, StorageResult};
