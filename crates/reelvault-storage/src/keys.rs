//! Storage key derivation for accepted uploads.
//!
//! Key format: `{category}/{token}.{extension}`. The category partitions
//! objects by orientation; the token makes every key unique and
//! unpredictable.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use reelvault_core::models::Orientation;

use crate::traits::{StorageError, StorageResult};

/// Raw token length in bytes; 32 CSPRNG bytes make collisions practically
/// impossible and the encoded token 43 characters long.
const TOKEN_LEN: usize = 32;

/// Derive a fresh storage key for a classified upload.
///
/// The extension is taken from the declared media type (the part after
/// `/`), not sniffed from content. Each call draws a new random token, so
/// repeated uploads of identical bytes still produce distinct keys.
pub fn video_storage_key(orientation: Orientation, media_type: &str) -> StorageResult<String> {
    let extension = media_type
        .split_once('/')
        .map(|(_, subtype)| subtype)
        .filter(|subtype| !subtype.is_empty())
        .ok_or_else(|| {
            StorageError::InvalidKey(format!("media type has no subtype: {}", media_type))
        })?;

    let mut token = [0u8; TOKEN_LEN];
    rand::rng().fill_bytes(&mut token);

    Ok(format!(
        "{}/{}.{}",
        orientation,
        URL_SAFE_NO_PAD.encode(token),
        extension
    ))
}
