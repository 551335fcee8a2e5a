//! Common utilities for file upload handlers

use reelvault_core::AppError;

/// Normalize MIME type by stripping parameters
/// (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
pub fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against an allowlist. Compares the normalized MIME
/// type only (no parameter bypass).
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types
        .iter()
        .any(|ct| normalized == ct.to_lowercase())
    {
        return Err(AppError::InvalidInput(format!(
            "Invalid content type. Allowed types: {}",
            allowed_types.join(", ")
        )));
    }
    Ok(())
}

/// Validate a buffered upload's size.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} bytes",
            max_size
        )));
    }
    Ok(())
}

/// File extension for a declared media type: the substring after `/`.
pub fn media_type_extension(media_type: &str) -> Result<&str, AppError> {
    media_type
        .split_once('/')
        .map(|(_, subtype)| subtype)
        .filter(|subtype| !subtype.is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid media type: {}", media_type)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mime_type() {
        assert_eq!(normalize_mime_type("video/mp4"), "video/mp4");
        assert_eq!(normalize_mime_type("video/mp4; codecs=avc1"), "video/mp4");
        assert_eq!(normalize_mime_type(" image/png ; q=1"), "image/png");
    }

    #[test]
    fn test_validate_content_type() {
        let allowed = vec!["image/jpeg".to_string(), "image/png".to_string()];
        assert!(validate_content_type("image/png", &allowed).is_ok());
        assert!(validate_content_type("IMAGE/PNG; q=0.5", &allowed).is_ok());
        assert!(validate_content_type("application/pdf", &allowed).is_err());
    }

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size(10, 10).is_ok());
        assert!(matches!(
            validate_file_size(11, 10),
            Err(AppError::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn test_media_type_extension() {
        assert_eq!(media_type_extension("video/mp4").unwrap(), "mp4");
        assert_eq!(media_type_extension("image/jpeg").unwrap(), "jpeg");
        assert!(media_type_extension("mp4").is_err());
        assert!(media_type_extension("video/").is_err());
    }
}
