pub mod jwt;
pub mod middleware;
pub mod models;

pub use models::UserContext;

use reelvault_core::models::Video;
use reelvault_core::AppError;
use uuid::Uuid;

/// Ownership check shared by the video and thumbnail handlers.
///
/// Pure verification: the caller either owns the record or the request is
/// rejected before any staging or storage work happens.
pub fn ensure_owner(video: &Video, user_id: Uuid) -> Result<(), AppError> {
    if !video.is_owned_by(user_id) {
        return Err(AppError::Forbidden(
            "You do not own this video".to_string(),
        ));
    }
    Ok(())
}
