/// Business logic layer
///
/// Services validate caller input and delegate to the stores or the
/// completion provider. They hold no state beyond shared handles.
pub mod comments;
pub mod likes;
pub mod posts;
pub mod suggestions;

pub use comments::CommentService;
pub use likes::LikeService;
pub use posts::PostService;
pub use suggestions::SuggestionService;

use crate::error::{AppError, Result};
use uuid::Uuid;

/// Parse a caller-supplied post identifier.
pub(crate) fn parse_post_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::validation("Invalid postId"))
}
