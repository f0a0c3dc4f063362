/// Like service - append-only like events and counts
use super::parse_post_id;
use crate::error::{AppError, Result};
use crate::metrics::LIKES_RECORDED_TOTAL;
use crate::models::Nickname;
use crate::repository::LikeStore;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct LikeService {
    likes: Arc<dyn LikeStore>,
}

impl LikeService {
    pub fn new(likes: Arc<dyn LikeStore>) -> Self {
        Self { likes }
    }

    /// Record a like and return the parsed post id.
    ///
    /// Every call appends a row, so the same user liking twice counts twice.
    pub async fn like_post(&self, post_id: &str, author: &str) -> Result<Uuid> {
        let author = match Nickname::parse(author) {
            Some(author) if !post_id.trim().is_empty() => author,
            _ => return Err(AppError::validation("Missing data")),
        };
        let post_id = parse_post_id(post_id)?;

        self.likes.insert_like(post_id, author.as_str()).await?;
        LIKES_RECORDED_TOTAL.inc();

        tracing::debug!(%post_id, username = %author, "Like recorded");

        Ok(post_id)
    }

    pub async fn get_like_count(&self, post_id: Uuid) -> Result<i64> {
        self.likes.count_likes(post_id).await
    }
}
