/// Comment service - append and list comments of a post
use super::parse_post_id;
use crate::error::{AppError, Result};
use crate::metrics::COMMENTS_CREATED_TOTAL;
use crate::models::{Comment, Nickname};
use crate::repository::CommentStore;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentStore>) -> Self {
        Self { comments }
    }

    /// Append a comment.
    ///
    /// The post is not looked up: a comment on an unknown post id is stored.
    pub async fn add_comment(&self, post_id: &str, author: &str, content: &str) -> Result<Comment> {
        let content = content.trim();
        let author = Nickname::parse(author);

        let author = match author {
            Some(author) if !post_id.trim().is_empty() && !content.is_empty() => author,
            _ => return Err(AppError::validation("Missing fields")),
        };
        let post_id = parse_post_id(post_id)?;

        let comment = self
            .comments
            .insert_comment(post_id, author.as_str(), content)
            .await?;
        COMMENTS_CREATED_TOTAL.inc();

        tracing::info!(comment_id = %comment.id, %post_id, username = %author, "Comment added");

        Ok(comment)
    }

    /// Comments of a post, oldest first
    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        self.comments.list_comments(post_id).await
    }
}
