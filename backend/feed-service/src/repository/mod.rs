//! Store access for posts, comments and likes.
//!
//! Services only see the traits; `PostRepository`, `CommentRepository` and
//! `LikeRepository` are the PostgreSQL implementations.

pub mod comments;
pub mod likes;
pub mod posts;

pub use comments::CommentRepository;
pub use likes::LikeRepository;
pub use posts::PostRepository;

use crate::error::Result;
use crate::models::{Comment, Post};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Posts newest first, optionally restricted to one author
    async fn list_posts(&self, author: Option<&str>) -> Result<Vec<Post>>;

    /// Insert a post and return it with its server-assigned id and timestamp
    async fn insert_post(&self, author: &str, content: &str) -> Result<Post>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert_comment(&self, post_id: Uuid, username: &str, content: &str)
        -> Result<Comment>;

    /// Comments of one post, oldest first
    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>>;

    /// Comments of several posts, oldest first
    async fn list_comments_for_posts(&self, post_ids: &[Uuid]) -> Result<Vec<Comment>>;
}

#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Append a like row; never deduplicated
    async fn insert_like(&self, post_id: Uuid, username: &str) -> Result<()>;

    async fn count_likes(&self, post_id: Uuid) -> Result<i64>;

    /// Like counts per post; posts without likes are absent
    async fn count_likes_for_posts(&self, post_ids: &[Uuid]) -> Result<Vec<(Uuid, i64)>>;
}
