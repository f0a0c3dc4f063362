/// Post service - feed listing, profile listing and post creation
use crate::error::{AppError, Result};
use crate::metrics::POSTS_CREATED_TOTAL;
use crate::models::{Comment, Nickname, Post, PostWithEngagement};
use crate::repository::{CommentStore, LikeStore, PostStore};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostStore>,
    comments: Arc<dyn CommentStore>,
    likes: Arc<dyn LikeStore>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostStore>,
        comments: Arc<dyn CommentStore>,
        likes: Arc<dyn LikeStore>,
    ) -> Self {
        Self {
            posts,
            comments,
            likes,
        }
    }

    /// All posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.posts.list_posts(None).await
    }

    /// Posts of one author, newest first (profile view)
    pub async fn list_posts_by_author(&self, author: &str) -> Result<Vec<Post>> {
        let author = Nickname::parse(author).ok_or_else(|| AppError::validation("Missing author"))?;
        self.posts.list_posts(Some(author.as_str())).await
    }

    /// Posts with their comments (oldest first) and like counts.
    ///
    /// Uses one batched query per relation regardless of the number of posts.
    pub async fn list_posts_with_engagement(
        &self,
        author: Option<&str>,
    ) -> Result<Vec<PostWithEngagement>> {
        let posts = match author {
            Some(author) => self.list_posts_by_author(author).await?,
            None => self.list_posts().await?,
        };

        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<Uuid> = posts.iter().map(|post| post.id).collect();
        let comments = self.comments.list_comments_for_posts(&post_ids).await?;
        let like_counts: HashMap<Uuid, i64> = self
            .likes
            .count_likes_for_posts(&post_ids)
            .await?
            .into_iter()
            .collect();

        let mut comments_by_post: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for comment in comments {
            comments_by_post
                .entry(comment.post_id)
                .or_default()
                .push(comment);
        }

        Ok(posts
            .into_iter()
            .map(|post| PostWithEngagement {
                comments: comments_by_post.remove(&post.id).unwrap_or_default(),
                like_count: like_counts.get(&post.id).copied().unwrap_or(0),
                post,
            })
            .collect())
    }

    /// Create a post; author and content are stored trimmed.
    pub async fn create_post(&self, author: &str, content: &str) -> Result<Post> {
        let author = Nickname::parse(author);
        let content = content.trim();

        let author = match author {
            Some(author) if !content.is_empty() => author,
            _ => return Err(AppError::validation("Missing author or content")),
        };

        let post = self.posts.insert_post(author.as_str(), content).await?;
        POSTS_CREATED_TOTAL.inc();

        tracing::info!(post_id = %post.id, author = %author, "Post created");

        Ok(post)
    }
}
