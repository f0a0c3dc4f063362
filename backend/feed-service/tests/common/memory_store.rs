use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use feed_service::error::{AppError, Result};
use feed_service::models::{Comment, Post};
use feed_service::repository::{CommentStore, LikeStore, PostStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct LikeRow {
    pub post_id: Uuid,
    pub username: String,
}

/// In-memory implementation of all three stores.
///
/// Timestamps advance by one millisecond per insert so ordering is
/// deterministic. `fail_with` makes every subsequent call return a store error.
pub struct InMemoryStore {
    posts: Arc<Mutex<Vec<Post>>>,
    comments: Arc<Mutex<Vec<Comment>>>,
    likes: Arc<Mutex<Vec<LikeRow>>>,
    clock: Arc<Mutex<DateTime<Utc>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            comments: Arc::new(Mutex::new(Vec::new())),
            likes: Arc::new(Mutex::new(Vec::new())),
            clock: Arc::new(Mutex::new(Utc::now())),
            failure: Arc::new(Mutex::new(None)),
        })
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    pub fn like_rows(&self) -> Vec<LikeRow> {
        self.likes.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::Store(message.clone())),
            None => Ok(()),
        }
    }

    fn tick(&self) -> DateTime<Utc> {
        let mut clock = self.clock.lock().unwrap();
        *clock = *clock + Duration::milliseconds(1);
        *clock
    }
}

#[async_trait]
impl PostStore for InMemoryStore {
    async fn list_posts(&self, author: Option<&str>) -> Result<Vec<Post>> {
        self.check()?;
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|post| author.map_or(true, |author| post.author == author))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn insert_post(&self, author: &str, content: &str) -> Result<Post> {
        self.check()?;
        let post = Post {
            id: Uuid::new_v4(),
            author: author.to_string(),
            content: content.to_string(),
            created_at: self.tick(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }
}

#[async_trait]
impl CommentStore for InMemoryStore {
    async fn insert_comment(
        &self,
        post_id: Uuid,
        username: &str,
        content: &str,
    ) -> Result<Comment> {
        self.check()?;
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            username: username.to_string(),
            content: content.to_string(),
            created_at: self.tick(),
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        self.list_comments_for_posts(&[post_id]).await
    }

    async fn list_comments_for_posts(&self, post_ids: &[Uuid]) -> Result<Vec<Comment>> {
        self.check()?;
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| post_ids.contains(&comment.post_id))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }
}

#[async_trait]
impl LikeStore for InMemoryStore {
    async fn insert_like(&self, post_id: Uuid, username: &str) -> Result<()> {
        self.check()?;
        self.likes.lock().unwrap().push(LikeRow {
            post_id,
            username: username.to_string(),
        });
        Ok(())
    }

    async fn count_likes(&self, post_id: Uuid) -> Result<i64> {
        self.check()?;
        Ok(self
            .likes
            .lock()
            .unwrap()
            .iter()
            .filter(|like| like.post_id == post_id)
            .count() as i64)
    }

    async fn count_likes_for_posts(&self, post_ids: &[Uuid]) -> Result<Vec<(Uuid, i64)>> {
        self.check()?;
        let mut counts: HashMap<Uuid, i64> = HashMap::new();
        for like in self.likes.lock().unwrap().iter() {
            if post_ids.contains(&like.post_id) {
                *counts.entry(like.post_id).or_default() += 1;
            }
        }
        Ok(counts.into_iter().collect())
    }
}
