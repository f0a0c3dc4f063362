use super::PostStore;
use crate::error::Result;
use crate::models::Post;
use async_trait::async_trait;
use sqlx::PgPool;

/// Repository for Post operations
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn list_posts(&self, author: Option<&str>) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author, content, created_at
            FROM posts
            WHERE $1::TEXT IS NULL OR author = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn insert_post(&self, author: &str, content: &str) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (author, content)
            VALUES ($1, $2)
            RETURNING id, author, content, created_at
            "#,
        )
        .bind(author)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }
}
