/// Post handlers - feed listing and post creation
use crate::error::Result;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    /// Restrict to one author (profile view)
    pub author: Option<String>,
    /// Attach comments and like counts to every post
    #[serde(default)]
    pub with_engagement: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<String>,
    pub content: Option<String>,
}

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let author = query.author.as_deref();

    if query.with_engagement {
        let posts = state.posts.list_posts_with_engagement(author).await?;
        return Ok(HttpResponse::Ok().json(posts));
    }

    let posts = match author {
        Some(author) => state.posts.list_posts_by_author(author).await?,
        None => state.posts.list_posts().await?,
    };

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = state
        .posts
        .create_post(
            req.author.as_deref().unwrap_or_default(),
            req.content.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(HttpResponse::Created().json(post))
}
