/// Like handlers
use crate::error::Result;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePostRequest {
    pub post_id: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LikePostResponse {
    pub success: bool,
    pub post_id: Uuid,
    pub like_count: i64,
}

#[derive(Debug, Serialize)]
pub struct LikeCountResponse {
    pub post_id: Uuid,
    pub like_count: i64,
}

/// POST /api/posts/like
///
/// The returned count is read back from the store after the insert.
pub async fn like_post(
    state: web::Data<AppState>,
    req: web::Json<LikePostRequest>,
) -> Result<HttpResponse> {
    let post_id = state
        .likes
        .like_post(
            req.post_id.as_deref().unwrap_or_default(),
            req.username.as_deref().unwrap_or_default(),
        )
        .await?;

    let like_count = state.likes.get_like_count(post_id).await?;

    Ok(HttpResponse::Ok().json(LikePostResponse {
        success: true,
        post_id,
        like_count,
    }))
}

/// GET /api/posts/{post_id}/likes
pub async fn get_like_count(
    state: web::Data<AppState>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();
    let like_count = state.likes.get_like_count(post_id).await?;

    Ok(HttpResponse::Ok().json(LikeCountResponse {
        post_id,
        like_count,
    }))
}
