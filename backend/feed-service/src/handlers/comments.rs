/// Comment handlers
use crate::error::Result;
use crate::models::CommentSummary;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub post_id: Option<String>,
    pub content: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddCommentResponse {
    pub success: bool,
    pub comments: Vec<CommentSummary>,
}

/// POST /api/posts/comment
///
/// Inserts the comment, then re-reads the post's full comment list so the
/// client replaces what it shows with server state.
pub async fn add_comment(
    state: web::Data<AppState>,
    req: web::Json<AddCommentRequest>,
) -> Result<HttpResponse> {
    let comment = state
        .comments
        .add_comment(
            req.post_id.as_deref().unwrap_or_default(),
            req.username.as_deref().unwrap_or_default(),
            req.content.as_deref().unwrap_or_default(),
        )
        .await?;

    let comments = state.comments.list_comments(comment.post_id).await?;

    Ok(HttpResponse::Created().json(AddCommentResponse {
        success: true,
        comments: comments.into_iter().map(CommentSummary::from).collect(),
    }))
}

/// GET /api/posts/{post_id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let comments = state.comments.list_comments(*post_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}
