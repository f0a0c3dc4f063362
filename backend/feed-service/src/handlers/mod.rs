/// HTTP handlers for the feed API
///
/// - Posts: feed and profile listing, creation
/// - Likes: append a like, read the count
/// - Comments: append a comment, list a post's comments
/// - Suggestions: AI post ideas
/// - Health: readiness and liveness
pub mod comments;
pub mod health;
pub mod likes;
pub mod posts;
pub mod suggestions;

pub use comments::{add_comment, list_comments};
pub use health::{health_summary, liveness_check, HealthState};
pub use likes::{get_like_count, like_post};
pub use posts::{create_post, list_posts};
pub use suggestions::suggest_post_idea;

use crate::error::AppError;
use actix_web::web;

/// Body extraction errors (missing body, wrong content type, invalid JSON)
/// become `MalformedRequest` instead of actix's plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::MalformedRequest("Invalid request body".to_string()).into()
    })
}

/// Unparsable path identifiers are reported as 400 rather than 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected path parameter");
        AppError::MalformedRequest("Invalid postId".to_string()).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected query string");
        AppError::MalformedRequest("Invalid query string".to_string()).into()
    })
}

/// Register the `/api` routes and extractor configuration.
///
/// `/api/health` expects a `web::Data<HealthState>` registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                .service(
                    web::scope("/posts")
                        .service(
                            web::resource("")
                                .route(web::get().to(list_posts))
                                .route(web::post().to(create_post)),
                        )
                        .route("/like", web::post().to(like_post))
                        .route("/comment", web::post().to(add_comment))
                        .route("/{post_id}/comments", web::get().to(list_comments))
                        .route("/{post_id}/likes", web::get().to(get_like_count)),
                )
                .route("/gpt-post-suggestion", web::post().to(suggest_post_idea))
                .route("/health", web::get().to(health_summary))
                .route("/health/live", web::get().to(liveness_check)),
        );
}
