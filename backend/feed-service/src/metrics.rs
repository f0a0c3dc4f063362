//! Prometheus metrics for feed-service.
//!
//! Counters for feed writes and suggestion outcomes, plus the `/metrics` handler.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder,
};

lazy_static! {
    pub static ref POSTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        "feed_posts_created_total",
        "Total posts created"
    )
    .expect("failed to register feed_posts_created_total");

    pub static ref COMMENTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        "feed_comments_created_total",
        "Total comments created"
    )
    .expect("failed to register feed_comments_created_total");

    /// Like rows appended; repeated likes by one user are counted each time.
    pub static ref LIKES_RECORDED_TOTAL: IntCounter = register_int_counter!(
        "feed_likes_recorded_total",
        "Total like events recorded"
    )
    .expect("failed to register feed_likes_recorded_total");

    /// Suggestion requests by outcome (success, upstream_error).
    pub static ref SUGGESTION_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "feed_suggestion_requests_total",
        "Post-idea suggestion requests segmented by outcome",
        &["result"]
    )
    .expect("failed to register feed_suggestion_requests_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
