/// Health handlers - readiness against PostgreSQL and process liveness
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

pub const SERVICE_NAME: &str = "feed-service";

pub struct HealthState {
    pub db_pool: PgPool,
}

/// GET /api/health
///
/// 503 when PostgreSQL does not answer `SELECT 1`.
pub async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "error": format!("PostgreSQL connection failed: {}", e),
                "service": SERVICE_NAME
            }))
        }
    }
}

/// GET /api/health/live
pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
