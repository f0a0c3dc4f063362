/// Error types for feed-service
///
/// Every handler error is rendered as `{"error": ..., "status": ...}`.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Message returned for any completion-service failure.
pub const SUGGESTION_FAILED: &str = "Failed to get a post idea.";

/// Result type for feed-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// A required field is missing, blank or not a valid identifier
    #[error("{0}")]
    Validation(String),

    /// The store rejected an insert/select; the store's message is passed through
    #[error("{0}")]
    Store(String),

    /// The completion service failed or returned nothing usable
    #[error("{0}")]
    Upstream(String),

    /// Body missing, not JSON, or an unparsable path parameter
    #[error("{0}")]
    MalformedRequest(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn upstream() -> Self {
        AppError::Upstream(SUGGESTION_FAILED.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(err.to_string())
    }
}
