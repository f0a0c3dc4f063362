/// Feed Service Library
///
/// Backend for the Twittgram feed: posts, likes, comments and AI post ideas.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `services`: validation and business logic
/// - `repository`: store traits and their PostgreSQL implementations
/// - `llm`: completion providers for post ideas
/// - `models`: posts, comments and nicknames
/// - `state`: shared handler state
/// - `server`: HTTP server lifecycle
/// - `error`: error types and their HTTP mapping
/// - `config`: configuration management
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod metrics;
pub mod models;
pub mod repository;
pub mod server;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;

/// Embedded schema migrations for the feed tables
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
