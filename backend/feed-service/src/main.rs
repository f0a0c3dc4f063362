use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use db_pool::env_utils::parse_env_with_default;
use db_pool::{create_pool, DbConfig};
use feed_service::handlers::{self, health::SERVICE_NAME, HealthState};
use feed_service::llm::{CompletionProvider, OpenAIProvider};
use feed_service::{metrics, server, AppState, Config, MIGRATOR};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// `feed-service healthcheck` probes the liveness endpoint for container health checks.
async fn run_healthcheck(port: u16) -> Result<()> {
    let url = format!("http://127.0.0.1:{}/api/health/live", port);
    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("healthcheck request to {} failed", url))?;

    if !resp.status().is_success() {
        anyhow::bail!("healthcheck HTTP status: {}", resp.status());
    }
    Ok(())
}

fn build_cors(config: &Config) -> Cors {
    let mut cors = Cors::default();
    for origin in config.cors.origins() {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    res = tokio::signal::ctrl_c() => {
                        if let Err(e) = res {
                            tracing::warn!(error = %e, "Ctrl+C handler unavailable");
                        }
                    },
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl+C only");
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!(error = %e, "Ctrl+C handler unavailable");
                }
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl+C handler unavailable");
        }
    }
}

/// Feed Service
///
/// # Routes
///
/// - `GET/POST /api/posts` - feed and profile listing, post creation
/// - `POST /api/posts/like`, `GET /api/posts/{post_id}/likes` - likes
/// - `POST /api/posts/comment`, `GET /api/posts/{post_id}/comments` - comments
/// - `POST /api/gpt-post-suggestion` - AI post ideas
/// - `/api/health`, `/api/health/live`, `/metrics`
#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        return run_healthcheck(parse_env_with_default("PORT", 8080)).await;
    }

    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing();

    tracing::info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let db_cfg = DbConfig::from_env(SERVICE_NAME).map_err(anyhow::Error::msg)?;
    db_cfg.log_config();
    let db_pool = create_pool(db_cfg)
        .await
        .context("Failed to create database pool")?;

    if config.run_migrations {
        MIGRATOR
            .run(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");
    }

    if config.completion.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; post idea suggestions will fail upstream");
    }
    let completion: Arc<dyn CompletionProvider> =
        Arc::new(OpenAIProvider::from_config(&config.completion));

    let app_state = web::Data::new(AppState::with_pool(db_pool.clone(), completion));
    let health_state = web::Data::new(HealthState {
        db_pool: db_pool.clone(),
    });

    let bind_address = config.app.bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(health_state.clone())
            .wrap(build_cors(&server_config))
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .configure(handlers::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .disable_signals()
    .run();

    let result = server::run_until_shutdown(server, shutdown_signal()).await;

    db_pool.close().await;
    tracing::info!("{} shut down", SERVICE_NAME);

    result
}
