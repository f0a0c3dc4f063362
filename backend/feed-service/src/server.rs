//! HTTP server lifecycle.

use actix_web::dev::Server;
use anyhow::{Context, Result};
use std::future::Future;

/// Drive `server` until `shutdown` resolves, then stop it gracefully.
///
/// A server that stops on its own before the shutdown signal is an error.
pub async fn run_until_shutdown<F>(server: Server, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    tokio::pin!(shutdown);

    tokio::select! {
        joined = &mut server_task => {
            tracing::error!("HTTP server stopped without a shutdown signal");
            match joined {
                Ok(Ok(())) => Err(anyhow::anyhow!("HTTP server exited unexpectedly")),
                Ok(Err(e)) => Err(e).context("HTTP server failed"),
                Err(e) => Err(e).context("HTTP server task panicked"),
            }
        }
        _ = &mut shutdown => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            match server_task.await {
                Ok(res) => res.context("HTTP server failed"),
                Err(e) => Err(e).context("HTTP server task panicked"),
            }
        }
    }
}
