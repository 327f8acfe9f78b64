//! Application builder: wires router, middleware, and state into an Axum app.

use std::time::Duration;

use axum::Router;

use shelfdesk_auth::SessionCleanup;
use shelfdesk_core::config::AppConfig;
use shelfdesk_core::error::AppError;
use shelfdesk_database::Stores;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// How often expired sessions are purged.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let app = build_router(state);
    match cors {
        Some(layer) => app.layer(layer),
        None => app,
    }
}

/// Runs the ShelfDesk server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ShelfDesk server...");

    // ── Step 1: Record store ─────────────────────────────────────
    tracing::info!(provider = %config.database.provider, "Initializing record store...");
    let stores = Stores::from_config(&config.database).await?;

    // ── Step 2: Services and session gate ────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, stores)?;

    // ── Step 3: Background session cleanup ──────────────────────
    let cleanup = SessionCleanup::new(state.authenticator.sessions(), SESSION_CLEANUP_INTERVAL)
        .spawn();

    // ── Step 4: Build and start HTTP server ─────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("ShelfDesk server listening on {}", addr);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")));

    cleanup.abort();
    tracing::info!("ShelfDesk server stopped");
    result
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
