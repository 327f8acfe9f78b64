//! ShelfDesk Server: product catalog admin backend.
//!
//! Main entry point that loads configuration, sets up logging and starts
//! the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use shelfdesk_core::config::AppConfig;
use shelfdesk_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting ShelfDesk v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = shelfdesk_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_dir = std::env::var("SHELFDESK_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("SHELFDESK_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_dir, &env)
}

/// Initialize tracing/logging. `RUST_LOG` wins over `logging.level`.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
