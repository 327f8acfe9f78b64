//! CLI command definitions and dispatch.

pub mod migrate;
pub mod notifications;
pub mod report;
pub mod serve;

use clap::{Parser, Subcommand};

use shelfdesk_core::config::AppConfig;
use shelfdesk_core::error::AppError;
use shelfdesk_database::Stores;

/// ShelfDesk: product catalog admin
#[derive(Debug, Parser)]
#[command(name = "shelfdesk", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Environment overlay to load (config/{env}.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Print the current notifications
    Notifications(notifications::NotificationsArgs),
    /// Print the dashboard report
    Report(report::ReportArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Notifications(args) => notifications::execute(args, &config).await,
            Commands::Report(args) => report::execute(args, &config).await,
        }
    }
}

/// Helper: open the configured record store
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    Stores::from_config(&config.database).await
}
