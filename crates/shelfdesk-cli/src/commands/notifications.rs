//! Print the notification feed.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use shelfdesk_core::config::AppConfig;
use shelfdesk_core::error::AppError;
use shelfdesk_entity::notification::Notification;
use shelfdesk_service::{NotificationEngine, NotificationService};

use crate::output::{self, OutputFormat};

/// Arguments for the notifications command
#[derive(Debug, Args)]
pub struct NotificationsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Keep emission order instead of severity order
    #[arg(long)]
    pub unsorted: bool,
}

/// Notification display row
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    /// Severity
    severity: &'static str,
    /// Type
    #[tabled(rename = "type")]
    kind: &'static str,
    /// Title
    title: String,
    /// Message
    message: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            severity: n.severity.as_str(),
            kind: n.kind.as_str(),
            title: n.title.clone(),
            message: n.message.clone(),
        }
    }
}

/// Execute the notifications command
pub async fn execute(args: &NotificationsArgs, config: &AppConfig) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let service = NotificationService::new(
        stores.products,
        stores.categories,
        NotificationEngine::new(config.catalog.low_stock_threshold),
    );
    let feed = service.feed(!args.unsorted).await?;

    match args.format {
        OutputFormat::Json => output::print_json(&feed),
        OutputFormat::Table => {
            let rows: Vec<NotificationRow> = feed.notifications.iter().map(Into::into).collect();
            output::print_table(&rows);
            println!(
                "{} critical, {} warning, {} info",
                feed.summary.critical, feed.summary.warning, feed.summary.info
            );
        }
    }

    Ok(())
}
