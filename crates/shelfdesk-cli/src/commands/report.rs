//! Print the dashboard report.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use shelfdesk_core::config::AppConfig;
use shelfdesk_core::error::AppError;
use shelfdesk_service::ReportService;
use shelfdesk_service::report::CategoryInventory;

use crate::output::{self, OutputFormat};

/// Arguments for the report command
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Category inventory display row
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Category
    category: String,
    /// Products
    products: usize,
    /// Stock
    stock: i64,
    /// Value
    value: String,
}

impl From<&CategoryInventory> for CategoryRow {
    fn from(c: &CategoryInventory) -> Self {
        Self {
            category: c.name.clone(),
            products: c.count,
            stock: c.stock,
            value: c.value.round_dp(2).to_string(),
        }
    }
}

/// Execute the report command
pub async fn execute(args: &ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let service = ReportService::new(
        stores.products,
        stores.categories,
        config.catalog.low_stock_threshold,
    );
    let report = service.dashboard().await?;

    match args.format {
        OutputFormat::Json => output::print_json(&report),
        OutputFormat::Table => {
            println!("Inventory summary:");
            output::print_kv("Products", &report.total_products.to_string());
            output::print_kv("Units in stock", &report.total_stock.to_string());
            output::print_kv("Inventory value", &report.inventory_value.round_dp(2).to_string());
            output::print_kv("Out of stock", &report.out_of_stock.to_string());
            output::print_kv(
                &format!("Low stock (<= {})", report.low_stock_threshold),
                &report.low_stock.to_string(),
            );
            if let Some(top) = &report.highest_value_product {
                output::print_kv(
                    "Highest value",
                    &format!("{} ({})", top.name, top.value.round_dp(2)),
                );
            }
            println!();
            let rows: Vec<CategoryRow> = report.inventory_by_category.iter().map(Into::into).collect();
            output::print_table(&rows);
        }
    }

    Ok(())
}
