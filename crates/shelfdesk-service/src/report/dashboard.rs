//! Inventory KPIs for the dashboard.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shelfdesk_core::result::AppResult;
use shelfdesk_database::store::{CategoryStore, ProductStore};
use shelfdesk_entity::category::Category;
use shelfdesk_entity::product::Product;

/// Name of the bucket holding products without a category.
pub const UNCATEGORIZED_BUCKET: &str = "Uncategorized";

/// One product's stock and value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductValue {
    /// Product identifier.
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Units on hand.
    pub stock: i32,
    /// `price * stock`.
    pub value: Decimal,
}

/// Stock and value totals for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInventory {
    /// Category identifier; `None` for the uncategorized bucket.
    pub id: Option<Uuid>,
    /// Category name.
    pub name: String,
    /// Total units.
    pub stock: i64,
    /// Total value.
    pub value: Decimal,
    /// Number of products.
    pub count: usize,
}

/// Dashboard KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Number of products.
    pub total_products: usize,
    /// Sum of stock.
    pub total_stock: i64,
    /// Sum of `price * stock`.
    pub inventory_value: Decimal,
    /// Products with no stock.
    pub out_of_stock: usize,
    /// Products with `0 < stock <= threshold`.
    pub low_stock: usize,
    /// Threshold used for `low_stock`.
    pub low_stock_threshold: i32,
    /// First product with the highest value.
    pub highest_value_product: Option<ProductValue>,
    /// Totals per category, in category name order, then uncategorized.
    pub inventory_by_category: Vec<CategoryInventory>,
    /// Stock and value per product, in store order.
    pub products: Vec<ProductValue>,
}

impl DashboardReport {
    /// Build the report from a catalog snapshot.
    pub fn build(products: &[Product], categories: &[Category], threshold: i32) -> Self {
        let series: Vec<ProductValue> = products
            .iter()
            .map(|p| ProductValue {
                id: p.id,
                name: p.name.clone(),
                stock: p.stock,
                value: p.inventory_value(),
            })
            .collect();

        let mut highest: Option<&ProductValue> = None;
        for entry in &series {
            if highest.is_none_or(|best| entry.value > best.value) {
                highest = Some(entry);
            }
        }

        let mut inventory_by_category: Vec<CategoryInventory> = categories
            .iter()
            .map(|c| {
                bucket(
                    Some(c.id),
                    c.name.clone(),
                    products.iter().filter(|p| p.category_id == Some(c.id)),
                )
            })
            .collect();

        let uncategorized = bucket(
            None,
            UNCATEGORIZED_BUCKET.to_string(),
            products.iter().filter(|p| !p.is_categorized()),
        );
        if uncategorized.count > 0 {
            inventory_by_category.push(uncategorized);
        }

        Self {
            total_products: products.len(),
            total_stock: products.iter().map(|p| i64::from(p.stock)).sum(),
            inventory_value: series.iter().map(|s| s.value).sum(),
            out_of_stock: products.iter().filter(|p| p.stock == 0).count(),
            low_stock: products
                .iter()
                .filter(|p| p.stock > 0 && p.stock <= threshold)
                .count(),
            low_stock_threshold: threshold,
            highest_value_product: highest.cloned(),
            inventory_by_category,
            products: series,
        }
    }
}

fn bucket<'a>(
    id: Option<Uuid>,
    name: String,
    items: impl Iterator<Item = &'a Product>,
) -> CategoryInventory {
    items.fold(
        CategoryInventory {
            id,
            name,
            stock: 0,
            value: Decimal::ZERO,
            count: 0,
        },
        |mut acc, p| {
            acc.stock += i64::from(p.stock);
            acc.value += p.inventory_value();
            acc.count += 1;
            acc
        },
    )
}

/// Produces dashboard reports from the current catalog.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Product store.
    products: Arc<dyn ProductStore>,
    /// Category store.
    categories: Arc<dyn CategoryStore>,
    /// Low-stock threshold.
    threshold: i32,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        products: Arc<dyn ProductStore>,
        categories: Arc<dyn CategoryStore>,
        threshold: i32,
    ) -> Self {
        Self {
            products,
            categories,
            threshold,
        }
    }

    /// Build the dashboard report.
    pub async fn dashboard(&self) -> AppResult<DashboardReport> {
        let products = self.products.all().await?;
        let categories = self.categories.all().await?;
        Ok(DashboardReport::build(&products, &categories, self.threshold))
    }
}
