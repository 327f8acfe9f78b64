//! Catalog rule configuration.

use serde::{Deserialize, Serialize};

use crate::types::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Thresholds and list defaults for the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// A product with `stock <= low_stock_threshold` raises a low-stock alert.
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: i32,
    /// Page size used when a list request omits `limit`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
}

impl CatalogConfig {
    /// The default page size clamped into the accepted range.
    pub fn page_size(&self) -> u64 {
        self.default_page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_threshold(),
            default_page_size: default_page_size(),
        }
    }
}

fn default_threshold() -> i32 {
    5
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
