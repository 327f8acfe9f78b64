//! Search, filter and sort for the product table.
//!
//! These run over a page that has already been cut by the list query, so
//! a filtered page may hold fewer rows than the page size even when later
//! pages still have matches. Page metadata is left untouched.

use std::cmp::Ordering;
use std::str::FromStr;

use uuid::Uuid;

use shelfdesk_core::error::AppError;
use shelfdesk_entity::product::ProductListItem;

/// Stock level below which the table flags a product as low.
pub const TABLE_LOW_STOCK_BELOW: i32 = 5;

/// Stock bucket filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockFilter {
    /// Every product.
    #[default]
    All,
    /// `0 < stock < 5`.
    Low,
    /// `stock == 0`.
    Out,
}

impl StockFilter {
    fn matches(&self, stock: i32) -> bool {
        match self {
            Self::All => true,
            Self::Low => stock > 0 && stock < TABLE_LOW_STOCK_BELOW,
            Self::Out => stock == 0,
        }
    }
}

impl FromStr for StockFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "out" => Ok(Self::Out),
            other => Err(AppError::validation(format!("Unknown stock filter '{other}'"))),
        }
    }
}

/// Category filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Products without a resolvable category.
    Uncategorized,
    /// Products in one category.
    Category(Uuid),
}

impl CategoryFilter {
    fn matches(&self, item: &ProductListItem) -> bool {
        match self {
            Self::All => true,
            Self::Uncategorized => item.category.is_none(),
            Self::Category(id) => item.category.as_ref().is_some_and(|c| c.id == *id),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(Self::All),
            "none" => Ok(Self::Uncategorized),
            other => Uuid::parse_str(other)
                .map(Self::Category)
                .map_err(|_| AppError::validation(format!("Unknown category filter '{other}'"))),
        }
    }
}

/// Sort applied within the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Name, case-insensitive.
    Name,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Lowest stock first.
    StockAsc,
    /// Highest stock first.
    StockDesc,
}

impl SortKey {
    /// Parse a sort key; `none` and the empty string mean store order.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, AppError> {
        match s {
            "" | "none" => Ok(None),
            other => other.parse().map(Some),
        }
    }

    fn compare(&self, a: &ProductListItem, b: &ProductListItem) -> Ordering {
        match self {
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::StockAsc => a.stock.cmp(&b.stock),
            Self::StockDesc => b.stock.cmp(&a.stock),
        }
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "stock-asc" => Ok(Self::StockAsc),
            "stock-desc" => Ok(Self::StockDesc),
            other => Err(AppError::validation(format!("Unknown sort key '{other}'"))),
        }
    }
}

/// Combined table view settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
    /// Stock bucket.
    pub stock: StockFilter,
    /// Category filter.
    pub category: CategoryFilter,
    /// Optional in-page sort; `None` keeps store order.
    pub sort: Option<SortKey>,
}

impl TableView {
    /// Whether the view changes anything.
    pub fn is_identity(&self) -> bool {
        self == &Self::default()
    }

    /// Whether one row passes every filter.
    pub fn matches(&self, item: &ProductListItem) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(needle) if !needle.is_empty() => {
                item.name.to_lowercase().contains(&needle.to_lowercase())
            }
            _ => true,
        };
        search_ok && self.stock.matches(item.stock) && self.category.matches(item)
    }

    /// Filter, then stably sort, one page of rows.
    pub fn apply(&self, items: Vec<ProductListItem>) -> Vec<ProductListItem> {
        let mut rows: Vec<ProductListItem> =
            items.into_iter().filter(|item| self.matches(item)).collect();
        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| sort.compare(a, b));
        }
        rows
    }
}
