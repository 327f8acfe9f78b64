//! Product CRUD and the product table view.

pub mod service;
pub mod table;

pub use service::ProductService;
pub use table::{CategoryFilter, SortKey, StockFilter, TableView};
