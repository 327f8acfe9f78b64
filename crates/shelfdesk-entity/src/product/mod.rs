//! Product domain entities.

pub mod model;

pub use model::{CategoryRef, NewProduct, Product, ProductListItem};
