//! Route handlers organized by domain.

pub mod audit;
pub mod auth;
pub mod category;
pub mod dashboard;
pub mod health;
pub mod notification;
pub mod product;
