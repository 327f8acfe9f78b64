//! Request and response bodies that are not domain models.

pub mod request;
pub mod response;
