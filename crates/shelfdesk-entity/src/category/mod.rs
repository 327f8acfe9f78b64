//! Category domain entities.

pub mod model;
pub mod slug;

pub use model::{Category, NewCategory};
pub use slug::slugify;
