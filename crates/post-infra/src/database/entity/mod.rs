//! SeaORM entities backing the post store.

pub mod category;
pub mod post;
