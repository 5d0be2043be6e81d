//! Service layer - validates RPC requests, calls the store, maps outcomes.

mod ids;
mod post_service;

pub use ids::{parse_optional_uid, parse_uid};
pub use post_service::PostService;
