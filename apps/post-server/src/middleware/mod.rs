//! Middleware and extractors shared by the RPC handlers.

pub mod auth;
pub mod error;

pub use auth::Caller;
pub use error::{AppError, AppResult, RpcResultExt};
