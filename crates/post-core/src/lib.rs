//! # Post Core
//!
//! The domain and service layer of the post service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, the storage port, and the request validation and error mapping
//! that sits between the RPC transport and storage.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{Code, ServiceError, StoreError};
pub use service::PostService;
