//! # Post Shared
//!
//! Wire messages exchanged over the post RPC endpoint.
//! Identifiers travel as canonical UUID text and timestamps as RFC 3339.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
