//! Error types for storage and service outcomes.

use std::fmt;

use thiserror::Error;

/// Storage-level errors reported by a [`crate::ports::PostStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Entity not found")]
    NotFound,

    #[error("{entity} not created")]
    NotCreated { entity: &'static str },

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

/// RPC status names a [`ServiceError`] maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    InvalidArgument,
    NotFound,
    Internal,
    Unauthenticated,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::NotFound => "NOT_FOUND",
            Code::Internal => "INTERNAL",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service errors - every failed operation ends in exactly one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    Unauthenticated(String),
}

impl ServiceError {
    pub fn code(&self) -> Code {
        match self {
            ServiceError::InvalidArgument(_) => Code::InvalidArgument,
            ServiceError::NotFound(_) => Code::NotFound,
            ServiceError::Internal(_) => Code::Internal,
            ServiceError::Unauthenticated(_) => Code::Unauthenticated,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceError::InvalidArgument(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::Internal(msg)
            | ServiceError::Unauthenticated(msg) => msg,
        }
    }

    pub(crate) fn invalid_uuid() -> Self {
        ServiceError::InvalidArgument("invalid UUID".to_string())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound("post not found".to_string()),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err = ServiceError::from(StoreError::NotFound);
        assert_eq!(err.code(), Code::NotFound);
        assert_eq!(err.message(), "post not found");
    }

    #[test]
    fn test_other_store_errors_map_to_internal_with_message() {
        let err = ServiceError::from(StoreError::Query("relation \"posts\" does not exist".into()));
        assert_eq!(err.code(), Code::Internal);
        assert!(err.message().contains("relation \"posts\" does not exist"));

        let err = ServiceError::from(StoreError::NotCreated { entity: "post" });
        assert_eq!(err.code(), Code::Internal);
        assert_eq!(err.message(), "post not created");
    }

    #[test]
    fn test_code_names() {
        assert_eq!(Code::InvalidArgument.to_string(), "INVALID_ARGUMENT");
        assert_eq!(Code::Unauthenticated.as_str(), "UNAUTHENTICATED");
    }
}
