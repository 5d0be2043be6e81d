//! Error handling - maps service outcomes onto RFC 7807 responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use post_core::{Code, ServiceError};
use post_shared::ErrorResponse;
use std::fmt;

use crate::observability::RequestId;

/// A failed RPC, ready to be rendered.
#[derive(Debug)]
pub struct AppError {
    error: ServiceError,
    request_id: Option<String>,
}

impl AppError {
    pub fn with_request_id(mut self, request_id: &RequestId) -> Self {
        self.request_id = Some(request_id.as_str().to_string());
        self
    }
}

impl From<ServiceError> for AppError {
    fn from(error: ServiceError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.code(), self.error.message())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self.error.code() {
            Code::InvalidArgument => StatusCode::BAD_REQUEST,
            Code::Unauthenticated => StatusCode::UNAUTHORIZED,
            Code::NotFound => StatusCode::NOT_FOUND,
            Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let code = self.error.code();

        if code == Code::Internal {
            tracing::error!(
                request_id = self.request_id.as_deref().unwrap_or("unknown"),
                "Internal error: {}",
                self.error.message()
            );
        }

        let mut body = ErrorResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
            code.as_str(),
        )
        .with_detail(self.error.message());
        if let Some(request_id) = &self.request_id {
            body = body.with_request_id(request_id.clone());
        }

        HttpResponse::build(status).json(body)
    }
}

/// Attach the caller's request ID to a failed service call.
pub trait RpcResultExt<T> {
    fn for_request(self, request_id: &RequestId) -> AppResult<T>;
}

impl<T> RpcResultExt<T> for Result<T, ServiceError> {
    fn for_request(self, request_id: &RequestId) -> AppResult<T> {
        self.map_err(|e| AppError::from(e).with_request_id(request_id))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServiceError::InvalidArgument("invalid UUID".into()), 400),
            (ServiceError::Unauthenticated("invalid token".into()), 401),
            (ServiceError::NotFound("post not found".into()), 404),
            (ServiceError::Internal("db down".into()), 500),
        ];

        for (error, status) in cases {
            assert_eq!(AppError::from(error).status_code().as_u16(), status);
        }
    }
}
