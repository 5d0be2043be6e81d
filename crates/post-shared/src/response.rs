//! Error body returned by the RPC endpoint (RFC 7807 with an RPC status code).

use serde::{Deserialize, Serialize};

/// RFC 7807 Problem Details, extended with the RPC status name.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// RPC status name, e.g. `NOT_FOUND`.
    pub code: String,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request ID for debugging purposes.
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            code: code.into(),
            detail: None,
            request_id: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_problem_type_and_code() {
        let body = ErrorResponse::new(404, "Not Found", "NOT_FOUND").with_detail("post not found");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["detail"], "post not found");
        assert!(json.get("requestId").is_none());
    }

    #[test]
    fn test_request_id_is_camel_case() {
        let body = ErrorResponse::new(400, "Bad Request", "INVALID_ARGUMENT").with_request_id("req-7");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["requestId"], "req-7");
        assert!(json.get("request_id").is_none());
    }
}
