use uuid::Uuid;

use crate::error::ServiceError;

/// Parse a textual UID, failing with `InvalidArgument`.
pub fn parse_uid(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::invalid_uuid())
}

/// Like [`parse_uid`], but an empty string means "not given".
pub fn parse_optional_uid(raw: &str) -> Result<Option<Uuid>, ServiceError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_uid(raw).map(Some)
}
