//! Caller authentication port.

/// Claims carried by a validated caller token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: String,
    pub exp: i64,
}

/// Validates bearer tokens presented by RPC callers.
pub trait TokenService: Send + Sync {
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}

impl From<AuthError> for crate::error::ServiceError {
    fn from(err: AuthError) -> Self {
        crate::error::ServiceError::Unauthenticated(err.to_string())
    }
}
