//! Bearer-token guard for RPC calls.

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use post_core::ServiceError;
use post_core::ports::{AuthError, TokenClaims};

use crate::middleware::error::AppError;
use crate::observability::RequestId;
use crate::state::AppState;

/// The authenticated caller of an RPC.
///
/// When no token service is configured every call is accepted and `claims`
/// is `None`. Otherwise a valid `Authorization: Bearer <token>` is required.
#[derive(Debug, Clone)]
pub struct Caller {
    pub claims: Option<TokenClaims>,
}

fn authenticate(req: &HttpRequest) -> Result<Caller, AuthError> {
    let Some(token_service) = req
        .app_data::<web::Data<AppState>>()
        .and_then(|state| state.token_service.clone())
    else {
        return Ok(Caller { claims: None });
    };

    let auth_str = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))?;

    let claims = token_service.validate_token(token)?;
    Ok(Caller {
        claims: Some(claims),
    })
}

impl FromRequest for Caller {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).map_err(|e| {
            tracing::warn!(error = %e, "Rejected unauthenticated call");
            let request_id = req.extensions().get::<RequestId>().cloned();
            let error = AppError::from(ServiceError::from(e));
            match request_id {
                Some(request_id) => error.with_request_id(&request_id),
                None => error,
            }
        });

        ready(result)
    }
}
