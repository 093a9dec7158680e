//! # Caller Identity Extraction
//!
//! Flightwatch performs no authentication of its own: a gateway
//! authorizer in front of the service validates the caller and injects
//! the subject claim as the `x-user-id` request header. This extractor
//! surfaces that identity to handlers and rejects requests where the
//! header is missing, which only happens when the service is reached
//! without the gateway.

use axum::{extract::FromRequestParts, http::request::Parts};

use flightwatch_core::errors::FlightError;

use crate::middleware::error_handling::AppError;

/// Header populated by the upstream authorizer.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller's user identifier.
///
/// # Example
///
/// ```ignore
/// async fn handler(AuthUser(user_id): AuthUser) -> Json<Response> {
///     // user_id is the authorizer-verified subject
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| AuthUser(value.to_string()))
            .ok_or_else(|| {
                AppError(FlightError::Authentication(
                    "Missing caller identity".to_string(),
                ))
            })
    }
}
