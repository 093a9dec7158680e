//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error responses so
//! every endpoint fails the same way: a status code and a body of
//! `{"error": message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use flightwatch_core::errors::FlightError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `FlightError` instances and
/// implements `IntoResponse`, which lets handlers return
/// `Result<Json<T>, AppError>` and use `?` throughout.
#[derive(Debug)]
pub struct AppError(pub FlightError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            FlightError::NotFound(_) => StatusCode::NOT_FOUND,
            FlightError::Validation(_) => StatusCode::BAD_REQUEST,
            FlightError::Authentication(_) => StatusCode::UNAUTHORIZED,
            FlightError::Authorization(_) => StatusCode::FORBIDDEN,
            FlightError::Upstream(_) => StatusCode::BAD_GATEWAY,
            FlightError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FlightError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `Result<T, FlightError>`.
impl From<FlightError> for AppError {
    fn from(err: FlightError) -> Self {
        AppError(err)
    }
}

/// Allows `?` on repository calls returning `Result<T, eyre::Report>`;
/// storage failures surface as 500s.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(FlightError::Database(err))
    }
}
