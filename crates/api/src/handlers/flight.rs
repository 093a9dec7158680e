use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use flightwatch_core::{errors::FlightError, models::flight::FlightStatus};

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchQuery {
    pub flight_number: Option<String>,
    /// Parsed by hand so a bad value gets the JSON error shape instead
    /// of the extractor's plain-text rejection.
    pub date: Option<String>,
}

/// Flight lookup. Upstream failures are swallowed into an empty result
/// here; the client treats "no matches" and "provider down" the same
/// way.
#[axum::debug_handler]
pub async fn search_flights(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<FlightSearchQuery>,
) -> Result<Json<Vec<FlightStatus>>, AppError> {
    let flight_number = query
        .flight_number
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError(FlightError::Validation(
                "Missing flightNumber parameter".to_string(),
            ))
        })?;

    let date = query
        .date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|raw| {
            raw.parse::<NaiveDate>().map_err(|_| {
                AppError(FlightError::Validation(format!(
                    "Invalid date parameter: {raw}"
                )))
            })
        })
        .transpose()?;

    let results = match state.flights.search(flight_number, date).await {
        Ok(results) => results,
        Err(e) => {
            warn!("Flight lookup failed, returning empty result: {e:#}");
            Vec::new()
        }
    };

    Ok(Json(results))
}
