use axum::{extract::State, Json};
use std::sync::Arc;

use flightwatch_core::{
    errors::FlightError,
    models::trip::{CreateTripRequest, ListTripsResponse, TripResponse},
    schedule,
};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn create_trip(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateTripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    if payload.flight_number.trim().is_empty() {
        return Err(AppError(FlightError::Validation(
            "flightNumber is required".to_string(),
        )));
    }
    if payload.airport_code.trim().is_empty() {
        return Err(AppError(FlightError::Validation(
            "airportCode is required".to_string(),
        )));
    }

    // One timezone convention throughout: offset strings are absolute,
    // wall-clock strings resolve in the destination airport's zone.
    let departs_at =
        schedule::parse_departure(&state.airports, &payload.departure, &payload.airport_code)?;

    // A trip needs a starting address; fall back to the profile's
    // stored home address when the request omits one.
    let home_address = match payload.home_address {
        Some(address) if !address.trim().is_empty() => address,
        _ => {
            let profile =
                flightwatch_db::repositories::profile::get_profile(&state.db_pool, &user_id)
                    .await
                    .map_err(FlightError::Database)?;
            profile.and_then(|p| p.home_address).ok_or_else(|| {
                FlightError::Validation(
                    "homeAddress is required when the profile has no default".to_string(),
                )
            })?
        }
    };

    let db_trip = flightwatch_db::repositories::trip::create_trip(
        &state.db_pool,
        &user_id,
        payload.flight_number.trim(),
        departs_at,
        &payload.airport_code.trim().to_uppercase(),
        payload.origin_code.as_deref(),
        &home_address,
    )
    .await
    .map_err(FlightError::Database)?;

    Ok(Json(TripResponse::from(
        flightwatch_core::models::trip::Trip::from(db_trip),
    )))
}

#[axum::debug_handler]
pub async fn list_trips(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ListTripsResponse>, AppError> {
    let trips = flightwatch_db::repositories::trip::list_trips_by_user(&state.db_pool, &user_id)
        .await
        .map_err(FlightError::Database)?;

    let response = ListTripsResponse {
        trips: trips
            .into_iter()
            .map(|trip| TripResponse::from(flightwatch_core::models::trip::Trip::from(trip)))
            .collect(),
    };

    Ok(Json(response))
}
