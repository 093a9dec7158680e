use std::error::Error;
use flightwatch_core::errors::{FlightError, FlightResult};

#[test]
fn test_flight_error_display() {
    let not_found = FlightError::NotFound("Trip not found".to_string());
    let validation = FlightError::Validation("Missing flightNumber parameter".to_string());
    let authentication = FlightError::Authentication("Missing caller identity".to_string());
    let authorization = FlightError::Authorization("Not your trip".to_string());
    let upstream = FlightError::Upstream("Routing service returned 503".to_string());
    let database = FlightError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(not_found.to_string(), "Resource not found: Trip not found");
    assert_eq!(
        validation.to_string(),
        "Validation error: Missing flightNumber parameter"
    );
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Missing caller identity"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Not your trip"
    );
    assert_eq!(
        upstream.to_string(),
        "Upstream service error: Routing service returned 503"
    );
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::other("disk on fire");
    let flight_error = FlightError::Internal(Box::new(io_error));

    assert!(flight_error.source().is_some());
    assert!(flight_error.to_string().contains("disk on fire"));
}

#[test]
fn test_flight_result() {
    let result: FlightResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: FlightResult<i32> = Err(FlightError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
