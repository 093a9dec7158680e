use chrono::{Duration, Utc};
use flightwatch_core::models::{
    flight::{DriveEstimate, FlightStatus},
    profile::{CodeCheck, Profile, VerificationCode, DEFAULT_ARRIVAL_PREFERENCE_HOURS},
    trip::{CreateTripRequest, NotifyPayload, Trip, TripResponse},
};
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_string};
use uuid::Uuid;

fn sample_trip() -> Trip {
    Trip {
        id: Uuid::new_v4(),
        user_id: "user-1".to_string(),
        flight_number: "AA123".to_string(),
        departs_at: Utc::now() + Duration::hours(30),
        airport_code: "ORD".to_string(),
        origin_code: Some("LAX".to_string()),
        home_address: "123 Main St, Chicago, IL".to_string(),
        last_notified_at: None,
        created_at: Utc::now(),
    }
}

#[test]
fn test_trip_serialization() {
    let trip = sample_trip();

    let serialized = to_string(&trip).expect("Failed to serialize trip");
    let deserialized: Trip = from_str(&serialized).expect("Failed to deserialize trip");

    assert_eq!(deserialized.id, trip.id);
    assert_eq!(deserialized.user_id, trip.user_id);
    assert_eq!(deserialized.flight_number, trip.flight_number);
    assert_eq!(deserialized.departs_at, trip.departs_at);
    assert_eq!(deserialized.airport_code, trip.airport_code);
    assert_eq!(deserialized.home_address, trip.home_address);
    assert_eq!(deserialized.last_notified_at, trip.last_notified_at);
}

#[test]
fn test_create_trip_request_uses_camel_case() {
    let raw = json!({
        "flightNumber": "UA456",
        "departure": "2026-05-20T14:30:00",
        "airportCode": "ORD",
        "homeAddress": "456 Oak Ave"
    })
    .to_string();

    let request: CreateTripRequest = from_str(&raw).expect("Failed to deserialize request");
    assert_eq!(request.flight_number, "UA456");
    assert_eq!(request.airport_code, "ORD");
    assert_eq!(request.home_address.as_deref(), Some("456 Oak Ave"));
    assert_eq!(request.origin_code, None);
}

#[test]
fn test_notify_payload_snapshot_of_trip() {
    let trip = sample_trip();
    let payload = NotifyPayload::for_trip(&trip);

    assert_eq!(payload.trip_id, trip.id);
    assert_eq!(payload.user_id, trip.user_id);
    assert_eq!(payload.home_address, trip.home_address);
    assert_eq!(payload.airport_code, trip.airport_code);
}

#[test]
fn test_trip_response_drops_notification_marker() {
    let trip = sample_trip();
    let response = TripResponse::from(trip.clone());
    let serialized = to_string(&response).unwrap();

    assert!(serialized.contains("flightNumber"));
    assert!(!serialized.contains("lastNotifiedAt"));
    assert_eq!(response.id, trip.id);
}

#[test]
fn test_arrival_preference_defaults_without_profile() {
    assert_eq!(
        Profile::arrival_preference_or_default(None),
        DEFAULT_ARRIVAL_PREFERENCE_HOURS
    );

    let profile = Profile {
        user_id: "user-1".to_string(),
        phone_number: None,
        phone_verified: false,
        email: None,
        home_address: None,
        arrival_preference_hours: 3,
        updated_at: Utc::now(),
    };
    assert_eq!(Profile::arrival_preference_or_default(Some(&profile)), 3);
}

#[test]
fn test_verification_code_expiry_check() {
    let now = Utc::now();
    let code = VerificationCode {
        user_id: "user-1".to_string(),
        phone_number: "+15555550100".to_string(),
        code: "123456".to_string(),
        expires_at: now + Duration::minutes(5),
        created_at: now,
    };

    assert!(!code.is_expired(now));
    assert!(!code.is_expired(now + Duration::minutes(5)));
    assert!(code.is_expired(now + Duration::minutes(5) + Duration::seconds(1)));
}

#[test]
fn test_verification_code_check_ordering() {
    let now = Utc::now();
    let code = VerificationCode {
        user_id: "user-1".to_string(),
        phone_number: "+15555550100".to_string(),
        code: "123456".to_string(),
        expires_at: now + Duration::minutes(5),
        created_at: now,
    };

    assert_eq!(code.check("123456", now), CodeCheck::Valid);
    assert_eq!(code.check("654321", now), CodeCheck::Mismatch);
    // Expiry wins over the value: a correct but stale code is
    // reported expired, never invalid.
    let later = now + Duration::minutes(6);
    assert_eq!(code.check("123456", later), CodeCheck::Expired);
    assert_eq!(code.check("654321", later), CodeCheck::Expired);
}

#[test]
fn test_flight_status_serialization() {
    let status = FlightStatus {
        flight_number: "AA123".to_string(),
        airline: "American Airlines".to_string(),
        origin: "LAX".to_string(),
        destination: "ORD".to_string(),
        departure_time: "2026-05-20T14:30:00+00:00".to_string(),
        arrival_time: "2026-05-20T20:15:00+00:00".to_string(),
        status: "scheduled".to_string(),
    };

    let serialized = to_string(&status).unwrap();
    assert!(serialized.contains("flightNumber"));
    let deserialized: FlightStatus = from_str(&serialized).unwrap();
    assert_eq!(deserialized, status);
}

#[test]
fn test_drive_estimate_rounds_to_nearest_minute() {
    let estimate = DriveEstimate {
        duration_seconds: 2700,
        distance_meters: 40000,
    };
    assert_eq!(estimate.duration_minutes(), 45);

    let estimate = DriveEstimate {
        duration_seconds: 2729,
        distance_meters: 40000,
    };
    assert_eq!(estimate.duration_minutes(), 45);

    let estimate = DriveEstimate {
        duration_seconds: 2731,
        distance_meters: 40000,
    };
    assert_eq!(estimate.duration_minutes(), 46);
}
