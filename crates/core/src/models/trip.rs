use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked flight plus the user's travel context.
///
/// Trips are immutable after creation; the only field that ever changes
/// is `last_notified_at`, the at-most-once dispatch marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub user_id: String,
    pub flight_number: String,
    pub departs_at: DateTime<Utc>,
    pub airport_code: String,
    pub origin_code: Option<String>,
    pub home_address: String,
    pub last_notified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub flight_number: String,
    /// Departure time, either RFC 3339 with an offset or a wall-clock
    /// string interpreted in the destination airport's timezone.
    pub departure: String,
    pub airport_code: String,
    pub origin_code: Option<String>,
    /// Falls back to the profile's stored home address when omitted.
    pub home_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: Uuid,
    pub flight_number: String,
    pub departs_at: DateTime<Utc>,
    pub airport_code: String,
    pub origin_code: Option<String>,
    pub home_address: String,
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            flight_number: trip.flight_number,
            departs_at: trip.departs_at,
            airport_code: trip.airport_code,
            origin_code: trip.origin_code,
            home_address: trip.home_address,
            created_at: trip.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTripsResponse {
    pub trips: Vec<TripResponse>,
}

/// The minimal hand-off from the poll loop to the dispatcher. The
/// dispatcher re-fetches the trip and profile rather than trusting a
/// stale snapshot of the flight time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyPayload {
    pub trip_id: Uuid,
    pub user_id: String,
    pub home_address: String,
    pub airport_code: String,
}

impl NotifyPayload {
    pub fn for_trip(trip: &Trip) -> Self {
        Self {
            trip_id: trip.id,
            user_id: trip.user_id.clone(),
            home_address: trip.home_address.clone(),
            airport_code: trip.airport_code.clone(),
        }
    }
}
