use serde::{Deserialize, Serialize};

/// One flight as reported by the lookup service, already flattened from
/// the provider's nested response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightStatus {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub status: String,
}

/// Driving estimate between two addresses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveEstimate {
    pub duration_seconds: i64,
    pub distance_meters: i64,
}

impl DriveEstimate {
    pub fn duration_minutes(&self) -> i64 {
        // Round to the nearest minute, matching how the estimate is
        // shown to the user.
        (self.duration_seconds + 30) / 60
    }
}
