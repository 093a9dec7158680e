use chrono::{DateTime, Utc};
use flightwatch_core::models::{profile::Profile, profile::VerificationCode, trip::Trip};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTrip {
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

impl From<DbTrip> for Trip {
    fn from(row: DbTrip) -> Self {
        Trip {
            id: row.id,
            user_id: row.user_id,
            flight_number: row.flight_number,
            departs_at: row.departs_at,
            airport_code: row.airport_code,
            origin_code: row.origin_code,
            home_address: row.home_address,
            last_notified_at: row.last_notified_at,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfile {
    pub user_id: String,
    pub phone_number: Option<String>,
    pub phone_verified: bool,
    pub email: Option<String>,
    pub home_address: Option<String>,
    pub arrival_preference_hours: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<DbProfile> for Profile {
    fn from(row: DbProfile) -> Self {
        Profile {
            user_id: row.user_id,
            phone_number: row.phone_number,
            phone_verified: row.phone_verified,
            email: row.email,
            home_address: row.home_address,
            arrival_preference_hours: row.arrival_preference_hours,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbVerificationCode {
    pub user_id: String,
    pub phone_number: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<DbVerificationCode> for VerificationCode {
    fn from(row: DbVerificationCode) -> Self {
        VerificationCode {
            user_id: row.user_id,
            phone_number: row.phone_number,
            code: row.code,
            expires_at: row.expires_at,
            created_at: row.created_at,
        }
    }
}
