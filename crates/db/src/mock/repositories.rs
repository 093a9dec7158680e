use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbProfile, DbTrip, DbVerificationCode};

// Mock repositories for testing

mock! {
    pub TripRepo {
        pub async fn create_trip(
            &self,
            user_id: &'static str,
            flight_number: &'static str,
            departs_at: DateTime<Utc>,
            airport_code: &'static str,
            origin_code: Option<&'static str>,
            home_address: &'static str,
        ) -> eyre::Result<DbTrip>;

        pub async fn get_trip(
            &self,
            user_id: &'static str,
            id: Uuid,
        ) -> eyre::Result<Option<DbTrip>>;

        pub async fn list_trips_by_user(
            &self,
            user_id: &'static str,
        ) -> eyre::Result<Vec<DbTrip>>;

        pub async fn list_unnotified_trips(&self) -> eyre::Result<Vec<DbTrip>>;

        pub async fn claim_notification(
            &self,
            trip_id: Uuid,
            now: DateTime<Utc>,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub ProfileRepo {
        pub async fn upsert_profile(
            &self,
            user_id: &'static str,
            phone_number: Option<&'static str>,
            email: Option<&'static str>,
            home_address: Option<&'static str>,
            arrival_preference_hours: i64,
        ) -> eyre::Result<DbProfile>;

        pub async fn get_profile(
            &self,
            user_id: &'static str,
        ) -> eyre::Result<Option<DbProfile>>;

        pub async fn mark_phone_verified(
            &self,
            user_id: &'static str,
            phone_number: &'static str,
        ) -> eyre::Result<DbProfile>;
    }
}

mock! {
    pub VerificationRepo {
        pub async fn upsert_code(
            &self,
            user_id: &'static str,
            phone_number: &'static str,
            code: &'static str,
            expires_at: DateTime<Utc>,
        ) -> eyre::Result<DbVerificationCode>;

        pub async fn get_code(
            &self,
            user_id: &'static str,
            phone_number: &'static str,
        ) -> eyre::Result<Option<DbVerificationCode>>;

        pub async fn delete_code(
            &self,
            user_id: &'static str,
            phone_number: &'static str,
        ) -> eyre::Result<()>;
    }
}
