use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hours before departure the user wants to be at the airport when no
/// profile exists or the profile never set a preference.
pub const DEFAULT_ARRIVAL_PREFERENCE_HOURS: i64 = 2;

/// Largest arrival preference a profile update will accept. Keeps the
/// notification window arithmetic far away from Duration's limits.
pub const MAX_ARRIVAL_PREFERENCE_HOURS: i64 = 24;

/// Verification codes are good for five minutes from issuance.
pub const VERIFICATION_CODE_TTL_MINUTES: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub phone_number: Option<String>,
    pub phone_verified: bool,
    pub email: Option<String>,
    pub home_address: Option<String>,
    pub arrival_preference_hours: i64,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Arrival preference for an optional profile; absence is a
    /// default, not an error.
    pub fn arrival_preference_or_default(profile: Option<&Profile>) -> i64 {
        profile
            .map(|p| p.arrival_preference_hours)
            .unwrap_or(DEFAULT_ARRIVAL_PREFERENCE_HOURS)
    }
}

/// Profile saves are wholesale: every field is replaced, there is no
/// partial update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub home_address: Option<String>,
    pub arrival_preference_hours: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub phone_number: Option<String>,
    pub phone_verified: bool,
    pub email: Option<String>,
    pub home_address: Option<String>,
    pub arrival_preference_hours: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id,
            phone_number: profile.phone_number,
            phone_verified: profile.phone_verified,
            email: profile.email,
            home_address: profile.home_address,
            arrival_preference_hours: profile.arrival_preference_hours,
            updated_at: profile.updated_at,
        }
    }
}

/// A short-lived one-time code proving phone-number ownership. Unique
/// per (user, phone number); re-requesting supersedes the old code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCode {
    pub user_id: String,
    pub phone_number: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Outcome of checking a submitted code against the stored record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodeCheck {
    Valid,
    Expired,
    Mismatch,
}

impl VerificationCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Checks a submitted code. Expiry is checked before the value: a
    /// correct but stale code reports `Expired`, not `Mismatch`.
    pub fn check(&self, submitted: &str, now: DateTime<Utc>) -> CodeCheck {
        if self.is_expired(now) {
            CodeCheck::Expired
        } else if self.code != submitted {
            CodeCheck::Mismatch
        } else {
            CodeCheck::Valid
        }
    }
}

/// Fields are optional so that a missing field surfaces as a
/// validation error with a static message rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationRequest {
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmVerificationRequest {
    pub phone_number: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
