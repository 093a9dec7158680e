use crate::models::DbProfile;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

const PROFILE_COLUMNS: &str =
    "user_id, phone_number, phone_verified, email, home_address, arrival_preference_hours, updated_at";

/// Saves a profile wholesale; there is no partial update path. The
/// verified flag survives only while the phone number is unchanged —
/// a new number always starts unverified.
pub async fn upsert_profile(
    pool: &Pool<Postgres>,
    user_id: &str,
    phone_number: Option<&str>,
    email: Option<&str>,
    home_address: Option<&str>,
    arrival_preference_hours: i64,
) -> Result<DbProfile> {
    let now = Utc::now();

    tracing::debug!("Saving profile for user {}", user_id);

    let profile = sqlx::query_as::<_, DbProfile>(&format!(
        r#"
        INSERT INTO profiles
            (user_id, phone_number, phone_verified, email, home_address, arrival_preference_hours, updated_at)
        VALUES ($1, $2, FALSE, $3, $4, $5, $6)
        ON CONFLICT (user_id) DO UPDATE SET
            phone_number = EXCLUDED.phone_number,
            phone_verified = CASE
                WHEN profiles.phone_number IS NOT DISTINCT FROM EXCLUDED.phone_number
                    THEN profiles.phone_verified
                ELSE FALSE
            END,
            email = EXCLUDED.email,
            home_address = EXCLUDED.home_address,
            arrival_preference_hours = EXCLUDED.arrival_preference_hours,
            updated_at = EXCLUDED.updated_at
        RETURNING {PROFILE_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(phone_number)
    .bind(email)
    .bind(home_address)
    .bind(arrival_preference_hours)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

pub async fn get_profile(pool: &Pool<Postgres>, user_id: &str) -> Result<Option<DbProfile>> {
    let profile = sqlx::query_as::<_, DbProfile>(&format!(
        r#"
        SELECT {PROFILE_COLUMNS}
        FROM profiles
        WHERE user_id = $1
        "#
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Marks a phone number as verified, creating a minimal profile when
/// the user has never saved one.
pub async fn mark_phone_verified(
    pool: &Pool<Postgres>,
    user_id: &str,
    phone_number: &str,
) -> Result<DbProfile> {
    let now = Utc::now();

    let profile = sqlx::query_as::<_, DbProfile>(&format!(
        r#"
        INSERT INTO profiles (user_id, phone_number, phone_verified, updated_at)
        VALUES ($1, $2, TRUE, $3)
        ON CONFLICT (user_id) DO UPDATE SET
            phone_number = EXCLUDED.phone_number,
            phone_verified = TRUE,
            updated_at = EXCLUDED.updated_at
        RETURNING {PROFILE_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(phone_number)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Phone verified for user {}", user_id);
    Ok(profile)
}
