use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create trips table. A trip is unique per (user, departure,
    // flight number); last_notified_at is the at-most-once dispatch
    // marker claimed by the notifier.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trips (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id VARCHAR(255) NOT NULL,
            flight_number VARCHAR(16) NOT NULL,
            departs_at TIMESTAMP WITH TIME ZONE NOT NULL,
            airport_code VARCHAR(8) NOT NULL,
            origin_code VARCHAR(8) NULL,
            home_address TEXT NOT NULL,
            last_notified_at TIMESTAMP WITH TIME ZONE NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_trip UNIQUE (user_id, departs_at, flight_number)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create profiles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            user_id VARCHAR(255) PRIMARY KEY,
            phone_number VARCHAR(32) NULL,
            phone_verified BOOLEAN NOT NULL DEFAULT FALSE,
            email VARCHAR(255) NULL,
            home_address TEXT NULL,
            arrival_preference_hours BIGINT NOT NULL DEFAULT 2,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create verification_codes table. One live code per
    // (user, phone); re-requests overwrite.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS verification_codes (
            user_id VARCHAR(255) NOT NULL,
            phone_number VARCHAR(32) NOT NULL,
            code VARCHAR(6) NOT NULL,
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (user_id, phone_number)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_trips_user_id ON trips(user_id);
        CREATE INDEX IF NOT EXISTS idx_trips_departs_at ON trips(departs_at);
        CREATE INDEX IF NOT EXISTS idx_trips_last_notified_at ON trips(last_notified_at)
            WHERE last_notified_at IS NULL;
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
