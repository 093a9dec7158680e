use crate::models::DbTrip;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const TRIP_COLUMNS: &str = "id, user_id, flight_number, departs_at, airport_code, \
     origin_code, home_address, last_notified_at, created_at";

pub async fn create_trip(
    pool: &Pool<Postgres>,
    user_id: &str,
    flight_number: &str,
    departs_at: DateTime<Utc>,
    airport_code: &str,
    origin_code: Option<&str>,
    home_address: &str,
) -> Result<DbTrip> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating trip: id={}, user_id={}, flight={}, departs_at={}",
        id,
        user_id,
        flight_number,
        departs_at
    );

    let trip = sqlx::query_as::<_, DbTrip>(&format!(
        r#"
        INSERT INTO trips
            (id, user_id, flight_number, departs_at, airport_code, origin_code, home_address, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {TRIP_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(user_id)
    .bind(flight_number)
    .bind(departs_at)
    .bind(airport_code)
    .bind(origin_code)
    .bind(home_address)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(trip)
}

pub async fn get_trip(
    pool: &Pool<Postgres>,
    user_id: &str,
    id: Uuid,
) -> Result<Option<DbTrip>> {
    let trip = sqlx::query_as::<_, DbTrip>(&format!(
        r#"
        SELECT {TRIP_COLUMNS}
        FROM trips
        WHERE user_id = $1 AND id = $2
        "#
    ))
    .bind(user_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(trip)
}

pub async fn list_trips_by_user(pool: &Pool<Postgres>, user_id: &str) -> Result<Vec<DbTrip>> {
    let trips = sqlx::query_as::<_, DbTrip>(&format!(
        r#"
        SELECT {TRIP_COLUMNS}
        FROM trips
        WHERE user_id = $1
        ORDER BY departs_at
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(trips)
}

/// Trips the poll loop still has to consider: everything without a
/// dispatch marker. The time-window filtering is the scheduling
/// decision's job, not the query's.
pub async fn list_unnotified_trips(pool: &Pool<Postgres>) -> Result<Vec<DbTrip>> {
    let trips = sqlx::query_as::<_, DbTrip>(&format!(
        r#"
        SELECT {TRIP_COLUMNS}
        FROM trips
        WHERE last_notified_at IS NULL
        ORDER BY departs_at
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(trips)
}

/// Claims a trip for notification. The `last_notified_at IS NULL`
/// guard makes this a checked-and-set: with overlapping poll runs only
/// one caller sees `true` for a given trip.
pub async fn claim_notification(
    pool: &Pool<Postgres>,
    trip_id: Uuid,
    now: DateTime<Utc>,
) -> Result<bool> {
    let claimed = sqlx::query_scalar::<_, Uuid>(
        r#"
        UPDATE trips
        SET last_notified_at = $2
        WHERE id = $1 AND last_notified_at IS NULL
        RETURNING id
        "#,
    )
    .bind(trip_id)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if claimed.is_none() {
        tracing::debug!("Trip {} already claimed by another run", trip_id);
    }

    Ok(claimed.is_some())
}
