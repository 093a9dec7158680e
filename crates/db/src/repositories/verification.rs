use crate::models::DbVerificationCode;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Stores a verification code, superseding any previous code for the
/// same (user, phone) pair.
pub async fn upsert_code(
    pool: &Pool<Postgres>,
    user_id: &str,
    phone_number: &str,
    code: &str,
    expires_at: DateTime<Utc>,
) -> Result<DbVerificationCode> {
    let now = Utc::now();

    let record = sqlx::query_as::<_, DbVerificationCode>(
        r#"
        INSERT INTO verification_codes (user_id, phone_number, code, expires_at, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id, phone_number) DO UPDATE SET
            code = EXCLUDED.code,
            expires_at = EXCLUDED.expires_at,
            created_at = EXCLUDED.created_at
        RETURNING user_id, phone_number, code, expires_at, created_at
        "#,
    )
    .bind(user_id)
    .bind(phone_number)
    .bind(code)
    .bind(expires_at)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

pub async fn get_code(
    pool: &Pool<Postgres>,
    user_id: &str,
    phone_number: &str,
) -> Result<Option<DbVerificationCode>> {
    let record = sqlx::query_as::<_, DbVerificationCode>(
        r#"
        SELECT user_id, phone_number, code, expires_at, created_at
        FROM verification_codes
        WHERE user_id = $1 AND phone_number = $2
        "#,
    )
    .bind(user_id)
    .bind(phone_number)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Consumes a code after successful confirmation. Expired codes are
/// left behind and simply fail the expiry check; there is no
/// background cleanup.
pub async fn delete_code(pool: &Pool<Postgres>, user_id: &str, phone_number: &str) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM verification_codes
        WHERE user_id = $1 AND phone_number = $2
        "#,
    )
    .bind(user_id)
    .bind(phone_number)
    .execute(pool)
    .await?;

    Ok(())
}
