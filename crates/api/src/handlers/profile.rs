use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use rand::Rng;
use std::sync::Arc;

use flightwatch_core::{
    errors::FlightError,
    models::profile::{
        CodeCheck, ConfirmVerificationRequest, MessageResponse, ProfileResponse,
        SendVerificationRequest, UpdateProfileRequest, VerificationCode,
        DEFAULT_ARRIVAL_PREFERENCE_HOURS, MAX_ARRIVAL_PREFERENCE_HOURS,
        VERIFICATION_CODE_TTL_MINUTES,
    },
};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = flightwatch_db::repositories::profile::get_profile(&state.db_pool, &user_id)
        .await
        .map_err(FlightError::Database)?
        .ok_or_else(|| FlightError::NotFound("Profile not found".to_string()))?;

    Ok(Json(ProfileResponse::from(
        flightwatch_core::models::profile::Profile::from(profile),
    )))
}

/// Profile saves are wholesale; the response echoes what was stored.
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let arrival_preference = payload
        .arrival_preference_hours
        .unwrap_or(DEFAULT_ARRIVAL_PREFERENCE_HOURS);
    if !(0..=MAX_ARRIVAL_PREFERENCE_HOURS).contains(&arrival_preference) {
        return Err(AppError(FlightError::Validation(format!(
            "arrivalPreferenceHours must be between 0 and {MAX_ARRIVAL_PREFERENCE_HOURS}"
        ))));
    }

    let profile = flightwatch_db::repositories::profile::upsert_profile(
        &state.db_pool,
        &user_id,
        payload.phone_number.as_deref(),
        payload.email.as_deref(),
        payload.home_address.as_deref(),
        arrival_preference,
    )
    .await
    .map_err(FlightError::Database)?;

    Ok(Json(ProfileResponse::from(
        flightwatch_core::models::profile::Profile::from(profile),
    )))
}

#[axum::debug_handler]
pub async fn send_verification(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<SendVerificationRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let phone_number = payload.phone_number.as_deref().ok_or_else(|| {
        AppError(FlightError::Validation("Phone number required".to_string()))
    })?;

    // 6-digit code, good for five minutes; a re-request overwrites any
    // code still outstanding for this phone.
    let code = rand::thread_rng().gen_range(100_000..1_000_000).to_string();
    let expires_at = Utc::now() + Duration::minutes(VERIFICATION_CODE_TTL_MINUTES);

    flightwatch_db::repositories::verification::upsert_code(
        &state.db_pool,
        &user_id,
        phone_number,
        &code,
        expires_at,
    )
    .await
    .map_err(FlightError::Database)?;

    state
        .sms
        .send_sms(
            phone_number,
            &format!("Your Flightwatch verification code is: {code}"),
        )
        .await
        .map_err(|e| {
            tracing::error!("Verification SMS failed: {e:#}");
            FlightError::Upstream("Failed to send SMS".to_string())
        })?;

    Ok(Json(MessageResponse {
        message: "Verification code sent".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn confirm_verification(
    State(state): State<Arc<ApiState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<ConfirmVerificationRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (phone_number, code) = match (payload.phone_number.as_deref(), payload.code.as_deref()) {
        (Some(phone), Some(code)) => (phone, code),
        _ => {
            return Err(AppError(FlightError::Validation(
                "Phone number and code required".to_string(),
            )))
        }
    };

    let record = flightwatch_db::repositories::verification::get_code(
        &state.db_pool,
        &user_id,
        phone_number,
    )
    .await
    .map_err(FlightError::Database)?
    .ok_or_else(|| FlightError::NotFound("Verification code not found".to_string()))?;

    match VerificationCode::from(record).check(code, Utc::now()) {
        CodeCheck::Expired => {
            return Err(AppError(FlightError::Validation(
                "Verification code expired".to_string(),
            )))
        }
        CodeCheck::Mismatch => {
            return Err(AppError(FlightError::Validation(
                "Invalid verification code".to_string(),
            )))
        }
        CodeCheck::Valid => {}
    }

    flightwatch_db::repositories::profile::mark_phone_verified(
        &state.db_pool,
        &user_id,
        phone_number,
    )
    .await
    .map_err(FlightError::Database)?;

    // Consume the code so a second confirmation fails with not-found.
    flightwatch_db::repositories::verification::delete_code(&state.db_pool, &user_id, phone_number)
        .await
        .map_err(FlightError::Database)?;

    Ok(Json(MessageResponse {
        message: "Phone verified successfully".to_string(),
    }))
}
