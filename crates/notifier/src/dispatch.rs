//! Notification dispatch: one routing call, at most one SMS, exactly
//! one email per invocation. Nothing here retries; a failed step
//! aborts the rest of the dispatch and propagates to the poll loop.

use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use flightwatch_clients::{EmailSender, RoutePlanner, SmsSender};
use flightwatch_core::{
    airports::AirportTable,
    models::{
        flight::DriveEstimate,
        profile::Profile,
        trip::{NotifyPayload, Trip},
    },
    schedule,
};
use sqlx::PgPool;
use tracing::{info, warn};

/// A fully rendered notification, ready to hand to the messaging
/// clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Set only when the profile has a verified phone number.
    pub sms_to: Option<String>,
    pub email_to: String,
    pub subject: String,
    pub body: String,
}

/// Renders the alert for a trip. Pure: all lookups have already
/// happened by the time this runs.
pub fn compose(
    trip: &Trip,
    profile: Option<&Profile>,
    estimate: DriveEstimate,
    airports: &AirportTable,
    fallback_recipient: &str,
) -> Alert {
    let arrival_preference = Profile::arrival_preference_or_default(profile);
    let leave_at = schedule::leave_time(
        trip.departs_at,
        estimate.duration_minutes(),
        arrival_preference,
    );

    let body = format!(
        "✈️ Flight Alert!\n\n\
         Flight: {}\n\
         Traffic to {} is currently {} mins.\n\
         Recommended time to leave: {}.\n\n\
         Safe travels!",
        trip.flight_number,
        trip.airport_code,
        estimate.duration_minutes(),
        format_leave_time(leave_at, &trip.airport_code, airports),
    );

    let sms_to = profile
        .filter(|p| p.phone_verified)
        .and_then(|p| p.phone_number.clone());

    let email_to = profile
        .and_then(|p| p.email.clone())
        .unwrap_or_else(|| fallback_recipient.to_string());

    Alert {
        sms_to,
        email_to,
        subject: format!("Flight Alert: Time to Leave for {}!", trip.flight_number),
        body,
    }
}

/// Shows the leave time in the airport's local timezone when the code
/// is known, otherwise UTC.
fn format_leave_time(leave_at: DateTime<Utc>, airport_code: &str, airports: &AirportTable) -> String {
    match airports.timezone(airport_code) {
        Some(tz) => leave_at
            .with_timezone(&tz)
            .format("%b %-d, %Y at %-I:%M %p %Z")
            .to_string(),
        None => leave_at.format("%b %-d, %Y at %-I:%M %p UTC").to_string(),
    }
}

/// Delivers a composed alert: at most one SMS, exactly one email. An
/// SMS failure aborts the email step as well.
pub async fn deliver(
    alert: &Alert,
    sms: &dyn SmsSender,
    email: &dyn EmailSender,
) -> Result<()> {
    match &alert.sms_to {
        Some(to) => sms.send_sms(to, &alert.body).await?,
        None => info!("No verified phone number, skipping SMS"),
    }

    email
        .send_email(&alert.email_to, &alert.subject, &alert.body)
        .await?;

    Ok(())
}

/// Full dispatch for one claimed trip: re-fetch trip and profile, one
/// live routing lookup, compose, deliver.
pub async fn dispatch_notification(
    pool: &PgPool,
    airports: &AirportTable,
    routes: &dyn RoutePlanner,
    sms: &dyn SmsSender,
    email: &dyn EmailSender,
    fallback_recipient: &str,
    payload: &NotifyPayload,
) -> Result<()> {
    let trip: Trip = flightwatch_db::repositories::trip::get_trip(
        pool,
        &payload.user_id,
        payload.trip_id,
    )
    .await?
    .ok_or_else(|| eyre!("Trip {} not found", payload.trip_id))?
    .into();

    let profile: Option<Profile> =
        flightwatch_db::repositories::profile::get_profile(pool, &payload.user_id)
            .await?
            .map(Into::into);

    if !airports.contains(&payload.airport_code) {
        warn!(
            airport = %payload.airport_code,
            "unknown airport code, routing to a generic address"
        );
    }
    let destination = airports.address(&payload.airport_code);

    let estimate = routes
        .drive_time(&payload.home_address, &destination)
        .await?;

    let alert = compose(&trip, profile.as_ref(), estimate, airports, fallback_recipient);
    deliver(&alert, sms, email).await?;

    info!(
        trip_id = %payload.trip_id,
        flight = %trip.flight_number,
        "notification dispatched"
    );
    Ok(())
}
