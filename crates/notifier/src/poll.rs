//! The periodic trip scan. Each run enumerates un-notified trips,
//! evaluates the scheduling decision per trip, and dispatches for the
//! ones whose departure falls inside the lead window.

use chrono::{DateTime, Utc};
use eyre::Result;
use flightwatch_clients::{EmailSender, RoutePlanner, SmsSender};
use flightwatch_core::{
    airports::AirportTable,
    models::{profile::Profile, trip::NotifyPayload, trip::Trip},
    schedule::{self, Decision},
};
use sqlx::PgPool;
use tracing::{debug, error, info};

use crate::dispatch;

/// Counters for one poll run, for the worker's log line.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PollOutcome {
    pub evaluated: usize,
    pub notified: usize,
    pub failed: usize,
}

/// Runs one poll pass. Failure to list trips aborts the whole run;
/// any failure on an individual trip is logged and the scan moves on.
pub async fn run_once(
    pool: &PgPool,
    airports: &AirportTable,
    routes: &dyn RoutePlanner,
    sms: &dyn SmsSender,
    email: &dyn EmailSender,
    fallback_recipient: &str,
    now: DateTime<Utc>,
) -> Result<PollOutcome> {
    let trips = flightwatch_db::repositories::trip::list_unnotified_trips(pool).await?;
    info!("Found {} trips to evaluate", trips.len());

    let mut outcome = PollOutcome::default();

    for trip in trips {
        outcome.evaluated += 1;
        let trip: Trip = trip.into();

        match process_trip(pool, airports, routes, sms, email, fallback_recipient, &trip, now)
            .await
        {
            Ok(true) => outcome.notified += 1,
            Ok(false) => {}
            Err(e) => {
                outcome.failed += 1;
                error!(
                    trip_id = %trip.id,
                    flight = %trip.flight_number,
                    "trip evaluation failed: {e:#}"
                );
            }
        }
    }

    Ok(outcome)
}

#[allow(clippy::too_many_arguments)]
async fn process_trip(
    pool: &PgPool,
    airports: &AirportTable,
    routes: &dyn RoutePlanner,
    sms: &dyn SmsSender,
    email: &dyn EmailSender,
    fallback_recipient: &str,
    trip: &Trip,
    now: DateTime<Utc>,
) -> Result<bool> {
    let profile = flightwatch_db::repositories::profile::get_profile(pool, &trip.user_id)
        .await?
        .map(Profile::from);
    let arrival_preference = Profile::arrival_preference_or_default(profile.as_ref());

    let window = schedule::window_hours(arrival_preference);
    let hours_until = (trip.departs_at - now).num_minutes() as f64 / 60.0;

    match schedule::evaluate(now, trip.departs_at, window) {
        Decision::Departed => {
            debug!(flight = %trip.flight_number, "flight has already departed");
            Ok(false)
        }
        Decision::TooEarly => {
            debug!(
                flight = %trip.flight_number,
                "flight is too far away ({hours_until:.2} hours)"
            );
            Ok(false)
        }
        Decision::Notify => {
            // Claim the dispatch marker before any side effect: an
            // overlapping run that loses the claim skips the trip, so
            // a notification goes out at most once.
            let claimed =
                flightwatch_db::repositories::trip::claim_notification(pool, trip.id, now).await?;
            if !claimed {
                info!(
                    flight = %trip.flight_number,
                    "already claimed by a concurrent run, skipping"
                );
                return Ok(false);
            }

            info!(
                flight = %trip.flight_number,
                "flight in {hours_until:.2} hours, dispatching notification"
            );

            let payload = NotifyPayload::for_trip(trip);
            dispatch::dispatch_notification(
                pool,
                airports,
                routes,
                sms,
                email,
                fallback_recipient,
                &payload,
            )
            .await?;

            Ok(true)
        }
    }
}
