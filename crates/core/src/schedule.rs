//! The trip scheduling decision: given "now" and a trip's departure
//! time, decide whether the reminder should fire and when the user
//! should leave.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use tracing::warn;

use crate::airports::AirportTable;
use crate::errors::{FlightError, FlightResult};

/// Drive-time assumption used when sizing the notification window. The
/// live routing lookup happens at dispatch time; the window only needs
/// a conservative bound so the reminder fires early enough.
pub const DRIVE_ESTIMATE_HOURS: i64 = 2;

/// Outcome of evaluating one trip against the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Departure is within the lead window; fire the reminder.
    Notify,
    /// Departure is still beyond the lead window.
    TooEarly,
    /// Departure is in the past; nothing to do, not an error.
    Departed,
}

/// Evaluates whether `now` falls inside the notification window:
/// notify iff `0 < time_until_departure <= window_hours`. Inclusive at
/// the window's upper edge, exclusive at departure itself.
pub fn evaluate(now: DateTime<Utc>, departs_at: DateTime<Utc>, window_hours: i64) -> Decision {
    let until = departs_at - now;
    if until <= Duration::zero() {
        return Decision::Departed;
    }
    // A window too large to represent as a Duration covers any future
    // departure; must not panic on absurd stored preferences.
    match Duration::try_hours(window_hours) {
        Some(window) if until > window => Decision::TooEarly,
        _ => Decision::Notify,
    }
}

/// Lead window in hours: drive-time estimate plus the user's arrival
/// preference. Saturates rather than overflowing on corrupt values.
pub fn window_hours(arrival_preference_hours: i64) -> i64 {
    DRIVE_ESTIMATE_HOURS.saturating_add(arrival_preference_hours)
}

/// Recommended departure-from-home instant: flight time minus the live
/// drive estimate minus the arrival preference.
pub fn leave_time(
    departs_at: DateTime<Utc>,
    drive_minutes: i64,
    arrival_preference_hours: i64,
) -> DateTime<Utc> {
    departs_at - Duration::minutes(drive_minutes + arrival_preference_hours * 60)
}

/// Parses a departure string into a UTC instant, applying one
/// convention uniformly: strings carrying an explicit offset are
/// absolute; offset-less wall-clock strings are interpreted in the
/// destination airport's timezone, or as UTC (with a warning) when the
/// airport is unknown.
pub fn parse_departure(
    table: &AirportTable,
    raw: &str,
    airport_code: &str,
) -> FlightResult<DateTime<Utc>> {
    if let Ok(absolute) = DateTime::parse_from_rfc3339(raw) {
        return Ok(absolute.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| {
            FlightError::Validation(format!("Unparseable departure time: {raw}"))
        })?;

    match table.timezone(airport_code) {
        Some(tz) => naive
            .and_local_timezone(tz)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| {
                FlightError::Validation(format!(
                    "Departure time {raw} does not exist in timezone {tz}"
                ))
            }),
        None => {
            warn!(
                airport = airport_code,
                "unknown airport code, interpreting departure as UTC"
            );
            Ok(naive.and_utc())
        }
    }
}
