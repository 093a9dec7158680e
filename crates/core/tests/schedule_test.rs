use chrono::{DateTime, Duration, TimeZone, Utc};
use flightwatch_core::airports::AirportTable;
use flightwatch_core::schedule::{
    evaluate, leave_time, parse_departure, window_hours, Decision, DRIVE_ESTIMATE_HOURS,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

#[test]
fn flight_beyond_window_does_not_notify() {
    let now = at("2026-05-20T00:00:00Z");
    let departs = now + Duration::hours(48);
    assert_eq!(evaluate(now, departs, 4), Decision::TooEarly);
}

#[rstest]
#[case(Duration::minutes(1))]
#[case(Duration::hours(3))]
#[case(Duration::days(30))]
fn past_flight_never_notifies(#[case] behind: Duration) {
    let now = at("2026-05-20T12:00:00Z");
    let departs = now - behind;
    // Window size is irrelevant once the flight has departed.
    assert_eq!(evaluate(now, departs, 1000), Decision::Departed);
}

#[test]
fn window_edge_is_inclusive() {
    let now = at("2026-05-20T08:00:00Z");
    let departs = now + Duration::hours(4);
    assert_eq!(evaluate(now, departs, 4), Decision::Notify);
}

#[test]
fn just_past_window_edge_does_not_notify() {
    let now = at("2026-05-20T08:00:00Z");
    let departs = now + Duration::hours(4) + Duration::seconds(1);
    assert_eq!(evaluate(now, departs, 4), Decision::TooEarly);
}

#[test]
fn departure_instant_itself_does_not_notify() {
    let now = at("2026-05-20T08:00:00Z");
    assert_eq!(evaluate(now, now, 4), Decision::Departed);
}

#[test]
fn inside_window_notifies() {
    let now = at("2026-05-20T08:00:00Z");
    let departs = now + Duration::hours(2);
    assert_eq!(evaluate(now, departs, 4), Decision::Notify);
}

#[test]
fn window_adds_drive_estimate_to_preference() {
    assert_eq!(window_hours(2), DRIVE_ESTIMATE_HOURS + 2);
    assert_eq!(window_hours(0), DRIVE_ESTIMATE_HOURS);
}

#[test]
fn window_saturates_on_absurd_preference() {
    assert_eq!(window_hours(i64::MAX), i64::MAX);
}

#[test]
fn enormous_window_covers_any_future_departure_without_panicking() {
    // A window too wide for chrono's Duration must still evaluate: a
    // corrupt stored preference may not take down the whole poll run.
    let now = at("2026-05-20T08:00:00Z");
    let departs = now + Duration::hours(1);
    assert_eq!(evaluate(now, departs, i64::MAX / 3600), Decision::Notify);
    assert_eq!(evaluate(now, departs, i64::MAX), Decision::Notify);
}

#[test]
fn enormous_window_still_skips_departed_flights() {
    let now = at("2026-05-20T08:00:00Z");
    let departs = now - Duration::hours(1);
    assert_eq!(evaluate(now, departs, i64::MAX), Decision::Departed);
}

#[test]
fn recommended_leave_time_example() {
    // AA123 departing 2026-05-20T14:30, 2h arrival preference, 45min
    // drive: leave at 11:45.
    let departs = at("2026-05-20T14:30:00Z");
    let leave = leave_time(departs, 45, 2);
    assert_eq!(leave, at("2026-05-20T11:45:00Z"));
}

#[test]
fn offset_strings_parse_as_absolute_instants() {
    let table = AirportTable::builtin();
    let parsed = parse_departure(&table, "2026-05-20T14:30:00-05:00", "ORD").unwrap();
    assert_eq!(parsed, at("2026-05-20T19:30:00Z"));
}

#[rstest]
#[case("2026-05-20T14:30:00")]
#[case("2026-05-20T14:30")]
fn wall_clock_strings_resolve_in_airport_timezone(#[case] raw: &str) {
    let table = AirportTable::builtin();
    // ORD is UTC-5 in May (CDT).
    let parsed = parse_departure(&table, raw, "ORD").unwrap();
    assert_eq!(parsed, at("2026-05-20T19:30:00Z"));
}

#[test]
fn wall_clock_for_unknown_airport_falls_back_to_utc() {
    let table = AirportTable::builtin();
    let parsed = parse_departure(&table, "2026-05-20T14:30:00", "XXX").unwrap();
    assert_eq!(parsed, at("2026-05-20T14:30:00Z"));
}

#[test]
fn garbage_departure_is_a_validation_error() {
    let table = AirportTable::builtin();
    let err = parse_departure(&table, "tomorrow-ish", "ORD").unwrap_err();
    assert!(err.to_string().contains("Unparseable departure time"));
}

#[test]
fn winter_wall_clock_uses_standard_offset() {
    let table = AirportTable::builtin();
    // ORD is UTC-6 in January (CST).
    let parsed = parse_departure(&table, "2026-01-15T09:00:00", "ORD").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 1, 15, 15, 0, 0).unwrap());
}
