use chrono::{DateTime, Utc};
use flightwatch_clients::mock::{MockEmailSenderClient, MockSmsSenderClient};
use flightwatch_core::airports::AirportTable;
use flightwatch_core::models::{flight::DriveEstimate, profile::Profile, trip::Trip};
use flightwatch_notifier::dispatch::{compose, deliver, Alert};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn sample_trip() -> Trip {
    Trip {
        id: Uuid::new_v4(),
        user_id: "user-1".to_string(),
        flight_number: "AA123".to_string(),
        // 2026-05-20T14:30 Chicago wall clock
        departs_at: at("2026-05-20T19:30:00Z"),
        airport_code: "ORD".to_string(),
        origin_code: Some("LAX".to_string()),
        home_address: "123 Main St, Chicago, IL".to_string(),
        last_notified_at: None,
        created_at: at("2026-05-01T00:00:00Z"),
    }
}

fn sample_profile() -> Profile {
    Profile {
        user_id: "user-1".to_string(),
        phone_number: Some("+15555550100".to_string()),
        phone_verified: true,
        email: Some("traveler@example.com".to_string()),
        home_address: Some("123 Main St, Chicago, IL".to_string()),
        arrival_preference_hours: 2,
        updated_at: at("2026-05-01T00:00:00Z"),
    }
}

fn forty_five_minute_drive() -> DriveEstimate {
    DriveEstimate {
        duration_seconds: 45 * 60,
        distance_meters: 40000,
    }
}

#[test]
fn compose_renders_flight_traffic_and_leave_time() {
    let alert = compose(
        &sample_trip(),
        Some(&sample_profile()),
        forty_five_minute_drive(),
        &AirportTable::builtin(),
        "alerts@flightwatch.example",
    );

    assert_eq!(alert.subject, "Flight Alert: Time to Leave for AA123!");
    assert!(alert.body.contains("Flight: AA123"));
    assert!(alert.body.contains("Traffic to ORD is currently 45 mins"));
    // 14:30 local minus 45 min drive minus 2 h arrival preference
    assert!(alert.body.contains("11:45 AM"), "body was: {}", alert.body);
    assert!(alert.body.contains("CDT"));
}

#[test]
fn compose_sets_sms_target_only_for_verified_phones() {
    let trip = sample_trip();
    let airports = AirportTable::builtin();

    let verified = sample_profile();
    let alert = compose(&trip, Some(&verified), forty_five_minute_drive(), &airports, "fb@x.io");
    assert_eq!(alert.sms_to.as_deref(), Some("+15555550100"));

    let mut unverified = sample_profile();
    unverified.phone_verified = false;
    let alert = compose(&trip, Some(&unverified), forty_five_minute_drive(), &airports, "fb@x.io");
    assert_eq!(alert.sms_to, None);
}

#[test]
fn compose_without_profile_uses_fallback_recipient_and_default_preference() {
    let alert = compose(
        &sample_trip(),
        None,
        forty_five_minute_drive(),
        &AirportTable::builtin(),
        "alerts@flightwatch.example",
    );

    assert_eq!(alert.email_to, "alerts@flightwatch.example");
    assert_eq!(alert.sms_to, None);
    // Default 2 h preference gives the same 11:45 leave time.
    assert!(alert.body.contains("11:45 AM"));
}

#[test]
fn compose_for_unknown_airport_renders_utc_leave_time() {
    let mut trip = sample_trip();
    trip.airport_code = "XXX".to_string();
    trip.departs_at = at("2026-05-20T19:30:00Z");

    let alert = compose(
        &trip,
        None,
        forty_five_minute_drive(),
        &AirportTable::builtin(),
        "fb@x.io",
    );

    assert!(alert.body.contains("UTC"), "body was: {}", alert.body);
    assert!(alert.body.contains("4:45 PM"));
}

fn sample_alert(sms_to: Option<&str>) -> Alert {
    Alert {
        sms_to: sms_to.map(str::to_string),
        email_to: "traveler@example.com".to_string(),
        subject: "Flight Alert: Time to Leave for AA123!".to_string(),
        body: "leave now".to_string(),
    }
}

#[tokio::test]
async fn deliver_sends_one_sms_and_one_email() {
    let alert = sample_alert(Some("+15555550100"));

    let mut sms = MockSmsSenderClient::new();
    sms.expect_send_sms()
        .with(eq("+15555550100"), eq("leave now"))
        .times(1)
        .returning(|_, _| Ok(()));

    let mut email = MockEmailSenderClient::new();
    email
        .expect_send_email()
        .with(
            eq("traveler@example.com"),
            eq("Flight Alert: Time to Leave for AA123!"),
            eq("leave now"),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));

    deliver(&alert, &sms, &email).await.unwrap();
}

#[tokio::test]
async fn deliver_skips_sms_without_a_verified_phone() {
    let alert = sample_alert(None);

    let mut sms = MockSmsSenderClient::new();
    sms.expect_send_sms().times(0);

    let mut email = MockEmailSenderClient::new();
    email.expect_send_email().times(1).returning(|_, _, _| Ok(()));

    deliver(&alert, &sms, &email).await.unwrap();
}

#[tokio::test]
async fn deliver_aborts_after_sms_failure() {
    let alert = sample_alert(Some("+15555550100"));

    let mut sms = MockSmsSenderClient::new();
    sms.expect_send_sms()
        .times(1)
        .returning(|_, _| Err(eyre::eyre!("twilio 500")));

    let mut email = MockEmailSenderClient::new();
    email.expect_send_email().times(0);

    let err = deliver(&alert, &sms, &email).await.unwrap_err();
    assert!(err.to_string().contains("twilio 500"));
}
