//! HTTP adapters for the four external services Flightwatch talks to:
//! flight lookup (aviationstack), driving routes (Google Routes),
//! SMS (Twilio), and email (Postmark).
//!
//! Each service is a trait with one production implementation and a
//! mockall mock, so the dispatcher and the API handlers are testable
//! without network access. Single call per operation, no retries;
//! delivery confirmation is out of scope.

pub mod email;
pub mod flights;
pub mod mock;
pub mod routing;
pub mod sms;

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use flightwatch_core::models::flight::{DriveEstimate, FlightStatus};

/// Flight lookup by IATA flight number. Zero matches is an empty list,
/// not an error; transport and provider errors are surfaced and the
/// call site decides whether to swallow them.
#[async_trait]
pub trait FlightSearch: Send + Sync {
    async fn search(&self, flight_iata: &str, date: Option<NaiveDate>)
        -> Result<Vec<FlightStatus>>;
}

/// Traffic-aware driving time between two street addresses. Errors on
/// no route.
#[async_trait]
pub trait RoutePlanner: Send + Sync {
    async fn drive_time(&self, origin: &str, destination: &str) -> Result<DriveEstimate>;
}

/// Fire-and-log SMS delivery.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send_sms(&self, to: &str, body: &str) -> Result<()>;
}

/// Fire-and-log email delivery.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Shared HTTP client with the per-request timeout applied to every
/// outbound call. Cancellation and timeout policy live here and
/// nowhere else.
pub fn build_http_client(timeout_seconds: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .build()?;
    Ok(client)
}
