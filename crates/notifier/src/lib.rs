//! The Flightwatch notification worker: a polling loop that evaluates
//! every registered trip against the clock and sends "time to leave"
//! alerts over SMS and email.

use chrono::Utc;
use eyre::Result;
use flightwatch_clients::{
    build_http_client, email::PostmarkClient, routing::GoogleRoutesClient, sms::TwilioClient,
};
use flightwatch_core::airports::AirportTable;
use sqlx::PgPool;
use tracing::{error, info};

pub mod config;
pub mod dispatch;
pub mod poll;

/// Builds the airport table from the built-ins plus the optional
/// overrides file named in the config.
pub fn load_airport_table(config: &config::NotifierConfig) -> Result<AirportTable> {
    let table = AirportTable::builtin();
    match &config.airport_table_path {
        Some(path) => {
            info!("Loading airport table overrides from {}", path);
            table.with_overrides_file(path)
        }
        None => Ok(table),
    }
}

/// Run the notification worker until the process is stopped.
///
/// Each tick of the interval runs one poll pass; a failed pass is
/// logged and the worker simply waits for the next tick.
pub async fn start_worker(config: config::NotifierConfig, db_pool: PgPool) -> Result<()> {
    info!(
        "Starting notification worker, polling every {}s",
        config.poll_interval_seconds
    );

    let airports = load_airport_table(&config)?;

    let http = build_http_client(config.http_timeout_seconds)?;
    let routes = GoogleRoutesClient::new(http.clone(), config.google_maps_key.clone());
    let sms = TwilioClient::new(
        http.clone(),
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_from_number.clone(),
    );
    let email = PostmarkClient::new(
        http,
        config.postmark_server_token.clone(),
        config.email_sender.clone(),
    );

    let mut ticker =
        tokio::time::interval(std::time::Duration::from_secs(config.poll_interval_seconds));

    loop {
        ticker.tick().await;

        match poll::run_once(
            &db_pool,
            &airports,
            &routes,
            &sms,
            &email,
            &config.fallback_recipient,
            Utc::now(),
        )
        .await
        {
            Ok(outcome) => info!(
                evaluated = outcome.evaluated,
                notified = outcome.notified,
                failed = outcome.failed,
                "poll run completed"
            ),
            Err(e) => error!("poll run failed: {e:#}"),
        }
    }
}
