use eyre::{eyre, Result};
use std::env;

/// Configuration for the notification worker.
///
/// All external-service credentials are required; in particular the
/// fallback email recipient has no implicit default, so a worker
/// cannot silently deliver alerts to a test address.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Database connection URL (required)
    pub database_url: String,
    /// Seconds between poll runs (defaults to 300)
    pub poll_interval_seconds: u64,
    /// Per-request timeout applied to every outbound HTTP call
    pub http_timeout_seconds: u64,
    /// Google Routes API key (required)
    pub google_maps_key: String,
    /// Twilio credentials and sending number (required)
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,
    /// Postmark server token and verified sender address (required)
    pub postmark_server_token: String,
    pub email_sender: String,
    /// Recipient used when a profile has no email address (required)
    pub fallback_recipient: String,
    /// Optional JSON file of extra airport table entries
    pub airport_table_path: Option<String>,
}

impl NotifierConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| eyre!("DATABASE_URL environment variable not set"))?;

        let poll_interval_seconds = env::var("POLL_INTERVAL_SECONDS")
            .unwrap_or_else(|_| "300".to_string())
            .parse::<u64>()
            .map_err(|_| eyre!("POLL_INTERVAL_SECONDS must be a valid u64"))?;

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| eyre!("HTTP_TIMEOUT_SECONDS must be a valid u64"))?;

        let google_maps_key = env::var("GOOGLE_MAPS_KEY")
            .map_err(|_| eyre!("GOOGLE_MAPS_KEY environment variable not set"))?;

        let twilio_account_sid = env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| eyre!("TWILIO_ACCOUNT_SID environment variable not set"))?;
        let twilio_auth_token = env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| eyre!("TWILIO_AUTH_TOKEN environment variable not set"))?;
        let twilio_from_number = env::var("TWILIO_FROM_NUMBER")
            .map_err(|_| eyre!("TWILIO_FROM_NUMBER environment variable not set"))?;

        let postmark_server_token = env::var("POSTMARK_SERVER_TOKEN")
            .map_err(|_| eyre!("POSTMARK_SERVER_TOKEN environment variable not set"))?;
        let email_sender = env::var("EMAIL_SENDER")
            .map_err(|_| eyre!("EMAIL_SENDER environment variable not set"))?;

        let fallback_recipient = env::var("FALLBACK_RECIPIENT")
            .map_err(|_| eyre!("FALLBACK_RECIPIENT environment variable not set"))?;

        let airport_table_path = env::var("AIRPORT_TABLE_PATH").ok();

        Ok(Self {
            database_url,
            poll_interval_seconds,
            http_timeout_seconds,
            google_maps_key,
            twilio_account_sid,
            twilio_auth_token,
            twilio_from_number,
            postmark_server_token,
            email_sender,
            fallback_recipient,
            airport_table_path,
        })
    }
}
