//! # API Configuration
//!
//! Loads configuration for the Flightwatch API server from environment
//! variables, with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `HTTP_TIMEOUT_SECONDS`: Outbound HTTP call timeout (default: 10)
//! - `AVIATION_STACK_KEY`: Flight lookup API key (required)
//! - `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN` / `TWILIO_FROM_NUMBER`:
//!   SMS credentials for verification codes (required)
//! - `AIRPORT_TABLE_PATH`: Optional JSON file of extra airport entries

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the Flightwatch API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Timeout for outbound calls to external services
    pub http_timeout_seconds: u64,

    /// aviationstack access key for flight lookup
    pub aviation_stack_key: String,

    /// Twilio credentials for verification SMS
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,

    /// Optional JSON file of extra airport table entries
    pub airport_table_path: Option<String>,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable (DATABASE_URL, the
    /// flight-lookup key, or the Twilio credentials) is not set, or if
    /// a numeric value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url =
            env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        // External service settings
        let aviation_stack_key = env::var("AVIATION_STACK_KEY")
            .wrap_err("AVIATION_STACK_KEY environment variable must be set")?;
        let twilio_account_sid = env::var("TWILIO_ACCOUNT_SID")
            .wrap_err("TWILIO_ACCOUNT_SID environment variable must be set")?;
        let twilio_auth_token = env::var("TWILIO_AUTH_TOKEN")
            .wrap_err("TWILIO_AUTH_TOKEN environment variable must be set")?;
        let twilio_from_number = env::var("TWILIO_FROM_NUMBER")
            .wrap_err("TWILIO_FROM_NUMBER environment variable must be set")?;

        let airport_table_path = env::var("AIRPORT_TABLE_PATH").ok();

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            http_timeout_seconds,
            aviation_stack_key,
            twilio_account_sid,
            twilio_auth_token,
            twilio_from_number,
            airport_table_path,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
