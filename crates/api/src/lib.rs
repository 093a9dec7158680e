//! # Flightwatch API
//!
//! The API crate provides the web server for the Flightwatch trip
//! tracker: trip registration and listing, flight lookup, profile
//! management, and the phone-verification flow.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Caller identity extraction and error mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database
//! interactions. Caller identity is injected by an external authorizer
//! as a request header; this service performs no authentication of its
//! own.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for identity extraction and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use flightwatch_clients::{
    build_http_client, flights::AviationStackClient, sms::TwilioClient, FlightSearch, SmsSender,
};
use flightwatch_core::airports::AirportTable;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Immutable airport code lookup table
    pub airports: AirportTable,
    /// Flight lookup client
    pub flights: Arc<dyn FlightSearch>,
    /// SMS client used for verification codes
    pub sms: Arc<dyn SmsSender>,
}

/// Builds the application router over the given state.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Trip management endpoints
        .merge(routes::trip::routes())
        // Flight lookup endpoints
        .merge(routes::flight::routes())
        // Profile and phone-verification endpoints
        .merge(routes::profile::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database
/// connection: sets up logging, builds the external-service clients
/// and the airport table, and serves until the process stops.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let airports = match &config.airport_table_path {
        Some(path) => AirportTable::builtin().with_overrides_file(path)?,
        None => AirportTable::builtin(),
    };

    let http = build_http_client(config.http_timeout_seconds)?;
    let flights = Arc::new(AviationStackClient::new(
        http.clone(),
        config.aviation_stack_key.clone(),
    ));
    let sms = Arc::new(TwilioClient::new(
        http,
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_from_number.clone(),
    ));

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        airports,
        flights,
        sms,
    });

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
