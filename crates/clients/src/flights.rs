//! aviationstack flight lookup.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::{eyre, Result};
use flightwatch_core::models::flight::FlightStatus;
use serde::Deserialize;
use tracing::debug;

use crate::FlightSearch;

// The free tier is HTTP-only.
const DEFAULT_API_URL: &str = "http://api.aviationstack.com/v1/flights";

// Cap the payload; the provider returns every leg it knows about.
const RESULT_LIMIT: u32 = 10;

pub struct AviationStackClient {
    http: reqwest::Client,
    api_url: String,
    access_key: String,
}

impl AviationStackClient {
    pub fn new(http: reqwest::Client, access_key: String) -> Self {
        Self {
            http,
            api_url: DEFAULT_API_URL.to_string(),
            access_key,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}

#[async_trait]
impl FlightSearch for AviationStackClient {
    async fn search(
        &self,
        flight_iata: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<FlightStatus>> {
        debug!("Searching for flight {}", flight_iata);

        let mut query: Vec<(&str, String)> = vec![
            ("access_key", self.access_key.clone()),
            ("flight_iata", flight_iata.to_string()),
            ("limit", RESULT_LIMIT.to_string()),
        ];
        if let Some(date) = date {
            query.push(("flight_date", date.format("%Y-%m-%d").to_string()));
        }

        let response: ProviderResponse = self
            .http
            .get(&self.api_url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(eyre!("Flight lookup failed: {}", error.info));
        }

        Ok(flatten_flights(response.data))
    }
}

/// Maps the provider's nested response onto [`FlightStatus`], dropping
/// entries without both endpoint codes.
fn flatten_flights(data: Vec<ProviderFlight>) -> Vec<FlightStatus> {
    data.into_iter()
        .filter_map(|f| {
            let flight_number = f.flight.iata?;
            let origin = f.departure.iata?;
            let destination = f.arrival.iata?;
            Some(FlightStatus {
                flight_number,
                airline: f.airline.name.unwrap_or_default(),
                origin,
                destination,
                departure_time: f.departure.scheduled.unwrap_or_default(),
                arrival_time: f.arrival.scheduled.unwrap_or_default(),
                status: f.flight_status.unwrap_or_default(),
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    data: Vec<ProviderFlight>,
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    info: String,
}

#[derive(Debug, Deserialize)]
struct ProviderFlight {
    flight_status: Option<String>,
    departure: ProviderEndpoint,
    arrival: ProviderEndpoint,
    airline: ProviderAirline,
    flight: ProviderIdent,
}

#[derive(Debug, Deserialize)]
struct ProviderEndpoint {
    iata: Option<String>,
    scheduled: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderAirline {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderIdent {
    iata: Option<String>,
}
