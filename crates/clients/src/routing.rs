//! Google Routes API driving-time lookup.

use async_trait::async_trait;
use eyre::{eyre, Result};
use flightwatch_core::models::flight::DriveEstimate;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::RoutePlanner;

const DEFAULT_API_URL: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";

const FIELD_MASK: &str = "routes.duration,routes.distanceMeters,routes.staticDuration";

pub struct GoogleRoutesClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GoogleRoutesClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self {
            http,
            api_url: DEFAULT_API_URL.to_string(),
            api_key,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}

#[async_trait]
impl RoutePlanner for GoogleRoutesClient {
    async fn drive_time(&self, origin: &str, destination: &str) -> Result<DriveEstimate> {
        debug!("Calculating route from {} to {}", origin, destination);

        let body = json!({
            "origin": { "address": origin },
            "destination": { "address": destination },
            "travelMode": "DRIVE",
            "routingPreference": "TRAFFIC_AWARE",
        });

        let response: RoutesResponse = self
            .http
            .post(&self.api_url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| eyre!("No route found from {origin} to {destination}"))?;

        Ok(DriveEstimate {
            duration_seconds: parse_proto_duration(&route.duration)?,
            distance_meters: route.distance_meters,
        })
    }
}

/// The API returns protobuf-style durations like `"2700s"`.
fn parse_proto_duration(raw: &str) -> Result<i64> {
    raw.strip_suffix('s')
        .and_then(|n| n.parse::<f64>().ok())
        .map(|secs| secs.round() as i64)
        .ok_or_else(|| eyre!("Unparseable route duration: {raw}"))
}

#[derive(Debug, Deserialize)]
struct RoutesResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Route {
    duration: String,
    distance_meters: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2700s", 2700)]
    #[case("0s", 0)]
    #[case("2700.5s", 2701)]
    fn parses_proto_durations(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_proto_duration(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("2700")]
    #[case("s")]
    #[case("45 mins")]
    fn rejects_malformed_durations(#[case] raw: &str) {
        assert!(parse_proto_duration(raw).is_err());
    }

    #[test]
    fn parses_routes_response() {
        let response: RoutesResponse = serde_json::from_value(serde_json::json!({
            "routes": [{"duration": "2700s", "distanceMeters": 40233, "staticDuration": "2400s"}]
        }))
        .unwrap();

        assert_eq!(response.routes.len(), 1);
        assert_eq!(response.routes[0].distance_meters, 40233);
    }

    #[test]
    fn empty_routes_means_no_route() {
        let response: RoutesResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.routes.is_empty());
    }
}
