//! OpenRouteService HTTP client.
//!
//! Queries the ORS directions API for driving distance and duration
//! between two coordinates. Calls are blocking with a bounded timeout;
//! the async web layer invokes the planner through `spawn_blocking`.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::domain::Coordinates;

use super::error::DistanceError;
use super::{DistanceProvider, RoadEstimate};

/// Default base URL for the ORS directions API (driving profile).
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org/v2/directions/driving-car";

/// Default request timeout in seconds. Kept short: a slow provider
/// must not stall route planning, which can always fall back to the
/// offline estimate.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the ORS client.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Base URL for the directions endpoint.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OrsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ORS directions API client.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

/// Request body for the directions endpoint.
#[derive(serde::Serialize)]
struct DirectionsRequest {
    /// Coordinate pairs in ORS order: `[longitude, latitude]`.
    coordinates: [[f64; 2]; 2],
}

#[derive(Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize)]
struct DirectionsRoute {
    summary: DirectionsSummary,
}

#[derive(Deserialize)]
struct DirectionsSummary {
    /// Distance in metres.
    distance: f64,
    /// Duration in seconds.
    duration: f64,
}

impl OrsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OrsConfig) -> Result<Self, DistanceError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| DistanceError::Api {
            status: 0,
            message: "invalid API key format".to_string(),
        })?;
        headers.insert("Authorization", api_key);

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl DistanceProvider for OrsClient {
    fn road_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoadEstimate, DistanceError> {
        let body = DirectionsRequest {
            coordinates: [
                [origin.longitude, origin.latitude],
                [destination.longitude, destination.latitude],
            ],
        };

        let response = self.http.post(&self.base_url).json(&body).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DistanceError::Api {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let parsed: DirectionsResponse = response.json()?;
        let route = parsed.routes.first().ok_or(DistanceError::MissingRoute)?;

        Ok(RoadEstimate {
            distance_km: route.summary.distance / 1000.0,
            duration_hours: route.summary.duration / 3600.0,
        })
    }
}
