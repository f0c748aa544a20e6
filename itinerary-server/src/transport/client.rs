//! HTTP routing client.
//!
//! Queries an external directions service for point-to-point travel
//! estimates. The wire contract is small: coordinates and a mode in,
//! duration, distance, and a summary out.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, TransportMode};

use super::{RouteEstimate, TransportError, TransportEstimator};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Base URL of the directions service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutingConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    origin: String,
    destination: String,
    mode: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    /// Travel time in seconds.
    duration_seconds: u32,
    /// Distance in metres.
    distance_meters: u32,
    #[serde(default)]
    summary: String,
}

/// HTTP client for the directions service.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoutingClient {
    /// Create a new routing client.
    pub fn new(config: RoutingConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl TransportEstimator for RoutingClient {
    async fn estimate(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        mode: TransportMode,
    ) -> Result<RouteEstimate, TransportError> {
        let url = format!("{}/v1/directions", self.base_url);
        let request = DirectionsRequest {
            origin: from.to_string(),
            destination: to.to_string(),
            mode: mode.to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(TransportError::NoRoute);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: DirectionsResponse = response.json().await?;

        Ok(RouteEstimate {
            mode,
            duration_minutes: (body.duration_seconds / 60).min(u32::from(u16::MAX)) as u16,
            distance_km: f64::from(body.distance_meters) / 1000.0,
            summary: body.summary,
        })
    }
}
