//! Transport-estimation boundary.
//!
//! Looks up travel duration, distance, and a route summary between two
//! stops. Like the suggestion service, this collaborator is optional:
//! when it fails or is absent, the day builder falls back to a
//! 15-minute placeholder gap with no cost.

mod client;
mod mock;

pub use client::{RoutingClient, RoutingConfig};
pub use mock::HaversineEstimator;

use std::fmt;

use crate::domain::{Coordinate, TransportMode};

/// A transport estimate between two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEstimate {
    pub mode: TransportMode,
    pub duration_minutes: u16,
    pub distance_km: f64,
    /// Free-text route summary; may enumerate alternative modes.
    pub summary: String,
}

/// Errors from the transport estimator.
#[derive(Debug)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Service returned an error status code
    ApiError { status: u16, message: String },

    /// No route found between the two points
    NoRoute,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Http(e) => write!(f, "HTTP error: {e}"),
            TransportError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            TransportError::NoRoute => write!(f, "no route found"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http(err)
    }
}

/// Trait for transport-estimation providers.
///
/// Allows the day builder to be tested against a deterministic local
/// estimator instead of a live routing service.
pub trait TransportEstimator: Send + Sync {
    /// Estimate a route between two coordinates for the given mode.
    fn estimate(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        mode: TransportMode,
    ) -> impl Future<Output = Result<RouteEstimate, TransportError>> + Send;
}
