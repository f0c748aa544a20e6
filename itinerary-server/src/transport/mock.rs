//! Offline transport estimator.
//!
//! Derives estimates from great-circle distance and a per-mode speed,
//! with no network dependency. Used in tests and as the default when
//! no directions service is configured.

use crate::domain::{Coordinate, TransportMode};

use super::{RouteEstimate, TransportError, TransportEstimator};

/// Assumed speeds in km/h by mode. Walking pace is urban-sidewalk
/// pace, not trail pace.
fn speed_kmh(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Walking => 4.5,
        TransportMode::Bike => 14.0,
        TransportMode::PublicTransport => 18.0,
        TransportMode::Driving | TransportMode::Taxi => 25.0,
    }
}

/// Deterministic estimator based on haversine distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineEstimator;

impl HaversineEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl TransportEstimator for HaversineEstimator {
    async fn estimate(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        mode: TransportMode,
    ) -> Result<RouteEstimate, TransportError> {
        let distance_km = from.distance_km(to);
        let minutes = (distance_km / speed_kmh(mode) * 60.0).ceil().max(1.0);

        let summary = if mode == TransportMode::Walking && distance_km > 2.0 {
            format!(
                "{distance_km:.1} km on foot; consider a taxi or public transport for this leg"
            )
        } else {
            format!("{distance_km:.1} km by {mode}")
        };

        Ok(RouteEstimate {
            mode,
            duration_minutes: minutes.min(f64::from(u16::MAX)) as u16,
            distance_km,
            summary,
        })
    }
}
