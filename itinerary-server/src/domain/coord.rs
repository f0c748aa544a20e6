//! Geographic coordinates and great-circle distance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when constructing an out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A validated geographic coordinate in decimal degrees.
///
/// Latitude is guaranteed to be in [-90, 90] and longitude in
/// [-180, 180]. Downstream distance code can therefore skip range
/// checks entirely.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Coordinate;
///
/// let c = Coordinate::new(12.9716, 77.5946).unwrap();
/// assert_eq!(c.latitude(), 12.9716);
///
/// // Out-of-range values are rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -181.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated wire form of a coordinate.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        RawCoordinate {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

impl Coordinate {
    /// Create a coordinate, validating the ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate {
                reason: "latitude must be in [-90, 90]",
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate {
                reason: "longitude must be in [-180, 180]",
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another coordinate in kilometres.
    ///
    /// Uses the haversine formula with a 6371 km Earth radius. Pure
    /// and total: both coordinates are valid by construction, so there
    /// are no failure modes.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Coordinate::new(90.01, 0.0).is_err());
        assert!(Coordinate::new(-90.01, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.01).is_err());
        assert!(Coordinate::new(0.0, -180.01).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn accept_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn distance_to_self_is_zero() {
        let c = coord(12.9716, 77.5946);
        assert_eq!(c.distance_km(&c), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = coord(12.9716, 77.5946);
        let b = coord(13.3707, 77.6837);
        let ab = a.distance_km(&b);
        let ba = b.distance_km(&a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn equator_latitude_degree_fraction() {
        // 0.01 degrees of latitude is about 1.11 km anywhere on Earth.
        let a = coord(0.0, 0.0);
        let b = coord(0.01, 0.0);
        let d = a.distance_km(&b);
        assert!((d - 1.11).abs() < 0.01, "got {d}");
    }

    #[test]
    fn known_city_pair() {
        // Bangalore city centre to Nandi Hills, roughly 45 km.
        let city = coord(12.9716, 77.5946);
        let hills = coord(13.3707, 77.6837);
        let d = city.distance_km(&hills);
        assert!((40.0..50.0).contains(&d), "got {d}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_coord() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lon)| Coordinate::new(lat, lon).unwrap())
    }

    proptest! {
        #[test]
        fn distance_symmetric(a in arb_coord(), b in arb_coord()) {
            let ab = a.distance_km(&b);
            let ba = b.distance_km(&a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn distance_non_negative_and_bounded(a in arb_coord(), b in arb_coord()) {
            let d = a.distance_km(&b);
            prop_assert!(d >= 0.0);
            // Half the circumference is the farthest two points can be.
            prop_assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }

        #[test]
        fn distance_to_self_zero(a in arb_coord()) {
            prop_assert!(a.distance_km(&a).abs() < 1e-9);
        }
    }
}
