//! Point-of-interest entity and its decode step.
//!
//! Discovered and cached places arrive as loosely-typed records (raw
//! JSON with string tags and unchecked numbers). `PoiRecord` is that
//! wire shape; `Poi` is the validated entity the scheduler works with.
//! The conversion is an explicit, fallible step so bad records fail
//! loudly at the boundary instead of deep inside the planner.

use serde::{Deserialize, Serialize};

use super::category::PoiCategory;
use super::coord::Coordinate;

/// Error from decoding a raw POI record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PoiDecodeError {
    /// Required field missing or empty
    #[error("poi record missing field: {0}")]
    MissingField(&'static str),

    /// Unrecognised category tag
    #[error("poi record has unknown category: {0}")]
    UnknownCategory(String),

    /// Coordinate out of range
    #[error("poi record has invalid coordinates: {0}")]
    InvalidCoordinate(String),

    /// Rating outside 0-5
    #[error("poi record rating out of range: {0}")]
    RatingOutOfRange(f64),

    /// Price level outside 1-4
    #[error("poi record price level out of range: {0}")]
    PriceLevelOutOfRange(u8),

    /// Duration override must be positive
    #[error("poi record visit duration must be positive")]
    NonPositiveDuration,
}

/// A validated point of interest.
///
/// Read-only to the scheduler. The enhancement step (`enhance`)
/// produces new values rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub category: PoiCategory,
    pub location: Coordinate,
    /// Average rating in [0, 5], if known.
    pub rating: Option<f64>,
    /// Price tier in 1..=4, if known.
    pub price_level: Option<u8>,
    /// Explicit visit-duration override in minutes.
    pub visit_duration: Option<u16>,
    pub description: Option<String>,
    /// Review count, used only for priority scoring.
    pub review_count: u32,
    /// Priority score in [0, 100], filled by the enhancement step.
    pub priority_score: Option<f64>,
}

impl Poi {
    /// Return a copy with the visit duration set.
    pub fn with_visit_duration(&self, minutes: u16) -> Poi {
        Poi {
            visit_duration: Some(minutes),
            ..self.clone()
        }
    }

    /// Return a copy with the priority score set.
    pub fn with_priority_score(&self, score: f64) -> Poi {
        Poi {
            priority_score: Some(score),
            ..self.clone()
        }
    }

    /// Case-insensitive check for a substring in the POI name.
    ///
    /// The timing rules key off name hints like "sunrise" or
    /// "breakfast".
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Raw wire form of a POI, as produced by discovery and cache layers.
#[derive(Debug, Clone, Deserialize)]
pub struct PoiRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub estimated_visit_duration: Option<u16>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub review_count: u32,
}

impl PoiRecord {
    /// Decode into a validated `Poi`.
    pub fn decode(self) -> Result<Poi, PoiDecodeError> {
        let id = non_empty(self.id, "id")?;
        let name = non_empty(self.name, "name")?;

        let category_tag = non_empty(self.category, "category")?;
        let category: PoiCategory = category_tag
            .parse()
            .map_err(|_| PoiDecodeError::UnknownCategory(category_tag))?;

        let lat = self
            .latitude
            .ok_or(PoiDecodeError::MissingField("latitude"))?;
        let lon = self
            .longitude
            .ok_or(PoiDecodeError::MissingField("longitude"))?;
        let location = Coordinate::new(lat, lon)
            .map_err(|e| PoiDecodeError::InvalidCoordinate(e.to_string()))?;

        if let Some(r) = self.rating {
            if !(0.0..=5.0).contains(&r) {
                return Err(PoiDecodeError::RatingOutOfRange(r));
            }
        }

        if let Some(p) = self.price_level {
            if !(1..=4).contains(&p) {
                return Err(PoiDecodeError::PriceLevelOutOfRange(p));
            }
        }

        if self.estimated_visit_duration == Some(0) {
            return Err(PoiDecodeError::NonPositiveDuration);
        }

        Ok(Poi {
            id,
            name,
            category,
            location,
            rating: self.rating,
            price_level: self.price_level,
            visit_duration: self.estimated_visit_duration,
            description: self.description,
            review_count: self.review_count,
            priority_score: None,
        })
    }
}

fn non_empty(field: Option<String>, name: &'static str) -> Result<String, PoiDecodeError> {
    match field {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(PoiDecodeError::MissingField(name)),
    }
}
