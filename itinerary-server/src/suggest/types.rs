//! Request and response types for the timing-suggestion service.
//!
//! The service accepts a structured description of a POI and its day
//! and replies with free text expected to contain three labeled lines:
//!
//! ```text
//! TIME_CATEGORY: SUNRISE
//! START_TIME: 05:45
//! REASONING: Best light before the crowds arrive.
//! ```
//!
//! Anything else in the reply is ignored. A reply missing any of the
//! three lines is unusable and the caller falls back to deterministic
//! rules.

use serde::{Deserialize, Serialize};

use crate::domain::{DayMinute, Poi, TimeOfDay, WeatherDay};
use crate::solar::SunTimes;

/// Structured request submitted to the suggestion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingRequest {
    pub poi_name: String,
    pub category: String,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub weather_condition: Option<String>,
    pub temperature_high: Option<f64>,
    /// Sunrise as "HH:MM".
    pub sunrise: String,
    /// Sunset as "HH:MM".
    pub sunset: String,
}

impl TimingRequest {
    /// Build a request from the POI and day context.
    pub fn for_poi(poi: &Poi, weather: Option<&WeatherDay>, sun: &SunTimes) -> Self {
        Self {
            poi_name: poi.name.clone(),
            category: poi.category.to_string(),
            rating: poi.rating,
            description: poi.description.clone(),
            weather_condition: weather.map(|w| w.condition.to_string()),
            temperature_high: weather.map(|w| w.temperature_high),
            sunrise: sun.sunrise.to_string(),
            sunset: sun.sunset.to_string(),
        }
    }
}

/// A parsed suggestion reply.
///
/// Fields are `None` when the corresponding labeled line was missing
/// or unparseable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimingReply {
    pub time_of_day: Option<TimeOfDay>,
    pub start: Option<DayMinute>,
    pub reasoning: Option<String>,
}

impl TimingReply {
    /// Parse the labeled lines out of a free-text reply.
    pub fn parse(text: &str) -> TimingReply {
        let mut reply = TimingReply::default();

        for line in text.lines() {
            let line = line.trim();
            if let Some(value) = line.strip_prefix("TIME_CATEGORY:") {
                reply.time_of_day = value.trim().parse().ok();
            } else if let Some(value) = line.strip_prefix("START_TIME:") {
                reply.start = DayMinute::parse_hhmm(value.trim()).ok();
            } else if let Some(value) = line.strip_prefix("REASONING:") {
                let value = value.trim();
                if !value.is_empty() {
                    reply.reasoning = Some(value.to_string());
                }
            }
        }

        reply
    }

    /// All three fields, if the reply was complete.
    pub fn complete(&self) -> Option<(TimeOfDay, DayMinute, String)> {
        match (self.time_of_day, self.start, &self.reasoning) {
            (Some(tod), Some(start), Some(reason)) => Some((tod, start, reason.clone())),
            _ => None,
        }
    }
}
