//! Per-day weather forecast snapshots.
//!
//! Supplied by the weather collaborator and consumed read-only by the
//! timing policy and day-note generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::WeatherCondition;

/// One day of forecast data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    pub date: NaiveDate,
    pub condition: WeatherCondition,
    /// High temperature in degrees Celsius.
    pub temperature_high: f64,
    /// Low temperature in degrees Celsius.
    pub temperature_low: f64,
    /// Precipitation chance percentage, if forecast.
    #[serde(default)]
    pub precipitation_chance: Option<u8>,
}

impl WeatherDay {
    /// Whether the day is reasonable for outdoor activities.
    ///
    /// Condition must suit outdoor time and any forecast rain chance
    /// must be 60% or below.
    pub fn suits_outdoor(&self) -> bool {
        self.condition.suits_outdoor() && self.precipitation_chance.unwrap_or(0) <= 60
    }

    /// Whether the forecast high counts as a hot day for the timing
    /// rules (shifts heat-exposed categories towards the evening).
    pub fn is_hot(&self) -> bool {
        self.temperature_high > 30.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(condition: WeatherCondition, high: f64, rain: Option<u8>) -> WeatherDay {
        WeatherDay {
            date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            condition,
            temperature_high: high,
            temperature_low: 18.0,
            precipitation_chance: rain,
        }
    }

    #[test]
    fn outdoor_suitability() {
        assert!(day(WeatherCondition::Sunny, 28.0, Some(10)).suits_outdoor());
        assert!(!day(WeatherCondition::Rainy, 28.0, None).suits_outdoor());
        assert!(!day(WeatherCondition::Sunny, 28.0, Some(80)).suits_outdoor());
    }

    #[test]
    fn hot_day_threshold() {
        assert!(!day(WeatherCondition::Sunny, 30.0, None).is_hot());
        assert!(day(WeatherCondition::Sunny, 33.0, None).is_hot());
    }
}
