//! Shared enumerations: POI categories, time-of-day slots, group and
//! budget tags, transport modes, and weather conditions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown enum tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} tag: {value}")]
pub struct UnknownTag {
    kind: &'static str,
    value: String,
}

impl UnknownTag {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Category of a point of interest.
///
/// The twelve base categories plus a few specialisations that the
/// discovery layer emits for places directories that distinguish them
/// (temples vs. churches, zoos vs. museums, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoiCategory {
    Restaurant,
    Attraction,
    Museum,
    Park,
    Shopping,
    Nightlife,
    Accommodation,
    Transport,
    Entertainment,
    Religious,
    Beach,
    Adventure,
    // Specialisations seen in discovery data.
    AmusementPark,
    Zoo,
    Aquarium,
    Temple,
    Church,
    Mosque,
}

impl PoiCategory {
    /// Stable string tag, matching the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            PoiCategory::Restaurant => "restaurant",
            PoiCategory::Attraction => "attraction",
            PoiCategory::Museum => "museum",
            PoiCategory::Park => "park",
            PoiCategory::Shopping => "shopping",
            PoiCategory::Nightlife => "nightlife",
            PoiCategory::Accommodation => "accommodation",
            PoiCategory::Transport => "transport",
            PoiCategory::Entertainment => "entertainment",
            PoiCategory::Religious => "religious",
            PoiCategory::Beach => "beach",
            PoiCategory::Adventure => "adventure",
            PoiCategory::AmusementPark => "amusement_park",
            PoiCategory::Zoo => "zoo",
            PoiCategory::Aquarium => "aquarium",
            PoiCategory::Temple => "temple",
            PoiCategory::Church => "church",
            PoiCategory::Mosque => "mosque",
        }
    }

    /// The base category a specialisation rolls up to for rule-table
    /// lookups that only key the twelve base categories.
    pub fn base(&self) -> PoiCategory {
        match self {
            PoiCategory::AmusementPark => PoiCategory::Entertainment,
            PoiCategory::Zoo | PoiCategory::Aquarium => PoiCategory::Museum,
            PoiCategory::Temple | PoiCategory::Church | PoiCategory::Mosque => {
                PoiCategory::Religious
            }
            other => *other,
        }
    }

    /// Whether the per-person cost scales with party size.
    ///
    /// Dining, entertainment, and lodging are priced per head; ticket
    /// and entry categories use the flat tier value.
    pub fn cost_scales_with_party(&self) -> bool {
        matches!(
            self.base(),
            PoiCategory::Restaurant | PoiCategory::Entertainment | PoiCategory::Accommodation
        )
    }
}

impl FromStr for PoiCategory {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(PoiCategory::Restaurant),
            "attraction" | "tourist_attraction" => Ok(PoiCategory::Attraction),
            "museum" => Ok(PoiCategory::Museum),
            "park" => Ok(PoiCategory::Park),
            "shopping" => Ok(PoiCategory::Shopping),
            "nightlife" => Ok(PoiCategory::Nightlife),
            "accommodation" => Ok(PoiCategory::Accommodation),
            "transport" => Ok(PoiCategory::Transport),
            "entertainment" => Ok(PoiCategory::Entertainment),
            "religious" => Ok(PoiCategory::Religious),
            "beach" => Ok(PoiCategory::Beach),
            "adventure" => Ok(PoiCategory::Adventure),
            "amusement_park" => Ok(PoiCategory::AmusementPark),
            "zoo" => Ok(PoiCategory::Zoo),
            "aquarium" => Ok(PoiCategory::Aquarium),
            "temple" => Ok(PoiCategory::Temple),
            "church" => Ok(PoiCategory::Church),
            "mosque" => Ok(PoiCategory::Mosque),
            other => Err(UnknownTag::new("category", other)),
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-of-day slot a POI is best experienced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeOfDay {
    Sunrise,
    EarlyMorning,
    Morning,
    Afternoon,
    Sunset,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Stable tag matching the suggestion-service response format.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Sunrise => "SUNRISE",
            TimeOfDay::EarlyMorning => "EARLY_MORNING",
            TimeOfDay::Morning => "MORNING",
            TimeOfDay::Afternoon => "AFTERNOON",
            TimeOfDay::Sunset => "SUNSET",
            TimeOfDay::Evening => "EVENING",
            TimeOfDay::Night => "NIGHT",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUNRISE" => Ok(TimeOfDay::Sunrise),
            "EARLY_MORNING" => Ok(TimeOfDay::EarlyMorning),
            "MORNING" => Ok(TimeOfDay::Morning),
            "AFTERNOON" => Ok(TimeOfDay::Afternoon),
            "SUNSET" => Ok(TimeOfDay::Sunset),
            "EVENING" => Ok(TimeOfDay::Evening),
            "NIGHT" => Ok(TimeOfDay::Night),
            other => Err(UnknownTag::new("time of day", other)),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composition of the travelling party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    Solo,
    Couple,
    Family,
    Friends,
    Business,
}

/// Budget tier for the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Budget,
    Moderate,
    Luxury,
    Premium,
}

/// Transport mode for a leg between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walking,
    Driving,
    PublicTransport,
    Taxi,
    Bike,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Driving => "driving",
            TransportMode::PublicTransport => "public_transport",
            TransportMode::Taxi => "taxi",
            TransportMode::Bike => "bike",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast condition tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
    Foggy,
}

impl WeatherCondition {
    /// Whether outdoor activities are reasonable under this condition.
    pub fn suits_outdoor(&self) -> bool {
        matches!(
            self,
            WeatherCondition::Sunny | WeatherCondition::PartlyCloudy | WeatherCondition::Cloudy
        )
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::PartlyCloudy => "partly_cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Stormy => "stormy",
            WeatherCondition::Foggy => "foggy",
        };
        f.write_str(s)
    }
}
