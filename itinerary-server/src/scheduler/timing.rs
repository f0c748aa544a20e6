//! Visit-timing policy.
//!
//! Chooses when a POI is best visited: a time-of-day slot, a preferred
//! start, and a line of reasoning. Resolution is two-tier. The
//! preferred path asks the external suggestion service; any failure or
//! unusable reply drops to a deterministic rule table. Fallback is an
//! expected, frequent path, so it is a variant of the result rather
//! than an error.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{DayMinute, Poi, PoiCategory, TimeOfDay, WeatherDay};
use crate::solar::{SunTimes, estimate_sun_times};
use crate::suggest::{TimingRequest, TimingSuggester};

use super::config::ScheduleConfig;

/// A resolved timing preference for one POI.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingChoice {
    pub time_of_day: TimeOfDay,
    pub start: DayMinute,
    pub reasoning: String,
}

/// How a timing choice was reached.
///
/// `Suggested` carries service advice; `Fallback` carries the
/// deterministic rule result. Schedulers treat both identically, but
/// the distinction is kept for notes and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum TimingDecision {
    Suggested(TimingChoice),
    Fallback(TimingChoice),
}

impl TimingDecision {
    /// The choice, however it was reached.
    pub fn choice(&self) -> &TimingChoice {
        match self {
            TimingDecision::Suggested(c) | TimingDecision::Fallback(c) => c,
        }
    }

    /// Whether the service advice was used.
    pub fn is_suggested(&self) -> bool {
        matches!(self, TimingDecision::Suggested(_))
    }
}

/// Policy object binding a suggester and the schedule configuration.
pub struct VisitTimingPolicy<'a, S> {
    suggester: &'a S,
    config: &'a ScheduleConfig,
}

impl<'a, S: TimingSuggester> VisitTimingPolicy<'a, S> {
    pub fn new(suggester: &'a S, config: &'a ScheduleConfig) -> Self {
        Self { suggester, config }
    }

    /// Choose a time-of-day and preferred start for a POI on a date.
    ///
    /// Never fails: a dead suggestion service, a malformed reply, or a
    /// polar solar edge all degrade to deterministic answers.
    pub async fn choose(
        &self,
        poi: &Poi,
        weather: Option<&WeatherDay>,
        date: NaiveDate,
    ) -> TimingDecision {
        let sun = estimate_sun_times(&poi.location, date);
        let request = TimingRequest::for_poi(poi, weather, &sun);

        match self.suggester.suggest_timing(&request).await {
            Ok(reply) => {
                if let Some((time_of_day, start, reasoning)) = reply.complete() {
                    return TimingDecision::Suggested(TimingChoice {
                        time_of_day,
                        start,
                        reasoning,
                    });
                }
                debug!(poi = %poi.name, "suggestion reply unusable, using rules");
            }
            Err(err) => {
                debug!(poi = %poi.name, error = %err, "suggestion unavailable, using rules");
            }
        }

        TimingDecision::Fallback(fallback_choice(poi, weather, &sun, self.config))
    }
}

/// Deterministic timing rules.
///
/// Keyed by category, with a handful of name-substring and weather
/// refinements. Kept as a free function so tests can hit it directly.
pub fn fallback_choice(
    poi: &Poi,
    weather: Option<&WeatherDay>,
    sun: &SunTimes,
    config: &ScheduleConfig,
) -> TimingChoice {
    let hot = weather.is_some_and(WeatherDay::is_hot);

    // Name hints outrank category defaults: a "Sunset Point" beach or
    // viewpoint is pointless at noon.
    if matches!(
        poi.category.base(),
        PoiCategory::Beach | PoiCategory::Park | PoiCategory::Attraction
    ) {
        if poi.name_contains("sunrise") {
            return TimingChoice {
                time_of_day: TimeOfDay::Sunrise,
                start: sun.sunrise.minus_minutes(config.sunrise_lead_minutes),
                reasoning: format!("Arrive before the {} sunrise for the views", sun.sunrise),
            };
        }
        if poi.name_contains("sunset") {
            return TimingChoice {
                time_of_day: TimeOfDay::Sunset,
                start: sun.sunset.minus_minutes(config.sunset_lead_minutes),
                reasoning: format!("Arrive ahead of the {} sunset", sun.sunset),
            };
        }
    }

    let (time_of_day, start, reasoning) = match poi.category.base() {
        PoiCategory::Religious => (
            TimeOfDay::EarlyMorning,
            hm(6, 0),
            "Religious sites are calmest during morning prayers",
        ),
        PoiCategory::Museum => (
            TimeOfDay::Morning,
            hm(10, 0),
            "Museums are quietest soon after opening",
        ),
        PoiCategory::Restaurant => {
            if poi.name_contains("breakfast") || poi.name_contains("brunch") {
                (
                    TimeOfDay::Morning,
                    hm(8, 0),
                    "Breakfast spots are best early",
                )
            } else if poi.name_contains("lunch") {
                (
                    TimeOfDay::Afternoon,
                    hm(12, 30),
                    "Timed for the lunch service",
                )
            } else {
                (
                    TimeOfDay::Evening,
                    hm(19, 0),
                    "Timed for the dinner service",
                )
            }
        }
        PoiCategory::Shopping => {
            if hot {
                (
                    TimeOfDay::Evening,
                    hm(18, 0),
                    "Markets are cooler after sundown on hot days",
                )
            } else {
                (
                    TimeOfDay::Afternoon,
                    hm(14, 0),
                    "Shops are fully open by the afternoon",
                )
            }
        }
        PoiCategory::Nightlife => (
            TimeOfDay::Night,
            hm(21, 0),
            "Nightlife picks up late in the evening",
        ),
        PoiCategory::Beach => (
            TimeOfDay::Morning,
            hm(9, 0),
            "Beaches are best before the midday sun",
        ),
        PoiCategory::Park => {
            if hot {
                (
                    TimeOfDay::Evening,
                    hm(17, 0),
                    "Parks cool off towards the evening on hot days",
                )
            } else {
                (
                    TimeOfDay::EarlyMorning,
                    hm(7, 0),
                    "Parks are freshest in the early morning",
                )
            }
        }
        PoiCategory::Adventure => (
            TimeOfDay::EarlyMorning,
            hm(7, 0),
            "Adventure activities need the full day ahead",
        ),
        PoiCategory::Entertainment => (
            TimeOfDay::Evening,
            hm(18, 0),
            "Shows and entertainment run in the evening",
        ),
        PoiCategory::Accommodation => (
            TimeOfDay::Afternoon,
            hm(15, 0),
            "Standard check-in time",
        ),
        _ => (
            TimeOfDay::Afternoon,
            hm(14, 0),
            "Flexible timing; afternoon by default",
        ),
    };

    TimingChoice {
        time_of_day,
        start,
        reasoning: reasoning.to_string(),
    }
}

fn hm(hour: u16, minute: u16) -> DayMinute {
    DayMinute::from_minutes_clamped(u32::from(hour * 60 + minute))
}
