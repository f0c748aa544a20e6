//! Daily schedule building.
//!
//! Turns one day's POI set into a concrete sequence of scheduled
//! items: timing preferences resolved, a running clock walked, one
//! lunch adjustment, transport legs attached, costs estimated.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    DayPlan, DomainError, Poi, PoiCategory, ScheduledItem, TransportLeg, TransportMode,
    TripRequest, WeatherDay,
};
use crate::suggest::TimingSuggester;
use crate::transport::TransportEstimator;

use super::config::ScheduleConfig;
use super::cost::CostEstimator;
use super::tables::RuleTables;
use super::timing::{TimingDecision, VisitTimingPolicy};

/// Noon in minutes from midnight, the lunch-adjustment trigger.
const NOON_MINUTES: u16 = 12 * 60;

/// Builder for one day's schedule.
pub struct DailyScheduleBuilder<'a, S, T> {
    suggester: &'a S,
    transport: &'a T,
    config: &'a ScheduleConfig,
    tables: &'a RuleTables,
}

impl<'a, S: TimingSuggester, T: TransportEstimator> DailyScheduleBuilder<'a, S, T> {
    pub fn new(
        suggester: &'a S,
        transport: &'a T,
        config: &'a ScheduleConfig,
        tables: &'a RuleTables,
    ) -> Self {
        Self {
            suggester,
            transport,
            config,
            tables,
        }
    }

    /// Build the schedule for one day.
    ///
    /// Items are ordered by actual scheduled start time. Timing intent
    /// takes priority over geographic adjacency: the POIs are sorted
    /// by preferred start before the clock walk, so a sunset viewpoint
    /// lands in the evening no matter where it sits on the map.
    pub async fn build_day(
        &self,
        day: u16,
        date: NaiveDate,
        pois: &[Poi],
        weather: Option<&WeatherDay>,
        trip: &TripRequest,
    ) -> Result<DayPlan, DomainError> {
        let policy = VisitTimingPolicy::new(self.suggester, self.config);
        let costs = CostEstimator::new(self.tables);

        // Resolve duration and timing preference per POI.
        let mut entries = Vec::with_capacity(pois.len());
        for poi in pois {
            let duration = poi
                .visit_duration
                .unwrap_or_else(|| self.tables.visit_duration(poi, trip.group_type()));
            let decision = policy.choose(poi, weather, date).await;
            entries.push((poi.clone(), duration, decision));
        }

        // Chronological intent first; the stable sort keeps pool order
        // among equal preferences.
        entries.sort_by_key(|(_, _, decision)| decision.choice().start);

        let mut items: Vec<ScheduledItem> = Vec::with_capacity(entries.len());
        let mut lunch_taken = false;

        for (poi, duration, decision) in &entries {
            let preferred = decision.choice().start;

            // Travel from the last item actually on the schedule to
            // this candidate. Looked up before the end-of-day check so
            // that a kept item's leg always points at the item that
            // follows it; a leg towards a dropped candidate is thrown
            // away along with the candidate.
            let leg = match items.last() {
                None => None,
                Some(prev) => match self
                    .transport
                    .estimate(&prev.poi.location, &poi.location, TransportMode::Walking)
                    .await
                {
                    Ok(estimate) => Some(TransportLeg::walking(
                        estimate.duration_minutes,
                        estimate.distance_km,
                        estimate.summary,
                    )?),
                    Err(err) => {
                        debug!(day, error = %err, "transport lookup failed, using placeholder gap");
                        None
                    }
                },
            };

            let mut start = match items.last() {
                None => preferred,
                Some(prev) => {
                    // The leg duration (or a placeholder when the
                    // lookup failed) sets how soon this item can
                    // start; a short hop still leaves the
                    // inter-activity buffer.
                    let transfer = leg
                        .as_ref()
                        .map(|l| l.duration_minutes)
                        .unwrap_or(self.config.placeholder_transfer_minutes);
                    let ready = prev
                        .end
                        .plus_minutes(transfer.max(self.config.activity_buffer_minutes));
                    if preferred.since(ready) > self.config.preferred_gap_tolerance_minutes {
                        // An intentional wait, e.g. holding out for a
                        // sunset slot.
                        preferred
                    } else {
                        preferred.max(ready)
                    }
                }
            };

            // One lunch adjustment: the first item that puts the clock
            // past noon. A restaurant at that point *is* the lunch
            // break; anything else gets pushed to after it.
            if !lunch_taken && start.minutes() >= NOON_MINUTES {
                if poi.category.base() != PoiCategory::Restaurant {
                    start = start.max(self.config.lunch_resume);
                }
                lunch_taken = true;
            }

            if start > self.config.day_end && poi.category.base() != PoiCategory::Nightlife {
                debug!(day, poi = %poi.name, %start, "past end of day, dropping item");
                continue;
            }

            // The candidate is on the schedule, so the travel leg
            // belongs to its predecessor.
            if let (Some(prev), Some(leg)) = (items.last_mut(), leg) {
                prev.transport_to_next = Some(leg);
            }

            let cost = costs.item_cost(poi, trip);
            let mut item = ScheduledItem::new(day, start, *duration, poi.clone(), cost)?;

            if let Some(notes) = item_notes(poi, weather, decision, self.tables) {
                item = item.with_notes(notes);
            }

            items.push(item);
        }

        DayPlan::new(
            day,
            date,
            items,
            weather.cloned(),
            day_notes(weather, pois, self.tables),
        )
    }
}

/// Free-text notes for one item: the timing reasoning plus a weather
/// caveat for outdoor visits on unsuitable days.
fn item_notes(
    poi: &Poi,
    weather: Option<&WeatherDay>,
    decision: &TimingDecision,
    tables: &RuleTables,
) -> Option<String> {
    let mut notes = vec![decision.choice().reasoning.clone()];

    if let Some(w) = weather {
        if tables.is_weather_sensitive(poi.category) && !w.suits_outdoor() {
            notes.push("Weather may affect this outdoor activity".to_string());
        }
    }

    let joined = notes.join(" | ");
    if joined.is_empty() { None } else { Some(joined) }
}

/// Day-level notes: weather alerts and a dinner-reservation hint.
fn day_notes(weather: Option<&WeatherDay>, pois: &[Poi], tables: &RuleTables) -> Option<String> {
    let mut notes = Vec::new();

    if let Some(w) = weather {
        if !w.suits_outdoor() && pois.iter().any(|p| tables.is_weather_sensitive(p.category)) {
            notes.push(format!("Weather alert: {} conditions expected", w.condition));
        }
        if w.precipitation_chance.unwrap_or(0) > 50 {
            notes.push("Bring umbrella or rain protection".to_string());
        }
    }

    if pois
        .iter()
        .any(|p| p.category.base() == PoiCategory::Restaurant)
    {
        notes.push("Consider making dinner reservations".to_string());
    }

    if notes.is_empty() {
        None
    } else {
        Some(notes.join("; "))
    }
}
