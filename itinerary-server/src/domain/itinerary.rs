//! Itinerary aggregate: scheduled items, day plans, and the trip-level
//! itinerary.
//!
//! These types enforce their invariants at construction time. A
//! `ScheduledItem` always has a positive duration; a `DayPlan`'s items
//! all carry the plan's day number; an `Itinerary` always has exactly
//! one `DayPlan` per trip day. Code that receives these types can
//! trust their shape.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::TransportMode;
use super::error::DomainError;
use super::poi::Poi;
use super::time::DayMinute;
use super::trip::TripRequest;
use super::weather::WeatherDay;

/// A transport leg from one scheduled stop to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportLeg {
    pub mode: TransportMode,
    /// Travel time in minutes.
    pub duration_minutes: u16,
    /// Distance in kilometres.
    pub distance_km: f64,
    /// Monetary cost of the leg. Walking legs are always free.
    pub cost: Decimal,
    /// Free-text route summary, possibly listing alternative modes.
    pub route_description: String,
}

impl TransportLeg {
    /// Create a validated transport leg.
    ///
    /// Distance must be non-negative, and walking legs must be free.
    pub fn new(
        mode: TransportMode,
        duration_minutes: u16,
        distance_km: f64,
        cost: Decimal,
        route_description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(DomainError::InvalidLeg("distance must be non-negative"));
        }
        if cost < Decimal::ZERO {
            return Err(DomainError::InvalidLeg("cost must be non-negative"));
        }
        if mode == TransportMode::Walking && cost != Decimal::ZERO {
            return Err(DomainError::InvalidLeg("walking legs are free"));
        }
        Ok(Self {
            mode,
            duration_minutes,
            distance_km,
            cost,
            route_description: route_description.into(),
        })
    }

    /// A free walking leg.
    pub fn walking(
        duration_minutes: u16,
        distance_km: f64,
        route_description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            TransportMode::Walking,
            duration_minutes,
            distance_km,
            Decimal::ZERO,
            route_description,
        )
    }
}

/// One scheduled visit within a day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledItem {
    /// 1-based day number within the trip.
    pub day: u16,
    pub start: DayMinute,
    pub end: DayMinute,
    /// Visit duration in minutes, always positive, with end = start + duration.
    pub duration_minutes: u16,
    pub poi: Poi,
    /// Leg to the next item of the day, absent for the last item.
    pub transport_to_next: Option<TransportLeg>,
    pub cost_estimate: Decimal,
    pub notes: Option<String>,
}

impl ScheduledItem {
    /// Create a validated item. Duration must be positive and the end
    /// time must equal start plus duration.
    pub fn new(
        day: u16,
        start: DayMinute,
        duration_minutes: u16,
        poi: Poi,
        cost_estimate: Decimal,
    ) -> Result<Self, DomainError> {
        if day == 0 {
            return Err(DomainError::InvalidItem("day numbers are 1-based"));
        }
        if duration_minutes == 0 {
            return Err(DomainError::InvalidItem("duration must be positive"));
        }
        let end = start.plus_minutes(duration_minutes);
        Ok(Self {
            day,
            start,
            end,
            duration_minutes,
            poi,
            transport_to_next: None,
            cost_estimate,
            notes: None,
        })
    }

    /// Attach the transport leg to the next item.
    pub fn with_transport(mut self, leg: TransportLeg) -> Self {
        self.transport_to_next = Some(leg);
        self
    }

    /// Attach free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The "HH:MM-HH:MM" window this item occupies.
    pub fn time_window(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// 1-based day number, matching the plan's position in the trip.
    pub day: u16,
    pub date: NaiveDate,
    /// Items ordered by start time.
    pub items: Vec<ScheduledItem>,
    pub weather: Option<WeatherDay>,
    pub total_cost: Decimal,
    pub notes: Option<String>,
}

impl DayPlan {
    /// Create a validated day plan.
    ///
    /// All items must carry this plan's day number and be ordered by
    /// start time. The day total is computed here, never passed in, so
    /// it cannot drift from the item costs.
    pub fn new(
        day: u16,
        date: NaiveDate,
        items: Vec<ScheduledItem>,
        weather: Option<WeatherDay>,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        if day == 0 {
            return Err(DomainError::InvalidItem("day numbers are 1-based"));
        }
        for item in &items {
            if item.day != day {
                return Err(DomainError::DayMismatch {
                    expected: day,
                    found: item.day,
                });
            }
        }
        if items.windows(2).any(|w| w[0].start > w[1].start) {
            return Err(DomainError::InvalidItem("items must be ordered by start"));
        }
        let total_cost = items.iter().map(|i| i.cost_estimate).sum();
        Ok(Self {
            day,
            date,
            items,
            weather,
            total_cost,
            notes,
        })
    }

    /// Total scheduled activity minutes (visits only, not transfers).
    pub fn activity_minutes(&self) -> u32 {
        self.items.iter().map(|i| u32::from(i.duration_minutes)).sum()
    }
}

/// A complete multi-day itinerary.
///
/// Built once per request; re-optimization produces a new value with
/// the same id and an incremented version, never a destructive update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub id: Uuid,
    pub trip_request: TripRequest,
    pub days: Vec<DayPlan>,
    pub total_cost: Decimal,
    /// Starts at 1; incremented by exactly one per re-optimization.
    pub version: u32,
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Itinerary {
    /// Assemble an itinerary from its day plans.
    ///
    /// The number of day plans must equal the trip's duration, and day
    /// numbers must run 1..=n in order. A mismatch is a caller
    /// contract breach, not a runtime condition.
    pub fn new(
        id: Uuid,
        trip_request: TripRequest,
        days: Vec<DayPlan>,
        metadata: BTreeMap<String, serde_json::Value>,
    ) -> Result<Self, DomainError> {
        Self::with_version(id, trip_request, days, metadata, 1)
    }

    fn with_version(
        id: Uuid,
        trip_request: TripRequest,
        days: Vec<DayPlan>,
        metadata: BTreeMap<String, serde_json::Value>,
        version: u32,
    ) -> Result<Self, DomainError> {
        if days.len() != usize::from(trip_request.duration_days()) {
            return Err(DomainError::DayCountMismatch {
                expected: trip_request.duration_days(),
                found: days.len(),
            });
        }
        for (idx, plan) in days.iter().enumerate() {
            let expected = (idx + 1) as u16;
            if plan.day != expected {
                return Err(DomainError::DayMismatch {
                    expected,
                    found: plan.day,
                });
            }
        }
        let total_cost = days.iter().map(|d| d.total_cost).sum();
        Ok(Self {
            id,
            trip_request,
            days,
            total_cost,
            version,
            metadata,
        })
    }

    /// Produce the next version of this itinerary with replacement
    /// day plans, keeping the id and bumping the version by one.
    pub fn reoptimized(&self, days: Vec<DayPlan>) -> Result<Itinerary, DomainError> {
        Self::with_version(
            self.id,
            self.trip_request.clone(),
            days,
            self.metadata.clone(),
            self.version + 1,
        )
    }

    /// Total number of scheduled activities across all days.
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|d| d.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{BudgetTier, GroupType, PoiCategory};
    use crate::domain::coord::Coordinate;
    use rust_decimal::dec;

    fn poi(name: &str) -> Poi {
        Poi {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: PoiCategory::Attraction,
            location: Coordinate::new(12.97, 77.59).unwrap(),
            rating: Some(4.2),
            price_level: Some(2),
            visit_duration: Some(90),
            description: None,
            review_count: 100,
            priority_score: None,
        }
    }

    fn item(day: u16, start: &str, cost: Decimal) -> ScheduledItem {
        ScheduledItem::new(
            day,
            DayMinute::parse_hhmm(start).unwrap(),
            90,
            poi("Stop"),
            cost,
        )
        .unwrap()
    }

    fn request(days: u16) -> TripRequest {
        TripRequest::new(
            "Bangalore",
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            days,
            2,
            GroupType::Couple,
            BudgetTier::Moderate,
            vec![],
        )
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    #[test]
    fn item_end_is_start_plus_duration() {
        let i = item(1, "09:00", dec!(20));
        assert_eq!(i.end, DayMinute::parse_hhmm("10:30").unwrap());
        assert_eq!(i.time_window(), "09:00-10:30");
    }

    #[test]
    fn item_rejects_zero_duration() {
        let err = ScheduledItem::new(
            1,
            DayMinute::MIDNIGHT,
            0,
            poi("Stop"),
            Decimal::ZERO,
        );
        assert!(err.is_err());
    }

    #[test]
    fn walking_leg_must_be_free() {
        assert!(TransportLeg::new(
            TransportMode::Walking,
            10,
            0.8,
            dec!(5),
            "walk"
        )
        .is_err());
        assert!(TransportLeg::walking(10, 0.8, "walk").is_ok());
    }

    #[test]
    fn leg_rejects_negative_distance() {
        assert!(TransportLeg::walking(10, -1.0, "walk").is_err());
    }

    #[test]
    fn day_total_is_sum_of_item_costs() {
        let items = vec![item(1, "09:00", dec!(20)), item(1, "11:00", dec!(15.5))];
        let plan = DayPlan::new(1, date(), items, None, None).unwrap();
        assert_eq!(plan.total_cost, dec!(35.5));
        assert_eq!(plan.activity_minutes(), 180);
    }

    #[test]
    fn day_rejects_mismatched_item_days() {
        let items = vec![item(2, "09:00", dec!(20))];
        let err = DayPlan::new(1, date(), items, None, None).unwrap_err();
        assert!(matches!(err, DomainError::DayMismatch { .. }));
    }

    #[test]
    fn day_rejects_unsorted_items() {
        let items = vec![item(1, "11:00", dec!(20)), item(1, "09:00", dec!(15))];
        assert!(DayPlan::new(1, date(), items, None, None).is_err());
    }

    #[test]
    fn itinerary_requires_one_plan_per_day() {
        let plan = DayPlan::new(1, date(), vec![], None, None).unwrap();
        let err = Itinerary::new(
            Uuid::new_v4(),
            request(2),
            vec![plan],
            BTreeMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::DayCountMismatch { .. }));
    }

    #[test]
    fn trip_total_is_sum_of_day_totals() {
        let d1 = DayPlan::new(1, date(), vec![item(1, "09:00", dec!(20))], None, None).unwrap();
        let d2 = DayPlan::new(
            2,
            date().succ_opt().unwrap(),
            vec![item(2, "09:00", dec!(30)), item(2, "11:00", dec!(10))],
            None,
            None,
        )
        .unwrap();
        let itinerary =
            Itinerary::new(Uuid::new_v4(), request(2), vec![d1, d2], BTreeMap::new()).unwrap();
        assert_eq!(itinerary.total_cost, dec!(60));
        assert_eq!(itinerary.activity_count(), 3);
        assert_eq!(itinerary.version, 1);
    }

    #[test]
    fn reoptimize_bumps_version_and_keeps_id() {
        let d1 = DayPlan::new(1, date(), vec![], None, None).unwrap();
        let itinerary =
            Itinerary::new(Uuid::new_v4(), request(1), vec![d1.clone()], BTreeMap::new()).unwrap();
        let next = itinerary.reoptimized(vec![d1.clone()]).unwrap();
        assert_eq!(next.id, itinerary.id);
        assert_eq!(next.version, 2);

        let third = next.reoptimized(vec![d1]).unwrap();
        assert_eq!(third.version, 3);
    }
}
