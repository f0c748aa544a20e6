//! Top-level itinerary build and re-optimization.
//!
//! `ItineraryPlanner` drives the whole pipeline: enhance the POI pool,
//! allocate it across days, schedule each day concurrently, and roll
//! the results up into an `Itinerary`. A built itinerary can later be
//! re-optimized, which re-sequences each day geographically and
//! produces a new version under the same id.

use std::collections::BTreeMap;

use futures::future::join_all;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    DayPlan, DomainError, Itinerary, Poi, ScheduledItem, TransportLeg, TransportMode, TripRequest,
    WeatherDay,
};
use crate::enhance::enhance_pool;
use crate::suggest::TimingSuggester;
use crate::transport::TransportEstimator;

use super::allocate::allocate_days;
use super::config::ScheduleConfig;
use super::day::DailyScheduleBuilder;
use super::sequence::{apply_order, nearest_neighbor_order};
use super::tables::RuleTables;

/// Error from itinerary assembly.
///
/// Only input-invariant breaches are fatal. External-service failures,
/// unusable suggestion replies, and solar edge cases all degrade to
/// deterministic behavior inside the pipeline and never surface here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// A day plan or itinerary invariant was violated during assembly.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The trip's start date plus its length overflowed the calendar.
    #[error("no calendar date for trip day {day}")]
    DateOutOfRange { day: u16 },
}

/// What a re-optimization pass changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationSummary {
    pub previous_cost: Decimal,
    pub optimized_cost: Decimal,
    /// Total inter-stop travel before re-sequencing, in kilometres.
    pub previous_travel_km: f64,
    pub optimized_travel_km: f64,
    pub version: u32,
}

/// The itinerary pipeline, bound to its collaborators.
pub struct ItineraryPlanner<'a, S, T> {
    suggester: &'a S,
    transport: &'a T,
    config: &'a ScheduleConfig,
    tables: &'a RuleTables,
}

impl<'a, S: TimingSuggester, T: TransportEstimator> ItineraryPlanner<'a, S, T> {
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

    /// Build a complete itinerary for a trip from a discovered POI
    /// pool and per-day weather snapshots.
    ///
    /// Days are scheduled as independent concurrent tasks once the
    /// allocation is fixed; the trip total is aggregated only after
    /// every day has completed. An empty pool yields an itinerary of
    /// empty days.
    pub async fn build(
        &self,
        trip: &TripRequest,
        pool: &[Poi],
        weather: &[WeatherDay],
    ) -> Result<Itinerary, PlanError> {
        info!(
            destination = trip.destination(),
            days = trip.duration_days(),
            pois = pool.len(),
            "building itinerary"
        );

        let enhanced = enhance_pool(pool, trip, self.tables);
        let allocation = allocate_days(
            &enhanced,
            trip.duration_days(),
            trip.group_type(),
            self.config,
            self.tables,
        );

        let day_builder =
            DailyScheduleBuilder::new(self.suggester, self.transport, self.config, self.tables);

        let mut day_futures = Vec::with_capacity(allocation.days.len());
        for (idx, day_pois) in allocation.days.iter().enumerate() {
            let day = (idx + 1) as u16;
            let date = trip
                .date_of_day(day)
                .ok_or(PlanError::DateOutOfRange { day })?;
            let day_weather = weather.iter().find(|w| w.date == date);
            let builder = &day_builder;
            day_futures.push(async move {
                builder.build_day(day, date, day_pois, day_weather, trip).await
            });
        }

        let days = join_all(day_futures)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let mut metadata = BTreeMap::new();
        metadata.insert("total_pois".to_string(), json!(allocation.total_pois()));
        metadata.insert("weather_considered".to_string(), json!(!weather.is_empty()));
        metadata.insert("transport_optimized".to_string(), json!(false));

        let itinerary = Itinerary::new(Uuid::new_v4(), trip.clone(), days, metadata)?;
        info!(
            id = %itinerary.id,
            activities = itinerary.activity_count(),
            cost = %itinerary.total_cost,
            "itinerary built"
        );
        Ok(itinerary)
    }

    /// Re-sequence each day's stops geographically and produce the
    /// next version of the itinerary.
    ///
    /// Each day is reordered by the nearest-neighbor heuristic, its
    /// transport legs refreshed for the new adjacency, and its items
    /// re-timed on a simple running clock anchored at the day's
    /// original first start. Timing preferences are not re-consulted;
    /// this pass trades them for shorter travel. The result keeps the
    /// itinerary id and bumps the version by one.
    pub async fn optimize(
        &self,
        itinerary: &Itinerary,
    ) -> Result<(Itinerary, OptimizationSummary), PlanError> {
        let previous_travel_km = travel_km(&itinerary.days);

        let mut days = Vec::with_capacity(itinerary.days.len());
        for plan in &itinerary.days {
            days.push(self.resequence_day(plan).await?);
        }

        let mut next = itinerary.reoptimized(days)?;
        next.metadata
            .insert("transport_optimized".to_string(), json!(true));

        let summary = OptimizationSummary {
            previous_cost: itinerary.total_cost,
            optimized_cost: next.total_cost,
            previous_travel_km,
            optimized_travel_km: travel_km(&next.days),
            version: next.version,
        };
        debug!(
            id = %next.id,
            version = next.version,
            previous_km = summary.previous_travel_km,
            optimized_km = summary.optimized_travel_km,
            "re-optimized itinerary"
        );
        Ok((next, summary))
    }

    async fn resequence_day(&self, plan: &DayPlan) -> Result<DayPlan, PlanError> {
        if plan.items.len() <= 2 {
            return Ok(plan.clone());
        }

        let pois: Vec<Poi> = plan.items.iter().map(|i| i.poi.clone()).collect();
        let order = nearest_neighbor_order(&pois);
        let ordered: Vec<ScheduledItem> = apply_order(&plan.items, &order);

        // Re-time on a running clock from the day's original first
        // start, with fresh transport legs for the new adjacency.
        let mut clock = plan.items[0].start;
        let mut items = Vec::with_capacity(ordered.len());
        for (idx, old) in ordered.iter().enumerate() {
            let mut item = ScheduledItem::new(
                old.day,
                clock,
                old.duration_minutes,
                old.poi.clone(),
                old.cost_estimate,
            )?;
            if let Some(notes) = &old.notes {
                item = item.with_notes(notes.clone());
            }

            let transfer = if idx + 1 < ordered.len() {
                let next = &ordered[idx + 1].poi;
                match self
                    .transport
                    .estimate(&old.poi.location, &next.location, TransportMode::Walking)
                    .await
                {
                    Ok(estimate) => {
                        let leg = TransportLeg::walking(
                            estimate.duration_minutes,
                            estimate.distance_km,
                            estimate.summary,
                        )?;
                        let minutes = leg.duration_minutes;
                        item = item.with_transport(leg);
                        minutes
                    }
                    Err(err) => {
                        debug!(day = plan.day, error = %err, "transport refresh failed");
                        self.config.placeholder_transfer_minutes
                    }
                }
            } else {
                0
            };

            clock = item
                .end
                .plus_minutes(transfer.max(self.config.activity_buffer_minutes));
            items.push(item);
        }

        Ok(DayPlan::new(
            plan.day,
            plan.date,
            items,
            plan.weather.clone(),
            plan.notes.clone(),
        )?)
    }
}

/// Total transport distance over all attached legs, in kilometres.
fn travel_km(days: &[DayPlan]) -> f64 {
    days.iter()
        .flat_map(|d| &d.items)
        .filter_map(|i| i.transport_to_next.as_ref())
        .map(|leg| leg.distance_km)
        .sum()
}
