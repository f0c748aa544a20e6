//! Itinerary scheduling.
//!
//! This module implements the core planning pipeline: the POI pool is
//! allocated across trip days under a time budget, each day is turned
//! into a timed sequence of visits with transport legs and costs, and
//! the results roll up into an `Itinerary`. A separate re-optimization
//! pass re-sequences days geographically.

mod allocate;
mod build;
mod config;
mod cost;
mod day;
mod sequence;
mod tables;
mod timing;

#[cfg(test)]
mod build_tests;

pub use allocate::{Allocation, allocate_days};
pub use build::{ItineraryPlanner, OptimizationSummary, PlanError};
pub use config::ScheduleConfig;
pub use cost::{CostEstimator, trip_total};
pub use day::DailyScheduleBuilder;
pub use sequence::{apply_order, nearest_neighbor_order};
pub use tables::RuleTables;
pub use timing::{TimingChoice, TimingDecision, VisitTimingPolicy, fallback_choice};
