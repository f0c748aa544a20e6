//! Cost estimation.
//!
//! Per-item costs come from the category cost tiers; party-priced
//! categories multiply by traveler count. Aggregation is plain
//! summation with no rounding; currency presentation is a boundary
//! concern.

use rust_decimal::Decimal;

use crate::domain::{DayPlan, Poi, TripRequest};

use super::tables::RuleTables;

/// Estimator binding the rule tables.
#[derive(Debug, Clone)]
pub struct CostEstimator<'a> {
    tables: &'a RuleTables,
}

impl<'a> CostEstimator<'a> {
    pub fn new(tables: &'a RuleTables) -> Self {
        Self { tables }
    }

    /// Estimated cost of visiting a POI for this party.
    pub fn item_cost(&self, poi: &Poi, trip: &TripRequest) -> Decimal {
        let base = self.tables.base_cost(poi.category, poi.price_level);
        if poi.category.cost_scales_with_party() {
            base * Decimal::from(trip.travelers())
        } else {
            base
        }
    }
}

/// Sum of the day totals.
///
/// Day totals are themselves computed from item costs at `DayPlan`
/// construction, so the trip total is always the item-cost sum with no
/// double counting.
pub fn trip_total(days: &[DayPlan]) -> Decimal {
    days.iter().map(|d| d.total_cost).sum()
}
