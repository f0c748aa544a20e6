//! Rule tables: visit durations, cost tiers, and weather sensitivity.
//!
//! The tables are immutable values injected at construction time so
//! tests can substitute fixtures. The defaults carry the production
//! numbers.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::domain::{GroupType, Poi, PoiCategory};

/// Cost tiers for one category, indexed by price level 1-4.
pub type CostTiers = [Decimal; 4];

/// Immutable lookup tables for scheduling and costing.
#[derive(Debug, Clone)]
pub struct RuleTables {
    /// Base visit duration in minutes by category.
    durations: HashMap<PoiCategory, u16>,
    /// Fallback duration for categories not in the table.
    default_duration: u16,
    /// Cost tiers by base category.
    costs: HashMap<PoiCategory, CostTiers>,
    /// Fallback tiers for categories not in the table.
    default_costs: CostTiers,
    /// Categories whose visits are weather-sensitive (outdoors).
    weather_sensitive: HashSet<PoiCategory>,
}

impl Default for RuleTables {
    fn default() -> Self {
        let durations = HashMap::from([
            (PoiCategory::Restaurant, 90),
            (PoiCategory::Attraction, 120),
            (PoiCategory::Museum, 180),
            (PoiCategory::Park, 90),
            (PoiCategory::Shopping, 120),
            (PoiCategory::Nightlife, 150),
            (PoiCategory::Accommodation, 30),
            (PoiCategory::Transport, 15),
            (PoiCategory::Entertainment, 180),
            (PoiCategory::Religious, 60),
            (PoiCategory::Beach, 180),
            (PoiCategory::Adventure, 240),
            (PoiCategory::AmusementPark, 240),
            (PoiCategory::Zoo, 180),
            (PoiCategory::Aquarium, 150),
            (PoiCategory::Temple, 60),
            (PoiCategory::Church, 45),
            (PoiCategory::Mosque, 45),
        ]);

        let costs = HashMap::from([
            (PoiCategory::Restaurant, tiers(15, 30, 50, 80)),
            (PoiCategory::Attraction, tiers(10, 20, 35, 60)),
            (PoiCategory::Museum, tiers(8, 15, 25, 40)),
            (PoiCategory::Park, tiers(0, 5, 10, 20)),
            (PoiCategory::Shopping, tiers(20, 50, 100, 200)),
            (PoiCategory::Nightlife, tiers(15, 30, 60, 100)),
            (PoiCategory::Accommodation, tiers(50, 100, 200, 400)),
            (PoiCategory::Transport, tiers(2, 5, 15, 30)),
            (PoiCategory::Entertainment, tiers(10, 25, 45, 80)),
            (PoiCategory::Religious, tiers(0, 5, 10, 20)),
            (PoiCategory::Beach, tiers(0, 10, 20, 40)),
            (PoiCategory::Adventure, tiers(20, 40, 80, 150)),
        ]);

        let weather_sensitive = HashSet::from([
            PoiCategory::Park,
            PoiCategory::Beach,
            PoiCategory::Adventure,
        ]);

        Self {
            durations,
            default_duration: 120,
            costs,
            default_costs: tiers(10, 20, 35, 60),
            weather_sensitive,
        }
    }
}

fn tiers(a: u32, b: u32, c: u32, d: u32) -> CostTiers {
    [
        Decimal::from(a),
        Decimal::from(b),
        Decimal::from(c),
        Decimal::from(d),
    ]
}

impl RuleTables {
    /// Estimated visit duration for a POI in minutes.
    ///
    /// The duration model: base duration by category, scaled by a
    /// group-type multiplier and a rating factor. Ignores any explicit
    /// override on the POI; callers resolve that first.
    pub fn visit_duration(&self, poi: &Poi, group: GroupType) -> u16 {
        let base = f64::from(
            *self
                .durations
                .get(&poi.category)
                .or_else(|| self.durations.get(&poi.category.base()))
                .unwrap_or(&self.default_duration),
        );

        let group_factor = match group {
            GroupType::Family => 1.3,
            GroupType::Couple => 1.0,
            GroupType::Solo => 0.8,
            GroupType::Friends => 1.1,
            GroupType::Business => 0.9,
        };

        let rating_factor = match poi.rating {
            Some(r) if r >= 4.5 => 1.2,
            Some(r) if r >= 4.0 => 1.1,
            Some(r) if r < 3.0 => 0.8,
            _ => 1.0,
        };

        let minutes = base * group_factor * rating_factor;
        // At least a quarter hour; anything shorter is not worth a stop.
        (minutes as u16).max(15)
    }

    /// Base cost for a category at the given price level.
    ///
    /// Missing price levels default to tier 2.
    pub fn base_cost(&self, category: PoiCategory, price_level: Option<u8>) -> Decimal {
        let tiers = self
            .costs
            .get(&category.base())
            .unwrap_or(&self.default_costs);
        let level = price_level.unwrap_or(2).clamp(1, 4);
        tiers[usize::from(level - 1)]
    }

    /// Whether the category is weather-sensitive.
    pub fn is_weather_sensitive(&self, category: PoiCategory) -> bool {
        self.weather_sensitive.contains(&category.base())
    }

    /// A fixture with flat values, for tests that need arithmetic to
    /// be easy to follow.
    #[cfg(test)]
    pub fn flat_fixture(duration: u16, cost: u32) -> Self {
        Self {
            durations: HashMap::new(),
            default_duration: duration,
            costs: HashMap::new(),
            default_costs: tiers(cost, cost, cost, cost),
            weather_sensitive: HashSet::new(),
        }
    }
}
