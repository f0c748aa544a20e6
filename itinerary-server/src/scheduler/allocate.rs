//! Day allocation: partitioning the POI pool across trip days.
//!
//! First-fit in pool order under a per-day time budget, then a
//! best-effort redistribution of leftovers into lightly-loaded days.
//! The redistribution pass may push a day past the nominal budget;
//! that is an accepted soft constraint, logged but never an error.

use tracing::{debug, warn};

use crate::domain::{GroupType, Poi};

use super::config::ScheduleConfig;
use super::tables::RuleTables;

/// The per-day POI lists produced by allocation.
///
/// Always has exactly one (possibly empty) entry per trip day.
#[derive(Debug, Clone)]
pub struct Allocation {
    pub days: Vec<Vec<Poi>>,
}

impl Allocation {
    /// Total POIs allocated across all days.
    pub fn total_pois(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

/// Allocate the POI pool across `day_count` days.
///
/// POIs are offered to days in pool order: a POI goes to the first day
/// with enough remaining budget (duration plus the inter-activity
/// buffer, buffer-free for a day's first activity) that is still below
/// the activity cap. Anything left after that pass is pushed into days
/// with fewer than the redistribution threshold of activities, budget
/// notwithstanding. Deterministic for a given pool order.
///
/// An empty pool yields empty day lists; it is not an error.
pub fn allocate_days(
    pool: &[Poi],
    day_count: u16,
    group: GroupType,
    config: &ScheduleConfig,
    tables: &RuleTables,
) -> Allocation {
    let day_count = usize::from(day_count);
    let mut days: Vec<Vec<Poi>> = vec![Vec::new(); day_count];
    let mut used_minutes: Vec<u16> = vec![0; day_count];
    let budget = config.usable_budget_minutes();

    let mut leftovers: Vec<Poi> = Vec::new();

    for poi in pool {
        let duration = resolve_duration(poi, group, tables);

        let slot = (0..day_count).find(|&d| {
            if days[d].len() >= config.max_activities_per_day {
                return false;
            }
            let buffer = if days[d].is_empty() {
                0
            } else {
                config.activity_buffer_minutes
            };
            used_minutes[d] + duration + buffer <= budget
        });

        match slot {
            Some(d) => {
                let buffer = if days[d].is_empty() {
                    0
                } else {
                    config.activity_buffer_minutes
                };
                used_minutes[d] += duration + buffer;
                days[d].push(poi.clone());
            }
            None => leftovers.push(poi.clone()),
        }
    }

    // Best-effort overflow handling: stranded POIs land in
    // lightly-loaded days even if that busts the budget.
    for poi in leftovers {
        let duration = resolve_duration(&poi, group, tables);
        let target = (0..day_count)
            .filter(|&d| days[d].len() < config.redistribution_threshold)
            .min_by_key(|&d| used_minutes[d]);

        match target {
            Some(d) => {
                let buffer = if days[d].is_empty() {
                    0
                } else {
                    config.activity_buffer_minutes
                };
                used_minutes[d] += duration + buffer;
                if used_minutes[d] > budget {
                    warn!(
                        day = d + 1,
                        minutes = used_minutes[d],
                        budget,
                        poi = %poi.name,
                        "redistribution pushed day over its time budget"
                    );
                }
                days[d].push(poi);
            }
            None => {
                debug!(poi = %poi.name, "no day had room; POI dropped from this trip");
            }
        }
    }

    Allocation { days }
}

fn resolve_duration(poi: &Poi, group: GroupType, tables: &RuleTables) -> u16 {
    poi.visit_duration
        .unwrap_or_else(|| tables.visit_duration(poi, group))
}
