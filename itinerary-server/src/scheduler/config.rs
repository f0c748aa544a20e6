//! Scheduling configuration.

use crate::domain::DayMinute;

/// Tunable parameters for day allocation and schedule building.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Activity-time budget per day in minutes. 420 leaves headroom
    /// for the meal reservation out of an 8-hour day.
    pub daily_budget_minutes: u16,

    /// Minutes reserved per day for meals, subtracted from the budget
    /// before any activity is offered.
    pub meal_reservation_minutes: u16,

    /// Buffer between consecutive activities (minutes). Not applied
    /// before the first activity of a day.
    pub activity_buffer_minutes: u16,

    /// Soft cap on activities per day; allocation stops offering a
    /// day more once reached.
    pub max_activities_per_day: usize,

    /// Days with fewer activities than this receive leftovers in the
    /// redistribution pass.
    pub redistribution_threshold: usize,

    /// A preferred start further than this past the running clock is
    /// honored as an intentional wait (e.g. for a sunset).
    pub preferred_gap_tolerance_minutes: u16,

    /// Placeholder transfer gap when the transport estimator fails.
    pub placeholder_transfer_minutes: u16,

    /// The lunch adjustment pushes the first post-noon non-restaurant
    /// item to at least this time.
    pub lunch_resume: DayMinute,

    /// No new items are scheduled past this time, nightlife excepted.
    pub day_end: DayMinute,

    /// Minutes before sunrise to arrive at sunrise-named POIs.
    pub sunrise_lead_minutes: u16,

    /// Minutes before sunset to arrive at sunset-named POIs.
    pub sunset_lead_minutes: u16,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            daily_budget_minutes: 420,
            meal_reservation_minutes: 120,
            activity_buffer_minutes: 15,
            max_activities_per_day: 6,
            redistribution_threshold: 4,
            preferred_gap_tolerance_minutes: 120,
            placeholder_transfer_minutes: 15,
            lunch_resume: DayMinute::from_minutes_clamped(13 * 60),
            day_end: DayMinute::from_minutes_clamped(23 * 60),
            sunrise_lead_minutes: 30,
            sunset_lead_minutes: 60,
        }
    }
}

impl ScheduleConfig {
    /// Minutes of the daily budget available for activities after the
    /// meal reservation.
    pub fn usable_budget_minutes(&self) -> u16 {
        self.daily_budget_minutes
            .saturating_sub(self.meal_reservation_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ScheduleConfig::default();
        assert_eq!(config.daily_budget_minutes, 420);
        assert_eq!(config.meal_reservation_minutes, 120);
        assert_eq!(config.activity_buffer_minutes, 15);
        assert_eq!(config.max_activities_per_day, 6);
        assert_eq!(config.lunch_resume.to_string(), "13:00");
        assert_eq!(config.day_end.to_string(), "23:00");
    }
}
