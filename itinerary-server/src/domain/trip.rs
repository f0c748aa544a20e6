//! Trip request parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{BudgetTier, GroupType};

/// Error from constructing an invalid trip request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTripRequest {
    #[error("trip must last at least one day")]
    ZeroDays,

    #[error("trip must have at least one traveler")]
    NoTravelers,

    #[error("destination must not be empty")]
    EmptyDestination,
}

/// The parameters a trip is planned against.
///
/// Immutable once created; the day count and traveler count drive
/// allocation and cost multipliers throughout the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    destination: String,
    start_date: NaiveDate,
    duration_days: u16,
    travelers: u16,
    group_type: GroupType,
    budget: BudgetTier,
    #[serde(default)]
    interests: Vec<String>,
}

impl TripRequest {
    /// Create a validated trip request.
    pub fn new(
        destination: impl Into<String>,
        start_date: NaiveDate,
        duration_days: u16,
        travelers: u16,
        group_type: GroupType,
        budget: BudgetTier,
        interests: Vec<String>,
    ) -> Result<Self, InvalidTripRequest> {
        let destination = destination.into();
        if destination.trim().is_empty() {
            return Err(InvalidTripRequest::EmptyDestination);
        }
        if duration_days == 0 {
            return Err(InvalidTripRequest::ZeroDays);
        }
        if travelers == 0 {
            return Err(InvalidTripRequest::NoTravelers);
        }
        Ok(Self {
            destination,
            start_date,
            duration_days,
            travelers,
            group_type,
            budget,
            interests,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Trip length in days, always at least 1.
    pub fn duration_days(&self) -> u16 {
        self.duration_days
    }

    /// Calendar date of the given 1-based day number.
    ///
    /// Returns `None` if `day` is 0 or past the end of the trip, or if
    /// the date would overflow the calendar.
    pub fn date_of_day(&self, day: u16) -> Option<NaiveDate> {
        if day == 0 || day > self.duration_days {
            return None;
        }
        self.start_date
            .checked_add_days(chrono::Days::new(u64::from(day - 1)))
    }

    pub fn travelers(&self) -> u16 {
        self.travelers
    }

    pub fn group_type(&self) -> GroupType {
        self.group_type
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest::new(
            "Bangalore",
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            3,
            2,
            GroupType::Couple,
            BudgetTier::Moderate,
            vec!["culture".into(), "nature".into()],
        )
        .unwrap()
    }

    #[test]
    fn rejects_degenerate_requests() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(
            TripRequest::new("X", date, 0, 2, GroupType::Solo, BudgetTier::Budget, vec![]),
            Err(InvalidTripRequest::ZeroDays)
        );
        assert_eq!(
            TripRequest::new("X", date, 3, 0, GroupType::Solo, BudgetTier::Budget, vec![]),
            Err(InvalidTripRequest::NoTravelers)
        );
        assert_eq!(
            TripRequest::new("", date, 3, 2, GroupType::Solo, BudgetTier::Budget, vec![]),
            Err(InvalidTripRequest::EmptyDestination)
        );
    }

    #[test]
    fn day_dates() {
        let r = request();
        assert_eq!(
            r.date_of_day(1),
            NaiveDate::from_ymd_opt(2025, 11, 3)
        );
        assert_eq!(
            r.date_of_day(3),
            NaiveDate::from_ymd_opt(2025, 11, 5)
        );
        assert_eq!(r.date_of_day(0), None);
        assert_eq!(r.date_of_day(4), None);
    }
}
