//! Clock-time handling for daily schedules.
//!
//! The scheduler reasons about times of day as whole minutes from
//! midnight. This module provides a small validated type for those
//! values, with "HH:MM" parsing and formatting for the suggestion
//! service's line-oriented responses.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day as minutes from midnight, in [0, 1439].
///
/// Schedules never cross midnight (the day builder stops at 23:00),
/// so a single-day clock is sufficient. Arithmetic saturates at the
/// day boundaries rather than wrapping.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::DayMinute;
///
/// let t = DayMinute::parse_hhmm("06:30").unwrap();
/// assert_eq!(t.minutes(), 390);
/// assert_eq!(t.to_string(), "06:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayMinute(u16);

impl DayMinute {
    /// Midnight.
    pub const MIDNIGHT: DayMinute = DayMinute(0);

    /// The last representable minute of the day, 23:59.
    pub const END_OF_DAY: DayMinute = DayMinute(1439);

    /// Create a time from minutes-from-midnight.
    ///
    /// Returns an error if `minutes` is 1440 or more.
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= 1440 {
            return Err(TimeError::new("minutes must be below 1440"));
        }
        Ok(Self(minutes))
    }

    /// Create a time from minutes, clamping to the end of the day.
    pub fn from_minutes_clamped(minutes: u32) -> Self {
        Self(minutes.min(1439) as u16)
    }

    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, TimeError> {
        if hour >= 24 {
            return Err(TimeError::new("hour must be below 24"));
        }
        if minute >= 60 {
            return Err(TimeError::new("minute must be below 60"));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::domain::DayMinute;
    ///
    /// assert!(DayMinute::parse_hhmm("00:00").is_ok());
    /// assert!(DayMinute::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(DayMinute::parse_hhmm("1430").is_err());
    /// assert!(DayMinute::parse_hhmm("24:00").is_err());
    /// assert!(DayMinute::parse_hhmm("12:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        // Must be exactly 5 bytes: HH:MM
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let digit = |b: u8| -> Result<u16, TimeError> {
            if b.is_ascii_digit() {
                Ok((b - b'0') as u16)
            } else {
                Err(TimeError::new("expected ASCII digits"))
            }
        };

        let hour = digit(bytes[0])? * 10 + digit(bytes[1])?;
        let minute = digit(bytes[3])? * 10 + digit(bytes[4])?;

        Self::from_hm(hour, minute)
    }

    /// Minutes from midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Add minutes, saturating at 23:59.
    pub fn plus_minutes(&self, minutes: u16) -> DayMinute {
        DayMinute((self.0 + minutes).min(1439))
    }

    /// Subtract minutes, saturating at midnight.
    pub fn minus_minutes(&self, minutes: u16) -> DayMinute {
        DayMinute(self.0.saturating_sub(minutes))
    }

    /// Whole minutes from `earlier` to `self`, or zero if `earlier`
    /// is not actually earlier.
    pub fn since(&self, earlier: DayMinute) -> u16 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u16> for DayMinute {
    type Output = DayMinute;

    fn add(self, minutes: u16) -> DayMinute {
        self.plus_minutes(minutes)
    }
}

impl Sub<u16> for DayMinute {
    type Output = DayMinute;

    fn sub(self, minutes: u16) -> DayMinute {
        self.minus_minutes(minutes)
    }
}

impl fmt::Display for DayMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl fmt::Debug for DayMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayMinute({self})")
    }
}
