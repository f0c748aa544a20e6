//! Sunrise and sunset estimation.
//!
//! A deliberately coarse solar model: declination from the standard
//! Cooper approximation, sunrise and sunset from the hour angle at the
//! horizon. Accuracy is within roughly half an hour at temperate
//! latitudes, which is all the timing rules need. This is a documented
//! precision limitation, not a defect.

use chrono::{Datelike, NaiveDate};

use crate::domain::{Coordinate, DayMinute};

/// Sunrise is clamped to 05:00-07:00 and sunset to 17:00-20:00 so
/// polar-latitude degeneracies cannot produce useless schedule times.
const SUNRISE_MIN: u16 = 300;
const SUNRISE_MAX: u16 = 420;
const SUNSET_MIN: u16 = 1020;
const SUNSET_MAX: u16 = 1200;

/// Defaults used when the hour-angle computation has no solution
/// (midnight sun or polar night): 06:30 and 18:30.
const DEFAULT_SUNRISE: u16 = 390;
const DEFAULT_SUNSET: u16 = 1110;

/// Estimated sun times for one location and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DayMinute,
    pub sunset: DayMinute,
}

/// Estimate sunrise and sunset as minutes from midnight.
///
/// Total: any valid coordinate and date yields an answer. Sunrise is
/// always in [300, 420] and sunset in [1020, 1200].
pub fn estimate_sun_times(location: &Coordinate, date: NaiveDate) -> SunTimes {
    let day_of_year = date.ordinal() as f64;

    // Cooper's declination approximation, in degrees.
    let declination = 23.45 * (360.0 * (284.0 + day_of_year) / 365.0).to_radians().sin();

    let lat_rad = location.latitude().to_radians();
    let decl_rad = declination.to_radians();

    // cos(hour angle) leaves [-1, 1] inside the polar circles around
    // the solstices; acos then returns NaN and we fall back.
    let cos_hour_angle = -lat_rad.tan() * decl_rad.tan();
    let hour_angle_deg = cos_hour_angle.acos().to_degrees();

    let (sunrise, sunset) = if hour_angle_deg.is_nan() {
        (DEFAULT_SUNRISE, DEFAULT_SUNSET)
    } else {
        // Solar noon at 12:00; the hour angle spans 15 degrees per hour,
        // i.e. 4 minutes per degree.
        let offset = 4.0 * hour_angle_deg;
        let sunrise = (720.0 - offset).round();
        let sunset = (720.0 + offset).round();
        (clamp_minutes(sunrise), clamp_minutes(sunset))
    };

    SunTimes {
        sunrise: DayMinute::from_minutes_clamped(u32::from(sunrise.clamp(SUNRISE_MIN, SUNRISE_MAX))),
        sunset: DayMinute::from_minutes_clamped(u32::from(sunset.clamp(SUNSET_MIN, SUNSET_MAX))),
    }
}

fn clamp_minutes(value: f64) -> u16 {
    if value.is_nan() {
        return DEFAULT_SUNRISE;
    }
    value.clamp(0.0, 1439.0) as u16
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sun_times_always_in_clamped_ranges(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            ordinal in 1u32..=365,
        ) {
            let location = Coordinate::new(lat, lon).unwrap();
            let date = NaiveDate::from_yo_opt(2025, ordinal).unwrap();
            let times = estimate_sun_times(&location, date);
            prop_assert!((300..=420).contains(&times.sunrise.minutes()));
            prop_assert!((1020..=1200).contains(&times.sunset.minutes()));
        }
    }
}
