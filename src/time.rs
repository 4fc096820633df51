//! Calendar and time-axis conversions.
//!
//! Dates are proleptic Gregorian. The Julian day is the uniform time axis used by
//! every solar formula, reduced to Julian centuries since J2000.0 before use.

#![allow(clippy::unreadable_literal)]

use crate::math::{floor, trunc};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds per day (86,400)
#[cfg(feature = "chrono")]
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Converts a proleptic Gregorian calendar date to a Julian day.
///
/// `day` may carry a fractional part for the time of day (`1.5` is noon on the
/// first). January and February are counted as months 13 and 14 of the previous
/// year. No range validation is performed; see [`julian_day_from_date`] for the
/// checked variant.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::gregorian_date_to_julian_day;
/// assert_eq!(gregorian_date_to_julian_day(2000.0, 1.0, 1.5), 2_451_545.0);
/// ```
#[must_use]
pub fn gregorian_date_to_julian_day(year: f64, month: f64, day: f64) -> f64 {
    let (mut y, mut m) = (year, month);
    if m <= 2.0 {
        m += 12.0;
        y -= 1.0;
    }

    let a = trunc(y / 100.0);
    let b = 2.0 - a + trunc(a / 4.0);

    trunc(365.25 * (y + 4716.0)) + trunc(30.6001 * (m + 1.0)) + day + b - 1524.5
}

/// Converts a Julian day to Julian centuries since J2000.0.
///
/// t = (JD - 2451545.0) / 36525
#[must_use]
pub fn julian_day_to_century(jd: f64) -> f64 {
    (jd - J2000_JDN) / DAYS_PER_CENTURY
}

/// Converts Julian centuries since J2000.0 back to a Julian day.
///
/// JD = 36525·t + 2451545.0
#[must_use]
pub fn julian_century_to_day(t: f64) -> f64 {
    t * DAYS_PER_CENTURY + J2000_JDN
}

/// Fraction of the Julian day elapsed, in [0, 1).
///
/// Julian days start at 12:00 UTC, so `0.0` is noon and `0.5` is midnight.
#[must_use]
pub fn fractional_day(jd: f64) -> f64 {
    jd - floor(jd)
}

/// Converts a calendar date to a Julian day after validating its components.
///
/// # Arguments
/// * `year` - Year (astronomical numbering, can be zero or negative)
/// * `month` - Month (1-12)
/// * `day` - Day of month with optional fraction (1.0 to below last day + 1)
///
/// # Errors
/// Returns `InvalidDateTime` if the month is outside 1-12, the day is not finite,
/// or the day does not exist in that month of the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::julian_day_from_date;
/// let jd = julian_day_from_date(1957, 10, 4.81).unwrap();
/// assert!((jd - 2_436_116.31).abs() < 1e-6);
/// assert!(julian_day_from_date(2023, 2, 29.0).is_err());
/// ```
pub fn julian_day_from_date(year: i32, month: u32, day: f64) -> Result<f64> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if !day.is_finite() || day < 1.0 {
        return Err(Error::invalid_datetime("day must be at least 1"));
    }
    if day >= f64::from(days_in_month(year, month)) + 1.0 {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }

    Ok(gregorian_date_to_julian_day(
        f64::from(year),
        f64::from(month),
        day,
    ))
}

/// Converts a timezone-aware `DateTime` to a Julian day.
///
/// The instant is converted to UTC first, so equal instants in different zones
/// map to the same Julian day.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::julian_day_from_datetime;
/// # use chrono::{DateTime, FixedOffset};
/// let datetime = "2000-01-01T13:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
/// assert_eq!(julian_day_from_datetime(&datetime), 2_451_545.0);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn julian_day_from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> f64 {
    let utc_datetime = datetime.with_timezone(&chrono::Utc);
    let seconds = f64::from(utc_datetime.num_seconds_from_midnight())
        + f64::from(utc_datetime.nanosecond()) / 1e9;
    let day = f64::from(utc_datetime.day()) + seconds / SECONDS_PER_DAY;

    gregorian_date_to_julian_day(
        f64::from(utc_datetime.year()),
        f64::from(utc_datetime.month()),
        day,
    )
}

/// Converts a timezone-aware `DateTime` to Julian centuries since J2000.0.
#[cfg(feature = "chrono")]
#[must_use]
pub fn julian_century_from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> f64 {
    julian_day_to_century(julian_day_from_datetime(datetime))
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_j2000_epoch() {
        let jd = gregorian_date_to_julian_day(2000.0, 1.0, 1.5);
        assert_eq!(jd, J2000_JDN);
        assert_eq!(julian_day_to_century(jd), 0.0);
    }

    #[test]
    fn test_specific_julian_dates() {
        // Unix epoch: 1970-01-01 00:00:00 UTC
        assert_eq!(gregorian_date_to_julian_day(1970.0, 1.0, 1.0), 2_440_587.5);
        // Sputnik launch
        assert!((gregorian_date_to_julian_day(1957.0, 10.0, 4.81) - 2_436_116.31).abs() < 1e-6);
        assert_eq!(gregorian_date_to_julian_day(1987.0, 1.0, 27.0), 2_446_822.5);
        assert_eq!(gregorian_date_to_julian_day(1988.0, 6.0, 19.5), 2_447_332.0);
        assert_eq!(gregorian_date_to_julian_day(1900.0, 1.0, 1.0), 2_415_020.5);
        assert_eq!(gregorian_date_to_julian_day(1600.0, 1.0, 1.0), 2_305_447.5);
        assert_eq!(gregorian_date_to_julian_day(1600.0, 12.0, 31.0), 2_305_812.5);
    }

    #[test]
    fn test_january_february_use_previous_year() {
        // February 2024 is month 14 of 2023
        let february = gregorian_date_to_julian_day(2024.0, 2.0, 29.25);
        let month_fourteen = gregorian_date_to_julian_day(2023.0, 14.0, 29.25);
        assert_eq!(february, month_fourteen);
        assert_eq!(february, 2_460_369.75);

        let january = gregorian_date_to_julian_day(2000.0, 1.0, 1.5);
        assert_eq!(january, gregorian_date_to_julian_day(1999.0, 13.0, 1.5));
    }

    #[test]
    fn test_consecutive_days_differ_by_one() {
        let last_of_feb = gregorian_date_to_julian_day(2024.0, 2.0, 29.0);
        let first_of_march = gregorian_date_to_julian_day(2024.0, 3.0, 1.0);
        assert_eq!(first_of_march - last_of_feb, 1.0);

        let new_years_eve = gregorian_date_to_julian_day(1999.0, 12.0, 31.0);
        let new_year = gregorian_date_to_julian_day(2000.0, 1.0, 1.0);
        assert_eq!(new_year - new_years_eve, 1.0);
    }

    #[test]
    fn test_century_round_trip() {
        for jd in [1_721_423.5, 2_299_160.5, J2000_JDN, 2_460_482.5, 5_373_484.5] {
            let back = julian_century_to_day(julian_day_to_century(jd));
            assert!(
                (back - jd).abs() <= 1e-9 * jd.abs().max(1.0),
                "round trip drifted for {jd}: {back}"
            );
        }

        for t in [-20.0, -0.5, 0.0, 0.244_695_414, 3.0] {
            let back = julian_day_to_century(julian_century_to_day(t));
            assert!((back - t).abs() < EPSILON);
        }
    }

    #[test]
    fn test_fractional_day() {
        assert_eq!(fractional_day(J2000_JDN), 0.0);
        assert_eq!(fractional_day(2_460_482.5), 0.5);
        assert!((fractional_day(2_460_482.75) - 0.75).abs() < EPSILON);
        assert!((fractional_day(-0.25) - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_julian_day_from_date_validation() {
        assert!(julian_day_from_date(2024, 13, 1.0).is_err());
        assert!(julian_day_from_date(2024, 0, 1.0).is_err());
        assert!(julian_day_from_date(2024, 1, 0.5).is_err());
        assert!(julian_day_from_date(2024, 1, 32.0).is_err());
        assert!(julian_day_from_date(2024, 4, 31.0).is_err());
        assert!(julian_day_from_date(2024, 1, f64::NAN).is_err());

        assert!(julian_day_from_date(2024, 2, 29.0).is_ok());
        assert!(julian_day_from_date(2024, 2, 29.99).is_ok());
        assert!(julian_day_from_date(2023, 2, 29.0).is_err());
        assert!(julian_day_from_date(1900, 2, 29.0).is_err());
        assert!(julian_day_from_date(2000, 2, 29.0).is_ok());
        // Proleptic Gregorian: no 1582 gap
        assert!(julian_day_from_date(1582, 10, 10.0).is_ok());
    }

    #[test]
    fn test_julian_day_from_date_matches_unchecked() {
        let checked = julian_day_from_date(2024, 6, 21.5).unwrap();
        assert_eq!(checked, gregorian_date_to_julian_day(2024.0, 6.0, 21.5));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_julian_day_from_datetime() {
        use chrono::{DateTime, FixedOffset, TimeZone, Utc};

        let utc = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        assert_eq!(julian_day_from_datetime(&utc), 2_460_482.5);

        let fixed = "2024-06-20T17:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(julian_day_from_datetime(&fixed), 2_460_482.5);

        let quarter = Utc.with_ymd_and_hms(2000, 1, 1, 18, 0, 0).unwrap();
        assert!((julian_day_from_datetime(&quarter) - 2_451_545.25).abs() < EPSILON);
        assert!((julian_century_from_datetime(&quarter) - 0.25 / DAYS_PER_CENTURY).abs() < 1e-12);
    }
}
