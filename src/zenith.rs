//! Cosine of the solar zenith angle for a latitude and instant.
//!
//! The hour angle is approximated from the Julian-day fraction alone: a fraction
//! of `0.0` (12:00 UTC) is treated as local solar noon. That is exact on the
//! Greenwich meridian (ignoring the equation of time) and models the diurnal
//! cycle elsewhere without a longitude correction.
//!
//! Results are clamped at zero, so the Sun below the horizon yields `0.0` rather
//! than a negative cosine.

use crate::Result;
use crate::error::{check_julian_century, check_latitude};
use crate::math::{PI, cos, degrees_to_radians, sin, sqrt};
use crate::sun::sin_solar_declination;
use crate::time::{fractional_day, julian_century_to_day};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Cosine of the solar zenith angle at latitude `lat` (degrees) and instant `t`
/// (Julian centuries since J2000.0), clamped to [0, 1].
///
/// # Example
/// ```
/// # use solar_ephemeris::zenith::cos_solar_zenith_angle;
/// // 2024-06-21 00:00 UTC is midnight on the prime meridian
/// assert_eq!(cos_solar_zenith_angle(0.244695414, 45.0), 0.0);
/// ```
#[must_use]
pub fn cos_solar_zenith_angle(t: f64, lat: f64) -> f64 {
    cos_zenith(sin_solar_declination(t), lat, cos_hour_angle(t))
}

/// Cosine of the solar zenith angle at local solar noon of the day containing
/// `t`, clamped to [0, 1].
///
/// This is the daily maximum of [`cos_solar_zenith_angle`] for the same latitude.
#[must_use]
pub fn cos_solar_zenith_angle_noon(t: f64, lat: f64) -> f64 {
    cos_zenith(sin_solar_declination(t), lat, 1.0)
}

/// Range-checked [`cos_solar_zenith_angle`].
///
/// # Errors
/// Returns `InvalidLatitude` for latitudes outside ±90° and `InvalidJulianCentury`
/// when `t` is outside the trusted window around J2000.0.
pub fn checked_cos_solar_zenith_angle(t: f64, lat: f64) -> Result<f64> {
    check_julian_century(t)?;
    check_latitude(lat)?;
    Ok(cos_solar_zenith_angle(t, lat))
}

/// Range-checked [`cos_solar_zenith_angle_noon`].
///
/// # Errors
/// Returns `InvalidLatitude` for latitudes outside ±90° and `InvalidJulianCentury`
/// when `t` is outside the trusted window around J2000.0.
pub fn checked_cos_solar_zenith_angle_noon(t: f64, lat: f64) -> Result<f64> {
    check_julian_century(t)?;
    check_latitude(lat)?;
    Ok(cos_solar_zenith_angle_noon(t, lat))
}

/// [`checked_cos_solar_zenith_angle`] for a timezone-aware `DateTime`.
///
/// # Errors
/// Same as [`checked_cos_solar_zenith_angle`].
///
/// # Example
/// ```
/// # use solar_ephemeris::zenith::cos_solar_zenith_angle_at;
/// # use chrono::{DateTime, Utc};
/// let noon = "2024-03-20T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let mu = cos_solar_zenith_angle_at(&noon, 0.0).unwrap();
/// assert!(mu > 0.999);
/// ```
#[cfg(feature = "chrono")]
pub fn cos_solar_zenith_angle_at<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    lat: f64,
) -> Result<f64> {
    checked_cos_solar_zenith_angle(crate::time::julian_century_from_datetime(datetime), lat)
}

/// Cosine of the hour angle taken from the fraction of the Julian day.
pub(crate) fn cos_hour_angle(t: f64) -> f64 {
    let jd = julian_century_to_day(t);
    cos(2.0 * PI * fractional_day(jd))
}

/// sin φ · sin δ + cos φ · cos δ · cos H, clamped at zero.
/// NaN is propagated, not clamped.
pub(crate) fn cos_zenith(sin_delta: f64, lat: f64, cos_hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(lat);
    let cos_delta = sqrt(1.0 - sin_delta * sin_delta);
    let mu = sin(phi) * sin_delta + cos(phi) * cos_delta * cos_hour_angle;
    if mu < 0.0 { 0.0 } else { mu }
}
