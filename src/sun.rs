//! Geocentric solar coordinates from truncated series.
//!
//! Formulas follow Meeus, *Astronomical Algorithms* (2nd ed.), chapters 22 and 25
//! ("low accuracy" solar coordinates, about 0.01°). Every function takes `t`, the
//! time in Julian centuries since J2000.0 (see [`crate::time::julian_day_to_century`]).
//!
//! Longitudes, anomalies and obliquity are returned in degrees and are not
//! normalized. They are converted to radians immediately before any trigonometric
//! call.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin,
};

/// Geometric mean longitude of the Sun, degrees.
const MEAN_LONGITUDE_COEFFS: &[f64] = &[280.46646, 36000.76983, 0.0003032];

/// Mean anomaly of the Sun, degrees.
const MEAN_ANOMALY_COEFFS: &[f64] = &[357.52911, 35999.05029, -0.0001537];

/// Eccentricity of Earth's orbit.
const ECCENTRICITY_COEFFS: &[f64] = &[0.016708634, -0.000042037, -0.0000001267];

/// Amplitudes of the sin M, sin 2M and sin 3M terms of the equation of center, degrees.
const EQ_OF_CENTER_COEFFS: [&[f64]; 3] = [
    &[1.914602, -0.004817, -0.000014],
    &[0.019993, -0.000101],
    &[0.000289],
];

/// Mean obliquity of the ecliptic in arcseconds (23°26'21.448" at J2000.0).
const OBLIQUITY_COEFFS: &[f64] = &[84381.448, -46.8150, -0.00059, 0.001813];

/// Semi-major axis of Earth's orbit, AU.
const SEMI_MAJOR_AXIS_AU: f64 = 1.000001018;

/// Arcseconds per degree.
const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// Geometric mean longitude of the Sun, referred to the mean equinox of the date.
///
/// Returns degrees, not reduced to [0, 360).
#[must_use]
pub fn solar_mean_longitude(t: f64) -> f64 {
    polynomial(MEAN_LONGITUDE_COEFFS, t)
}

/// Mean anomaly of the Sun in degrees, not reduced to [0, 360).
#[must_use]
pub fn solar_mean_anomaly(t: f64) -> f64 {
    polynomial(MEAN_ANOMALY_COEFFS, t)
}

/// Eccentricity of Earth's orbit (dimensionless).
///
/// The quadratic fit is only meaningful within a few centuries of J2000.0.
#[must_use]
pub fn earth_eccen(t: f64) -> f64 {
    polynomial(ECCENTRICITY_COEFFS, t)
}

/// Equation of the center in degrees: the difference between true and mean
/// anomaly (or longitude).
///
/// # Example
/// ```
/// # use solar_ephemeris::sun::solar_eq_of_center;
/// // Meeus example 25.a, 1992 October 13.0 TD
/// let c = solar_eq_of_center(-0.072183436);
/// assert!((c + 1.89732).abs() < 1e-5);
/// ```
#[must_use]
pub fn solar_eq_of_center(t: f64) -> f64 {
    let m = degrees_to_radians(solar_mean_anomaly(t));

    EQ_OF_CENTER_COEFFS
        .iter()
        .zip(1_u8..)
        .map(|(amplitude, harmonic)| polynomial(amplitude, t) * sin(f64::from(harmonic) * m))
        .sum()
}

/// True geometric longitude of the Sun in degrees, not reduced to [0, 360).
#[must_use]
pub fn solar_true_longitude(t: f64) -> f64 {
    solar_mean_longitude(t) + solar_eq_of_center(t)
}

/// True anomaly of the Sun in degrees, not reduced to [0, 360).
#[must_use]
pub fn solar_true_anomaly(t: f64) -> f64 {
    solar_mean_anomaly(t) + solar_eq_of_center(t)
}

/// Distance between the centers of the Sun and Earth, in AU.
///
/// R = a(1 − e²) / (1 + e·cos ν) with e from [`earth_eccen`].
///
/// # Example
/// ```
/// # use solar_ephemeris::sun::solar_radius_vector;
/// // Meeus example 25.a
/// assert!((solar_radius_vector(-0.072183436) - 0.99766).abs() < 1e-5);
/// ```
#[must_use]
pub fn solar_radius_vector(t: f64) -> f64 {
    solar_radius_vector_with_eccentricity(t, earth_eccen(t))
}

/// Conic-section radius vector for an explicit eccentricity, in AU.
///
/// With `eccentricity = 1.0` the numerator vanishes and the result is `0.0` for
/// every `t` (NaN where the true anomaly is exactly 180°).
#[must_use]
pub fn solar_radius_vector_with_eccentricity(t: f64, eccentricity: f64) -> f64 {
    let nu = degrees_to_radians(solar_true_anomaly(t));
    SEMI_MAJOR_AXIS_AU * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * cos(nu))
}

/// Mean obliquity of the ecliptic in degrees, without nutation.
///
/// # Example
/// ```
/// # use solar_ephemeris::sun::obliquity_of_ecliptic;
/// // 23°26'21.448"
/// assert!((obliquity_of_ecliptic(0.0) - 23.439291111).abs() < 1e-9);
/// ```
#[must_use]
pub fn obliquity_of_ecliptic(t: f64) -> f64 {
    polynomial(OBLIQUITY_COEFFS, t) / ARCSECONDS_PER_DEGREE
}

/// Tangent of the Sun's right ascension: cos ε · sin λ / cos λ.
///
/// Only the ratio is returned, so the quadrant is lost. Use
/// [`solar_right_ascension`] when the angle itself is needed.
#[must_use]
pub fn tan_solar_right_ascension(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_of_ecliptic(t));
    let lambda = degrees_to_radians(solar_true_longitude(t));
    cos(epsilon) * sin(lambda) / cos(lambda)
}

/// Sine of the Sun's declination: sin ε · sin λ.
///
/// Not clamped; clamp to [-1, 1] before taking `asin` (as [`solar_declination`] does).
#[must_use]
pub fn sin_solar_declination(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_of_ecliptic(t));
    let lambda = degrees_to_radians(solar_true_longitude(t));
    sin(epsilon) * sin(lambda)
}

/// Right ascension of the Sun in degrees [0, 360), quadrant resolved with atan2.
#[must_use]
pub fn solar_right_ascension(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_of_ecliptic(t));
    let lambda = degrees_to_radians(solar_true_longitude(t));
    let alpha = atan2(cos(epsilon) * sin(lambda), cos(lambda));
    normalize_degrees_0_to_360(radians_to_degrees(alpha))
}

/// Declination of the Sun in degrees.
#[must_use]
pub fn solar_declination(t: f64) -> f64 {
    radians_to_degrees(asin(sin_solar_declination(t).clamp(-1.0, 1.0)))
}
