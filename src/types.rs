//! Snapshot of every solar quantity at a single instant.

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, sin,
};
use crate::sun::{
    earth_eccen, obliquity_of_ecliptic, solar_eq_of_center, solar_mean_anomaly,
    solar_mean_longitude, solar_radius_vector_with_eccentricity,
};
use crate::time::julian_day_to_century;
use crate::zenith::{cos_hour_angle, cos_zenith};

/// Solar ephemeris quantities evaluated once for an instant.
///
/// The free functions in [`crate::sun`] each recompute the chain of dependencies
/// they need. This type evaluates the mean elements, equation of center and
/// obliquity a single time and derives the rest from them, with the same results.
///
/// # Example
/// ```
/// # use solar_ephemeris::SolarEphemeris;
/// let sun = SolarEphemeris::at_century(0.0);
/// assert!((sun.obliquity() - 23.439291).abs() < 1e-6);
/// assert!(sun.declination() < -23.0); // early January
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    /// Julian centuries since J2000.0
    t: f64,
    /// Geometric mean longitude in degrees
    mean_longitude: f64,
    /// Mean anomaly in degrees
    mean_anomaly: f64,
    /// Equation of the center in degrees
    equation_of_center: f64,
    /// Orbital eccentricity
    eccentricity: f64,
    /// Mean obliquity of the ecliptic in degrees
    obliquity: f64,
}

impl SolarEphemeris {
    /// Evaluates the ephemeris at `t` Julian centuries since J2000.0.
    #[must_use]
    pub fn at_century(t: f64) -> Self {
        Self {
            t,
            mean_longitude: solar_mean_longitude(t),
            mean_anomaly: solar_mean_anomaly(t),
            equation_of_center: solar_eq_of_center(t),
            eccentricity: earth_eccen(t),
            obliquity: obliquity_of_ecliptic(t),
        }
    }

    /// Evaluates the ephemeris at a Julian day.
    #[must_use]
    pub fn from_julian_day(jd: f64) -> Self {
        Self::at_century(julian_day_to_century(jd))
    }

    /// Evaluates the ephemeris at a timezone-aware `DateTime`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: chrono::TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        Self::at_century(crate::time::julian_century_from_datetime(datetime))
    }

    /// Julian centuries since J2000.0.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.t
    }

    /// Geometric mean longitude in degrees (not normalized).
    #[must_use]
    pub const fn mean_longitude(&self) -> f64 {
        self.mean_longitude
    }

    /// Mean anomaly in degrees (not normalized).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Equation of the center in degrees.
    #[must_use]
    pub const fn equation_of_center(&self) -> f64 {
        self.equation_of_center
    }

    /// Eccentricity of Earth's orbit.
    #[must_use]
    pub const fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Mean obliquity of the ecliptic in degrees.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }

    /// True longitude in degrees (not normalized).
    #[must_use]
    pub const fn true_longitude(&self) -> f64 {
        self.mean_longitude + self.equation_of_center
    }

    /// True anomaly in degrees (not normalized).
    #[must_use]
    pub const fn true_anomaly(&self) -> f64 {
        self.mean_anomaly + self.equation_of_center
    }

    /// Sun-Earth distance in AU.
    #[must_use]
    pub fn radius_vector(&self) -> f64 {
        solar_radius_vector_with_eccentricity(self.t, self.eccentricity)
    }

    /// Sine of the declination.
    #[must_use]
    pub fn sin_declination(&self) -> f64 {
        sin(degrees_to_radians(self.obliquity)) * sin(degrees_to_radians(self.true_longitude()))
    }

    /// Declination in degrees.
    #[must_use]
    pub fn declination(&self) -> f64 {
        radians_to_degrees(asin(self.sin_declination().clamp(-1.0, 1.0)))
    }

    /// Tangent of the right ascension.
    #[must_use]
    pub fn tan_right_ascension(&self) -> f64 {
        let (numerator, denominator) = self.right_ascension_components();
        numerator / denominator
    }

    /// Right ascension in degrees [0, 360).
    #[must_use]
    pub fn right_ascension(&self) -> f64 {
        let (numerator, denominator) = self.right_ascension_components();
        normalize_degrees_0_to_360(radians_to_degrees(atan2(numerator, denominator)))
    }

    /// Cosine of the zenith angle at `latitude` (degrees), clamped to [0, 1].
    #[must_use]
    pub fn cos_zenith_angle(&self, latitude: f64) -> f64 {
        cos_zenith(self.sin_declination(), latitude, cos_hour_angle(self.t))
    }

    /// Cosine of the zenith angle at local solar noon, clamped to [0, 1].
    #[must_use]
    pub fn cos_zenith_angle_noon(&self, latitude: f64) -> f64 {
        cos_zenith(self.sin_declination(), latitude, 1.0)
    }

    /// Checks if the Sun is above the horizon at `latitude`.
    #[must_use]
    pub fn is_daylight(&self, latitude: f64) -> bool {
        self.cos_zenith_angle(latitude) > 0.0
    }

    /// (cos ε · sin λ, cos λ)
    fn right_ascension_components(&self) -> (f64, f64) {
        let lambda = degrees_to_radians(self.true_longitude());
        (cos(degrees_to_radians(self.obliquity)) * sin(lambda), cos(lambda))
    }
}
