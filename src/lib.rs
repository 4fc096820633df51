//! # Solar Ephemeris Library
//!
//! Low-accuracy solar coordinates and illumination geometry from the truncated
//! series in Jean Meeus, *Astronomical Algorithms* (2nd ed., chapters 7, 22 and 25).

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Starting from a calendar date, the crate computes the Julian day, the time in
//! Julian centuries since J2000.0, the Sun's mean and true longitude and anomaly,
//! Earth's orbital eccentricity, the Sun-Earth distance, the mean obliquity of the
//! ecliptic, and from these the Sun's declination and the cosine of its zenith
//! angle at a given latitude. Accuracy is about 0.01° within a few centuries of
//! J2000.0, which suits climate models, irradiance estimates and day/night masks.
//!
//! ## Features
//!
//! - Pure functions: every quantity is an independent `f64 -> f64` call with no
//!   state, safe to call from any thread
//! - Total: out-of-range input yields extrapolated values or NaN, never a panic;
//!   `checked_*` wrappers reject latitudes outside ±90° and instants far from J2000.0
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via
//!   native or `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-ephemeris = "0.1"
//!
//! # Minimal std (no chrono)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_ephemeris::{
//!     cos_solar_zenith_angle_noon, gregorian_date_to_julian_day, julian_day_to_century,
//!     sin_solar_declination, solar_radius_vector,
//! };
//!
//! // 2024-06-21 00:00 UTC
//! let jd = gregorian_date_to_julian_day(2024.0, 6.0, 21.0);
//! let t = julian_day_to_century(jd);
//!
//! let declination = sin_solar_declination(t).asin().to_degrees();
//! assert!((declination - 23.436).abs() < 0.01);
//!
//! // Sun-Earth distance near aphelion
//! assert!(solar_radius_vector(t) > 1.016);
//!
//! // Highest Sun of the day in Vienna
//! let mu = cos_solar_zenith_angle_noon(t, 48.21);
//! assert!((mu - 0.908).abs() < 1e-3);
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use solar_ephemeris::SolarEphemeris;
//!
//! let datetime = "2024-12-21T13:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let sun = SolarEphemeris::from_datetime(&datetime);
//!
//! println!("Declination: {:.3}°", sun.declination());
//! println!("Right ascension: {:.3}°", sun.right_ascension());
//! println!("Distance: {:.5} AU", sun.radius_vector());
//! assert!(sun.is_daylight(48.21));
//! # }
//! ```
//!
//! ## Conventions
//!
//! - `t` is always Julian centuries since J2000.0 (JD 2451545.0, 2000-01-01 12:00 UTC)
//! - Longitudes, anomalies, obliquity and latitudes are in degrees; longitudes and
//!   anomalies are not reduced to [0, 360)
//! - Zenith-angle cosines are clamped to [0, 1]: the Sun below the horizon gives `0.0`
//! - The hour angle is taken from the Julian-day fraction, so local solar noon is
//!   assumed at 12:00 UTC

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::sun::{
    earth_eccen, obliquity_of_ecliptic, sin_solar_declination, solar_declination,
    solar_eq_of_center, solar_mean_anomaly, solar_mean_longitude, solar_radius_vector,
    solar_radius_vector_with_eccentricity, solar_right_ascension, solar_true_anomaly,
    solar_true_longitude, tan_solar_right_ascension,
};
pub use crate::time::{
    gregorian_date_to_julian_day, julian_century_to_day, julian_day_from_date,
    julian_day_to_century,
};
pub use crate::types::SolarEphemeris;
#[cfg(feature = "chrono")]
pub use crate::zenith::cos_solar_zenith_angle_at;
pub use crate::zenith::{
    checked_cos_solar_zenith_angle, checked_cos_solar_zenith_angle_noon,
    cos_solar_zenith_angle, cos_solar_zenith_angle_noon,
};

// Formula modules
pub mod sun;
pub mod zenith;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
