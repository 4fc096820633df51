//! Error types for the strict (range-checked) layer of the ephemeris API.
//!
//! The formula functions themselves never fail: they return `f64` and let NaN or
//! infinity propagate. Only the `checked_*` wrappers and the validated date
//! constructor produce these errors.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Half-width, in Julian centuries around J2000.0, of the window accepted by
/// [`check_julian_century`] (years 1000 to 3000).
pub const VALID_CENTURY_SPAN: f64 = 10.0;

/// Errors reported by the range-checked API.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Julian century outside the window where the truncated series are trusted.
    InvalidJulianCentury {
        /// The rejected Julian century value.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDateTime {
        /// Description of the date constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidJulianCentury { value } => {
                write!(
                    f,
                    "julian century {value} is outside ±{VALID_CENTURY_SPAN} centuries of J2000.0"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid Julian century error.
    #[must_use]
    pub const fn invalid_julian_century(value: f64) -> Self {
        Self::InvalidJulianCentury { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not a number.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates a Julian century lies within [`VALID_CENTURY_SPAN`] of J2000.0.
///
/// # Errors
/// Returns `InvalidJulianCentury` for non-finite values or values outside the window.
pub fn check_julian_century(t: f64) -> Result<()> {
    if !(-VALID_CENTURY_SPAN..=VALID_CENTURY_SPAN).contains(&t) {
        return Err(Error::invalid_julian_century(t));
    }
    Ok(())
}
