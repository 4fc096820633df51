//! Example demonstrating usage without std/chrono dependencies.
//!
//! This shows how to use the library in no_std environments where
//! users handle their own time conversions.

use solar_ephemeris::{
    SolarEphemeris, checked_cos_solar_zenith_angle, cos_solar_zenith_angle,
    cos_solar_zenith_angle_noon, julian_day_from_date, julian_day_to_century,
    sin_solar_declination, solar_radius_vector,
};

fn main() {
    // Example: 2024-06-21 12:00:00 UTC
    // Vienna: 48.21°N

    println!("Solar ephemeris without std/chrono dependencies\n");

    // Create Julian day from calendar components (day fraction carries the time)
    let jd = julian_day_from_date(2024, 6, 21.5).expect("Valid date");
    let t = julian_day_to_century(jd);

    println!("Julian Day: {jd:.6}");
    println!("Julian century: {t:.9}\n");

    // Individual series, each recomputed from t
    println!("Free functions:");
    println!("  sin(declination): {:.6}", sin_solar_declination(t));
    println!("  Distance: {:.6} AU", solar_radius_vector(t));
    println!("  cos(zenith): {:.6}", cos_solar_zenith_angle(t, 48.21));
    println!("  cos(zenith) at noon: {:.6}\n", cos_solar_zenith_angle_noon(t, 48.21));

    // Snapshot evaluates the shared terms once
    let sun = SolarEphemeris::from_julian_day(jd);
    println!("Snapshot:");
    println!("  Declination: {:.4}°", sun.declination());
    println!("  Right ascension: {:.4}°", sun.right_ascension());
    println!("  Equation of center: {:.4}°", sun.equation_of_center());
    println!("  Eccentricity: {:.9}\n", sun.eccentricity());

    // Checked variant validates inputs
    match checked_cos_solar_zenith_angle(t, 120.0) {
        Ok(mu) => println!("Unexpected value: {mu}"),
        Err(error) => println!("Rejected: {error}"),
    }
    match julian_day_from_date(2023, 2, 29.0) {
        Ok(jd) => println!("Unexpected Julian day: {jd}"),
        Err(error) => println!("Rejected: {error}"),
    }
}
