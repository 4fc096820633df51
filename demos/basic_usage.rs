//! Basic solar ephemeris example.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use solar_ephemeris::{SolarEphemeris, cos_solar_zenith_angle_at};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Snapshot using FixedOffset timezone
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: Same time using UTC
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap(); // 19:00 UTC = 12:00 PDT
    let latitude = 37.7749; // San Francisco

    let sun_fixed = SolarEphemeris::from_datetime(&datetime_fixed);
    let sun_utc = SolarEphemeris::from_datetime(&datetime_utc);

    println!("Solar ephemeris on June 21, 2023 at noon Pacific Time:");
    println!("  Julian century: {:.9}", sun_fixed.julian_century());
    println!("  True longitude: {:.4}°", sun_fixed.true_longitude() % 360.0);
    println!("  Right ascension: {:.4}°", sun_fixed.right_ascension());
    println!("  Declination: {:.4}°", sun_fixed.declination());
    println!("  Distance: {:.6} AU", sun_fixed.radius_vector());
    println!("  Obliquity: {:.6}°", sun_fixed.obliquity());

    println!(
        "\nBoth timezones produce identical results: {}",
        sun_fixed == sun_utc
    );

    // Zenith-angle cosine with latitude validation
    let mu = cos_solar_zenith_angle_at(&datetime_utc, latitude)?;
    println!("\nSan Francisco ({latitude}°N):");
    println!("  cos(zenith): {mu:.4}");
    if sun_utc.is_daylight(latitude) {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    // Invalid latitudes are rejected by the checked entry points
    if let Err(error) = cos_solar_zenith_angle_at(&datetime_utc, 91.0) {
        println!("  Rejected: {error}");
    }

    // Example 3: Daily maximum over a week at several latitudes
    println!("\nNoon cos(zenith) in the week of the December solstice:");
    let start = Utc.with_ymd_and_hms(2023, 12, 18, 12, 0, 0).unwrap();
    for day in 0..7 {
        let datetime = start + Duration::days(day);
        let sun = SolarEphemeris::from_datetime(&datetime);
        println!(
            "  {}  equator {:.4}  45°N {:.4}  70°N {:.4}",
            datetime.format("%Y-%m-%d"),
            sun.cos_zenith_angle_noon(0.0),
            sun.cos_zenith_angle_noon(45.0),
            sun.cos_zenith_angle_noon(70.0),
        );
    }

    Ok(())
}
