//! Invariants of the ephemeris chain over grids of instants and latitudes.

use solar_ephemeris::{
    SolarEphemeris, cos_solar_zenith_angle, cos_solar_zenith_angle_noon, earth_eccen,
    gregorian_date_to_julian_day, julian_century_to_day, julian_day_to_century,
    obliquity_of_ecliptic, sin_solar_declination, solar_eq_of_center, solar_radius_vector,
    solar_radius_vector_with_eccentricity, solar_true_anomaly, tan_solar_right_ascension,
};

const LATITUDES: [f64; 11] = [
    -90.0, -75.0, -60.0, -45.0, -23.44, 0.0, 23.44, 45.0, 60.0, 75.0, 90.0,
];

/// Instants every 7.3 hours through the year 2020.
fn year_grid() -> impl Iterator<Item = f64> {
    let start = julian_day_to_century(gregorian_date_to_julian_day(2020.0, 1.0, 1.0));
    (0..1200).map(move |i| start + f64::from(i) * 7.3 / 24.0 / 36_525.0)
}

#[test]
fn century_round_trip_holds_for_any_julian_day() {
    let mut jd = 1.0e5;
    while jd < 1.0e7 {
        let back = julian_century_to_day(julian_day_to_century(jd));
        assert!(
            (back - jd).abs() <= 1e-9 * jd.abs(),
            "jd={jd} came back as {back}"
        );
        jd += 12_345.678;
    }
}

#[test]
fn january_and_february_match_month_thirteen_and_fourteen() {
    for year in [1601.0, 1900.0, 1999.0, 2000.0, 2024.0, 2100.0] {
        for day in [1.0, 15.25, 28.75] {
            assert_eq!(
                gregorian_date_to_julian_day(year, 1.0, day),
                gregorian_date_to_julian_day(year - 1.0, 13.0, day)
            );
            assert_eq!(
                gregorian_date_to_julian_day(year, 2.0, day),
                gregorian_date_to_julian_day(year - 1.0, 14.0, day)
            );
        }
    }
}

#[test]
fn zenith_cosines_are_clamped_and_noon_is_maximal() {
    for t in year_grid() {
        for lat in LATITUDES {
            let instant = cos_solar_zenith_angle(t, lat);
            let noon = cos_solar_zenith_angle_noon(t, lat);

            assert!((0.0..=1.0).contains(&instant), "t={t} lat={lat}: {instant}");
            assert!((0.0..=1.0).contains(&noon), "t={t} lat={lat}: {noon}");
            assert!(noon >= instant - 1e-12, "t={t} lat={lat}");
        }
    }
}

#[test]
fn clamped_values_are_exactly_zero() {
    // Polar night: the unclamped term is strongly negative all day.
    let t = julian_day_to_century(gregorian_date_to_julian_day(2024.0, 12.0, 21.0));
    for hour in 0..24 {
        let t = t + f64::from(hour) / 24.0 / 36_525.0;
        assert_eq!(cos_solar_zenith_angle(t, 85.0), 0.0);
        assert_eq!(cos_solar_zenith_angle_noon(t, 85.0), 0.0);
        assert_eq!(cos_solar_zenith_angle(t, 90.0), 0.0);
    }
}

#[test]
fn declination_sine_stays_bounded_for_centuries() {
    let mut t = -5.0;
    while t <= 5.0 {
        let sin_delta = sin_solar_declination(t);
        assert!((-1.0..=1.0).contains(&sin_delta), "t={t}");
        assert!(sin_delta.abs() <= 0.41, "t={t}: {sin_delta}");
        t += 0.0137;
    }
}

#[test]
fn equation_of_center_under_two_and_a_half_degrees() {
    let mut max = 0.0_f64;
    let mut t = -2.0;
    while t <= 2.0 {
        max = max.max(solar_eq_of_center(t).abs());
        t += 0.000_73;
    }
    assert!(max < 2.5, "max |C| = {max}");
    // The amplitude of the leading term is ~1.915°
    assert!(max > 1.9, "max |C| = {max}");
}

#[test]
fn epoch_constants() {
    assert!((earth_eccen(0.0) - 0.016_708_634).abs() < 1e-15);
    assert!((obliquity_of_ecliptic(0.0) - 23.439_291_111).abs() < 1e-9);
}

#[test]
fn radius_vector_follows_true_anomaly() {
    for t in year_grid().step_by(10) {
        let r = solar_radius_vector(t);
        let e = earth_eccen(t);
        assert!(
            r >= 1.000_001_018 * (1.0 - e) - 1e-12 && r <= 1.000_001_018 * (1.0 + e) + 1e-12,
            "t={t} r={r}"
        );

        // Perihelion at ν = 0°, aphelion at ν = 180°
        let nu = solar_true_anomaly(t).rem_euclid(360.0);
        if nu < 10.0 || nu > 350.0 {
            assert!(r < 0.984, "t={t} ν={nu} r={r}");
        }
        if (170.0..190.0).contains(&nu) {
            assert!(r > 1.016, "t={t} ν={nu} r={r}");
        }
    }
}

#[test]
fn radius_vector_with_unit_eccentricity_is_always_zero() {
    for t in year_grid().step_by(25) {
        assert_eq!(solar_radius_vector_with_eccentricity(t, 1.0), 0.0);
        assert!(solar_radius_vector(t) > 0.98);
    }
}

#[test]
fn tangent_of_right_ascension_keeps_quadrant_ambiguity() {
    // λ and λ + 180° share a tangent: the ratio alone cannot tell them apart.
    let sun = SolarEphemeris::at_century(0.0);
    let tan_alpha = tan_solar_right_ascension(0.0);
    let alpha = sun.right_ascension().to_radians();
    let flipped = (sun.right_ascension() + 180.0).to_radians();
    assert!((alpha.tan() - tan_alpha).abs() < 1e-9);
    assert!((flipped.tan() - tan_alpha).abs() < 1e-9);
}

#[test]
fn snapshot_agrees_with_free_functions_across_year() {
    for t in year_grid().step_by(7) {
        let sun = SolarEphemeris::at_century(t);
        assert_eq!(sun.sin_declination(), sin_solar_declination(t));
        assert_eq!(sun.radius_vector(), solar_radius_vector(t));
        for lat in LATITUDES {
            assert_eq!(sun.cos_zenith_angle(lat), cos_solar_zenith_angle(t, lat));
            assert_eq!(sun.is_daylight(lat), cos_solar_zenith_angle(t, lat) > 0.0);
        }
    }
}

#[test]
fn non_finite_input_propagates() {
    assert!(solar_eq_of_center(f64::NAN).is_nan());
    assert!(sin_solar_declination(f64::NAN).is_nan());
    assert!(solar_radius_vector(f64::INFINITY).is_nan());
    assert!(julian_day_to_century(f64::INFINITY).is_infinite());
    assert!(gregorian_date_to_julian_day(f64::NAN, 1.0, 1.0).is_nan());
}
