//! The worked example of Reda & Andreas (2003), Table A5.1: Golden, Colorado,
//! 2003-10-17 12:30:30 local standard time (UTC-7).

use solar_spa::{spa, ObserverConfig, TimeOfDay};

fn golden() -> ObserverConfig {
    ObserverConfig {
        year: 2003,
        month: 10,
        day: 17,
        hour: 12,
        minute: 30,
        second: 30.0,
        delta_ut1: 0.0,
        delta_t: 67.0,
        timezone: -7.0,
        longitude: -105.1786,
        latitude: 39.742476,
        elevation: 1830.14,
        pressure: 820.0,
        temperature: 11.0,
        slope: 30.0,
        azm_rotation: -10.0,
        atmos_refract: 0.5667,
    }
}

#[test]
fn test_published_output() {
    let output = spa::calculate(&golden()).unwrap();

    // values as printed by the reference C implementation
    assert!((output.intermediate().geocentric.jd - 2_452_930.312_847).abs() < 1e-6);
    assert!((output.intermediate().geocentric.l - 24.018_262).abs() < 1e-6);
    assert!((output.intermediate().geocentric.b - 359.999_899).abs() < 1e-6);
    assert!((output.intermediate().geocentric.r - 0.996_542).abs() < 1e-6);
    assert!((output.intermediate().h - 11.105_902).abs() < 1e-6);
    assert!((output.intermediate().geocentric.del_psi + 0.003_998).abs() < 1e-6);
    assert!((output.intermediate().geocentric.del_epsilon - 0.001_667).abs() < 1e-6);
    assert!((output.intermediate().geocentric.epsilon - 23.440_465).abs() < 1e-6);

    assert!((output.zenith() - 50.111_622).abs() < 1e-6);
    assert!((output.azimuth() - 194.340_241).abs() < 1e-6);
    assert!((output.position().incidence() - 25.187_000).abs() < 1e-6);
}

#[test]
fn test_published_rise_transit_set() {
    let output = spa::calculate(&golden()).unwrap();
    let rts = output.rise_transit_set();

    assert_eq!(rts.sunrise_time().map(|t| t.as_tuple()), Some((6, 12, 43)));
    assert_eq!(rts.suntransit_time().map(|t| t.as_tuple()), Some((11, 46, 5)));
    assert_eq!(rts.sunset_time().map(|t| t.as_tuple()), Some((17, 20, 19)));
}

#[test]
fn test_intermediate_values_are_consistent() {
    let output = spa::calculate(&golden()).unwrap();
    let i = output.intermediate();
    let geo = &i.geocentric;

    assert!((geo.jde - geo.jd - 67.0 / 86_400.0).abs() < 1e-9);
    assert!((geo.jme - geo.jce / 10.0).abs() < 1e-15);
    assert!((geo.theta - (geo.l + 180.0)).abs() < 1e-9);
    assert!((geo.epsilon - (geo.epsilon0 / 3600.0 + geo.del_epsilon)).abs() < 1e-12);
    assert!((geo.lamda - (geo.theta + geo.del_psi + geo.del_tau)).abs() < 1e-12);
    assert!((i.alpha_prime - (geo.alpha + i.del_alpha)).abs() < 1e-12);
    assert!((i.h_prime - (i.h - i.del_alpha)).abs() < 1e-12);
    assert!((i.e - (i.e0 + i.del_e)).abs() < 1e-12);
    assert!((output.zenith() - (90.0 - i.e)).abs() < 1e-12);
    assert!(
        (output.position().azimuth() - (output.position().azimuth_astronomer() + 180.0) % 360.0)
            .abs()
            < 1e-9
    );
}

#[test]
fn test_dut1_and_utc_time_are_equivalent() {
    let local = spa::calculate(&golden()).unwrap();

    let utc = spa::calculate(&golden().with_time(19, 30, 30.0).with_timezone(0.0)).unwrap();
    assert!((local.zenith() - utc.zenith()).abs() < 1e-9);
    assert!((local.azimuth() - utc.azimuth()).abs() < 1e-9);

    // ΔUT1 shifts the instant by fractions of a second only
    let shifted = spa::calculate(&ObserverConfig {
        delta_ut1: 0.9,
        ..golden()
    })
    .unwrap();
    assert!((local.zenith() - shifted.zenith()).abs() < 0.01);
    assert!(local.zenith() != shifted.zenith());
}

#[test]
fn test_derived_delta_t() {
    // 32.184 + 34.816 - 0.0 = 67.0
    let config = golden().with_tai_minus_utc(34.816);
    assert!((config.delta_t - 67.0).abs() < 1e-12);

    let output = spa::calculate(&config).unwrap();
    assert!((output.zenith() - 50.111_622).abs() < 1e-6);
}

#[test]
fn test_time_of_day_conversion() {
    let to_tuple = |hours| TimeOfDay::from_fractional_hours(hours).map(|t| t.as_tuple());

    assert_eq!(to_tuple(6.5), Some((6, 30, 0)));
    assert_eq!(to_tuple(23.999_722), Some((23, 59, 59)));
    assert_eq!(to_tuple(23.9999), Some((0, 0, 0)));
    assert_eq!(to_tuple(-99999.0), None);
}
