#![cfg(feature = "chrono")]
//! Filling an `ObserverConfig` from chrono date-times.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use solar_spa::{spa, validate_inputs, ObserverConfig};

fn golden_site() -> ObserverConfig {
    ObserverConfig::default()
        .with_location(39.742476, -105.1786, 1830.14)
        .with_atmosphere(820.0, 11.0)
        .with_surface(30.0, -10.0)
        .with_delta_t(67.0)
}

#[test]
fn test_fixed_offset_datetime() {
    let datetime = "2003-10-17T12:30:30-07:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let config = golden_site().with_datetime(&datetime);

    assert_eq!((config.year, config.month, config.day), (2003, 10, 17));
    assert_eq!((config.hour, config.minute), (12, 30));
    assert_eq!(config.second, 30.0);
    assert_eq!(config.timezone, -7.0);

    let output = spa::calculate(&config).unwrap();
    assert!((output.zenith() - 50.111_622).abs() < 1e-6);
    assert!((output.azimuth() - 194.340_241).abs() < 1e-6);
}

#[test]
fn test_same_instant_in_different_zones() {
    let local = "2003-10-17T12:30:30-07:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let utc = Utc.with_ymd_and_hms(2003, 10, 17, 19, 30, 30).unwrap();

    let from_local = spa::calculate(&golden_site().with_datetime(&local)).unwrap();
    let from_utc = spa::calculate(&golden_site().with_datetime(&utc)).unwrap();

    assert!((from_local.zenith() - from_utc.zenith()).abs() < 1e-9);
    assert!((from_local.azimuth() - from_utc.azimuth()).abs() < 1e-9);

    // sunrise and sunset are reported in the zone of the date-time
    let local_rts = from_local.rise_transit_set();
    let utc_rts = from_utc.rise_transit_set();
    assert!((utc_rts.sunrise() - local_rts.sunrise() - 7.0).abs() < 1e-9);
}

#[test]
fn test_fractional_offset_and_seconds() {
    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let datetime = ist
        .from_local_datetime(
            &NaiveDate::from_ymd_opt(2024, 3, 20)
                .unwrap()
                .and_hms_milli_opt(6, 15, 42, 250)
                .unwrap(),
        )
        .unwrap();

    let config = ObserverConfig::default().with_datetime(&datetime);
    assert_eq!(config.timezone, 5.5);
    assert_eq!((config.hour, config.minute), (6, 15));
    assert!((config.second - 42.25).abs() < 1e-12);
    assert_eq!(validate_inputs(&config), 0);
}

#[test]
fn test_leap_second_stays_valid() {
    let datetime = NaiveDate::from_ymd_opt(2016, 12, 31)
        .unwrap()
        .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
        .unwrap()
        .and_utc();

    let config = ObserverConfig::default().with_datetime(&datetime);
    assert!(config.second < 60.0);
    assert_eq!(validate_inputs(&config), 0);
}
