//! Time base conversions for the SPA pipeline.
//!
//! Calendar date and civil time are converted to a Julian Day, from which the
//! Julian Century, Julian Ephemeris Day/Century/Millennium follow by affine
//! transforms (Reda & Andreas 2003, section 3.1).

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::floor;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 TT)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Raw Julian Days above this value are Gregorian calendar dates.
const GREGORIAN_THRESHOLD: f64 = 2_299_160.0;

/// Offset between TT and TAI in seconds.
const TT_MINUS_TAI: f64 = 32.184;

/// Computes ΔT (TT − UT1) from TAI−UTC and UT1−UTC, both in seconds.
///
/// # Example
/// ```
/// # use solar_spa::time::delta_t_from_offsets;
/// assert!((delta_t_from_offsets(37.0, 0.1) - 69.084).abs() < 1e-12);
/// ```
#[must_use]
pub fn delta_t_from_offsets(tai_minus_utc: f64, delta_ut1: f64) -> f64 {
    TT_MINUS_TAI + tai_minus_utc - delta_ut1
}

/// Calculates the Julian Day for a local calendar date and time.
///
/// `dut1` (UT1 − UTC) is added to the seconds and `timezone` (hours east of
/// Greenwich) is subtracted from the hour. January and February count as
/// months 13 and 14 of the previous year; the Gregorian correction applies
/// when the uncorrected day exceeds 2299160.
///
/// # Example
/// ```
/// # use solar_spa::time::julian_day;
/// let jd = julian_day(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0);
/// assert_eq!(jd, 2_451_545.0);
/// ```
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn julian_day(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    dut1: f64,
    timezone: f64,
) -> f64 {
    let mut y = year;
    let mut m = month;

    let day_decimal = f64::from(day)
        + (f64::from(hour) - timezone + (f64::from(minute) + (second + dut1) / 60.0) / 60.0)
            / 24.0;

    if m < 3 {
        m += 12;
        y -= 1;
    }

    let mut jd = floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1))
        + day_decimal
        - 1524.5;

    if jd > GREGORIAN_THRESHOLD {
        // integer division truncates toward zero like the reference algorithm
        let a = f64::from(y / 100);
        jd += 2.0 - a + floor(a / 4.0);
    }

    jd
}

/// Julian date representation for astronomical calculations.
///
/// Holds the Julian Day (UT1 based) together with ΔT, from which all
/// ephemeris time scales are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    /// Julian Date (JD) - referenced to UT1
    jd: f64,
    /// Delta T in seconds - difference between TT and UT1
    delta_t: f64,
}

impl JulianDate {
    /// Creates a Julian date from a raw Julian Day and ΔT.
    #[must_use]
    pub const fn new(jd: f64, delta_t: f64) -> Self {
        Self { jd, delta_t }
    }

    /// Creates a Julian date from local calendar fields.
    ///
    /// No range checking is done here; see [`crate::check_inputs`].
    ///
    /// # Example
    /// ```
    /// # use solar_spa::time::JulianDate;
    /// let jd = JulianDate::from_calendar(2003, 10, 17, 12, 30, 30.0, 0.0, -7.0, 67.0);
    /// assert!((jd.julian_day() - 2_452_930.312847).abs() < 1e-6);
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn from_calendar(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
        dut1: f64,
        timezone: f64,
        delta_t: f64,
    ) -> Self {
        Self {
            jd: julian_day(year, month, day, hour, minute, second, dut1, timezone),
            delta_t,
        }
    }

    /// Julian Day at 0h UT of the given Greenwich calendar date, with the given ΔT.
    #[must_use]
    pub fn midnight_ut(year: i32, month: i32, day: i32, delta_t: f64) -> Self {
        Self::from_calendar(year, month, day, 0, 0, 0.0, 0.0, 0.0, delta_t)
    }

    /// Gets the Julian Day (JD) value.
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.jd
    }

    /// Gets the ΔT value in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Calculates the Julian Ephemeris Day (JDE).
    ///
    /// JDE = JD + ΔT/86400
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    /// Calculates the Julian Ephemeris Century (JCE) from J2000.0.
    ///
    /// JCE = (JDE - 2451545.0) / 36525
    #[must_use]
    pub fn julian_ephemeris_century(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Calculates the Julian Ephemeris Millennium (JME) from J2000.0.
    ///
    /// JME = JCE / 10
    #[must_use]
    pub fn julian_ephemeris_millennium(&self) -> f64 {
        self.julian_ephemeris_century() / 10.0
    }

    /// Shifts the Julian Day by whole or fractional days, keeping ΔT.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd: self.jd + days,
            delta_t: self.delta_t,
        }
    }

    /// Same Julian Day with a different ΔT.
    #[must_use]
    pub const fn with_delta_t(self, delta_t: f64) -> Self {
        Self {
            jd: self.jd,
            delta_t,
        }
    }
}
