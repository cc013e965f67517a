//! Configuration and result records for SPA calculations.

use crate::math::round;
use crate::time::delta_t_from_offsets;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

/// Everything the SPA needs to know about one instant and one observer.
///
/// All fields are public; use [`crate::check_inputs`] (or let
/// [`crate::spa::calculate`] do it) to verify the ranges before trusting any result.
///
/// # Example
/// ```
/// # use solar_spa::ObserverConfig;
/// let config = ObserverConfig::default()
///     .with_date(2003, 10, 17)
///     .with_time(12, 30, 30.0)
///     .with_timezone(-7.0)
///     .with_location(39.742476, -105.1786, 1830.14)
///     .with_atmosphere(820.0, 11.0)
///     .with_delta_t(67.0);
/// assert_eq!(config.year, 2003);
/// assert_eq!(config.pressure, 820.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserverConfig {
    /// Year, -2000 to 6000
    pub year: i32,
    /// Month, 1 to 12
    pub month: i32,
    /// Day of month, 1 to 31
    pub day: i32,
    /// Local hour, 0 to 24
    pub hour: i32,
    /// Minute, 0 to 59
    pub minute: i32,
    /// Second, 0 to <60
    pub second: f64,
    /// Fractional second difference between UT1 and UTC, -1 to 1 (exclusive)
    pub delta_ut1: f64,
    /// Difference between terrestrial time and UT1 in seconds, -8000 to 8000
    pub delta_t: f64,
    /// Observer timezone in hours east of Greenwich, -18 to 18
    pub timezone: f64,
    /// Observer longitude in degrees, negative west of Greenwich
    pub longitude: f64,
    /// Observer latitude in degrees, negative south of the equator
    pub latitude: f64,
    /// Observer elevation in meters
    pub elevation: f64,
    /// Annual average local pressure in millibars
    pub pressure: f64,
    /// Annual average local temperature in °C
    pub temperature: f64,
    /// Surface slope measured from the horizontal plane, degrees
    pub slope: f64,
    /// Surface azimuth rotation measured from south to the projection of the
    /// surface normal on the horizontal plane, negative east
    pub azm_rotation: f64,
    /// Atmospheric refraction at sunrise and sunset in degrees
    pub atmos_refract: f64,
}

impl Default for ObserverConfig {
    /// Noon UT on 2000-01-01 at the intersection of equator and prime meridian,
    /// standard atmosphere, horizontal surface.
    fn default() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0.0,
            delta_ut1: 0.0,
            delta_t: delta_t_from_offsets(Self::DEFAULT_TAI_MINUS_UTC, 0.0),
            timezone: 0.0,
            longitude: 0.0,
            latitude: 0.0,
            elevation: 0.0,
            pressure: 1013.25,
            temperature: 17.5,
            slope: 0.0,
            azm_rotation: 0.0,
            atmos_refract: 0.5667,
        }
    }
}

impl ObserverConfig {
    /// TAI−UTC (leap seconds) assumed by [`Default`].
    pub const DEFAULT_TAI_MINUS_UTC: f64 = 32.0;

    /// Sets the calendar date.
    #[must_use]
    pub const fn with_date(mut self, year: i32, month: i32, day: i32) -> Self {
        self.year = year;
        self.month = month;
        self.day = day;
        self
    }

    /// Sets the local time of day.
    #[must_use]
    pub const fn with_time(mut self, hour: i32, minute: i32, second: f64) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Sets the timezone in hours east of Greenwich.
    #[must_use]
    pub const fn with_timezone(mut self, timezone: f64) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets latitude, longitude (degrees) and elevation (meters).
    #[must_use]
    pub const fn with_location(mut self, latitude: f64, longitude: f64, elevation: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self.elevation = elevation;
        self
    }

    /// Sets pressure (millibars) and temperature (°C).
    #[must_use]
    pub const fn with_atmosphere(mut self, pressure: f64, temperature: f64) -> Self {
        self.pressure = pressure;
        self.temperature = temperature;
        self
    }

    /// Sets the slope and azimuth rotation of the receiving surface (degrees).
    #[must_use]
    pub const fn with_surface(mut self, slope: f64, azm_rotation: f64) -> Self {
        self.slope = slope;
        self.azm_rotation = azm_rotation;
        self
    }

    /// Sets ΔT (TT − UT1) in seconds directly.
    #[must_use]
    pub const fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    /// Sets ΔUT1 (UT1 − UTC) and derives ΔT from it and TAI−UTC.
    ///
    /// # Example
    /// ```
    /// # use solar_spa::ObserverConfig;
    /// let config = ObserverConfig::default().with_offsets(37.0, 0.1);
    /// assert_eq!(config.delta_ut1, 0.1);
    /// assert!((config.delta_t - 69.084).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn with_offsets(mut self, tai_minus_utc: f64, delta_ut1: f64) -> Self {
        self.delta_ut1 = delta_ut1;
        self.with_tai_minus_utc(tai_minus_utc)
    }

    /// Derives ΔT from TAI−UTC (seconds) and the current `delta_ut1`.
    #[must_use]
    pub fn with_tai_minus_utc(mut self, tai_minus_utc: f64) -> Self {
        self.delta_t = delta_t_from_offsets(tai_minus_utc, self.delta_ut1);
        self
    }

    /// Takes the local calendar date, wall-clock time and UTC offset from a
    /// chrono date-time.
    ///
    /// Fractional seconds are kept; a leap second (nanoseconds above one
    /// second) is folded into 59.999… so the configuration stays valid.
    ///
    /// # Example
    /// ```
    /// # use solar_spa::ObserverConfig;
    /// use chrono::{FixedOffset, TimeZone};
    ///
    /// let mst = FixedOffset::west_opt(7 * 3600).unwrap();
    /// let datetime = mst.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).unwrap();
    /// let config = ObserverConfig::default().with_datetime(&datetime);
    /// assert_eq!((config.year, config.month, config.day), (2003, 10, 17));
    /// assert_eq!((config.hour, config.minute, config.second), (12, 30, 30.0));
    /// assert_eq!(config.timezone, -7.0);
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn with_datetime<Tz: TimeZone>(mut self, datetime: &DateTime<Tz>) -> Self {
        let offset_seconds = datetime.offset().fix().local_minus_utc();
        let nanos = datetime.nanosecond().min(999_999_999);

        self.year = datetime.year();
        self.month = datetime.month() as i32;
        self.day = datetime.day() as i32;
        self.hour = datetime.hour() as i32;
        self.minute = datetime.minute() as i32;
        self.second = f64::from(datetime.second()) + f64::from(nanos) / 1e9;
        self.timezone = f64::from(offset_seconds) / 3600.0;
        self
    }
}

/// Topocentric position of the sun and its incidence on a tilted surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPosition {
    zenith: f64,
    azimuth_astronomer: f64,
    azimuth: f64,
    incidence: f64,
}

impl SolarPosition {
    pub(crate) const fn new(
        zenith: f64,
        azimuth_astronomer: f64,
        azimuth: f64,
        incidence: f64,
    ) -> Self {
        Self {
            zenith,
            azimuth_astronomer,
            azimuth,
            incidence,
        }
    }

    /// Topocentric zenith angle in degrees, refraction applied.
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        self.zenith
    }

    /// Elevation above the horizon in degrees (90° − zenith).
    #[must_use]
    pub fn elevation(&self) -> f64 {
        90.0 - self.zenith
    }

    /// Astronomer's azimuth in degrees, measured westward from south.
    #[must_use]
    pub const fn azimuth_astronomer(&self) -> f64 {
        self.azimuth_astronomer
    }

    /// Navigator's azimuth in degrees, measured eastward from north.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Incidence angle on the configured surface in degrees.
    #[must_use]
    pub const fn incidence(&self) -> f64 {
        self.incidence
    }

    /// Checks if the sun is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation() > 0.0
    }
}

/// A wall-clock time of day with whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Converts fractional local hours in [0, 24) to a time of day.
    ///
    /// The value is rounded to the nearest whole second with carry into
    /// minutes and hours; a result of 24:00:00 wraps to 00:00:00. Negative,
    /// non-finite and ≥ 24 inputs (including the circumpolar sentinel)
    /// give `None`.
    ///
    /// # Example
    /// ```
    /// # use solar_spa::TimeOfDay;
    /// let t = TimeOfDay::from_fractional_hours(6.5).unwrap();
    /// assert_eq!(t.as_tuple(), (6, 30, 0));
    ///
    /// assert_eq!(TimeOfDay::from_fractional_hours(23.9999).unwrap().as_tuple(), (0, 0, 0));
    /// assert!(TimeOfDay::from_fractional_hours(-99999.0).is_none());
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_fractional_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() || !(0.0..24.0).contains(&hours) {
            return None;
        }

        // 0 ≤ total ≤ 86400, so the cast cannot overflow
        let total = round(hours * 3600.0) as u32 % 86_400;
        Some(Self {
            hour: (total / 3600) as u8,
            minute: (total % 3600 / 60) as u8,
            second: (total % 60) as u8,
        })
    }

    /// Hour, 0 to 23.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0 to 59.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second, 0 to 59.
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Gets `(hour, minute, second)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Sunrise, sun transit and sunset for the configured local date.
///
/// Times are fractional local hours. When the sun does not cross the horizon
/// on that date every field holds [`RiseTransitSet::CIRCUMPOLAR`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiseTransitSet {
    sunrise: f64,
    suntransit: f64,
    sunset: f64,
    srha: f64,
    ssha: f64,
    sta: f64,
}

impl RiseTransitSet {
    /// Sentinel held by every field when the sun is circumpolar.
    pub const CIRCUMPOLAR: f64 = -99999.0;

    pub(crate) const fn new(
        sunrise: f64,
        suntransit: f64,
        sunset: f64,
        srha: f64,
        ssha: f64,
        sta: f64,
    ) -> Self {
        Self {
            sunrise,
            suntransit,
            sunset,
            srha,
            ssha,
            sta,
        }
    }

    pub(crate) const fn circumpolar() -> Self {
        Self::new(
            Self::CIRCUMPOLAR,
            Self::CIRCUMPOLAR,
            Self::CIRCUMPOLAR,
            Self::CIRCUMPOLAR,
            Self::CIRCUMPOLAR,
            Self::CIRCUMPOLAR,
        )
    }

    /// Checks whether the sun stays above or below the horizon all day.
    #[must_use]
    pub fn is_circumpolar(&self) -> bool {
        self.suntransit == Self::CIRCUMPOLAR
    }

    /// Local sunrise in fractional hours, or the sentinel.
    #[must_use]
    pub const fn sunrise(&self) -> f64 {
        self.sunrise
    }

    /// Local sun transit (solar noon) in fractional hours, or the sentinel.
    #[must_use]
    pub const fn suntransit(&self) -> f64 {
        self.suntransit
    }

    /// Local sunset in fractional hours, or the sentinel.
    #[must_use]
    pub const fn sunset(&self) -> f64 {
        self.sunset
    }

    /// Topocentric local hour angle at sunrise, degrees.
    #[must_use]
    pub const fn sunrise_hour_angle(&self) -> f64 {
        self.srha
    }

    /// Topocentric local hour angle at sunset, degrees.
    #[must_use]
    pub const fn sunset_hour_angle(&self) -> f64 {
        self.ssha
    }

    /// Sun altitude at transit, degrees.
    #[must_use]
    pub const fn transit_altitude(&self) -> f64 {
        self.sta
    }

    /// Sunrise as a time of day.
    #[must_use]
    pub fn sunrise_time(&self) -> Option<TimeOfDay> {
        TimeOfDay::from_fractional_hours(self.sunrise)
    }

    /// Transit as a time of day.
    #[must_use]
    pub fn suntransit_time(&self) -> Option<TimeOfDay> {
        TimeOfDay::from_fractional_hours(self.suntransit)
    }

    /// Sunset as a time of day.
    #[must_use]
    pub fn sunset_time(&self) -> Option<TimeOfDay> {
        TimeOfDay::from_fractional_hours(self.sunset)
    }
}
