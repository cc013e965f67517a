//! Error types and input validation for the SPA calculator.

use crate::types::ObserverConfig;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Lowest supported year.
pub const MIN_YEAR: i32 = -2000;
/// Highest supported year.
pub const MAX_YEAR: i32 = 6000;
/// Largest accepted |ΔT| in seconds.
pub const MAX_DELTA_T: f64 = 8000.0;
/// Largest accepted |timezone| in hours.
pub const MAX_TIMEZONE: f64 = 18.0;
/// Lowest accepted observer elevation in meters.
pub const MIN_ELEVATION: f64 = -6_500_000.0;
/// Highest accepted pressure in millibars.
pub const MAX_PRESSURE: f64 = 5000.0;
/// Temperatures must be strictly above this value (°C).
pub const MIN_TEMPERATURE: f64 = -273.0;
/// Highest accepted temperature in °C.
pub const MAX_TEMPERATURE: f64 = 6000.0;
/// Largest accepted |slope| and |azimuth rotation| in degrees.
pub const MAX_SURFACE_ANGLE: f64 = 360.0;
/// Largest accepted |atmospheric refraction at sunrise/sunset| in degrees.
pub const MAX_ATMOS_REFRACT: f64 = 5.0;

/// An out-of-range field in an [`ObserverConfig`].
///
/// Each variant corresponds to one numeric code, see [`Error::code`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Year outside -2000..=6000 (code 1).
    InvalidYear {
        /// The invalid year.
        value: i32,
    },
    /// Month outside 1..=12 (code 2).
    InvalidMonth {
        /// The invalid month.
        value: i32,
    },
    /// Day outside 1..=31 (code 3).
    InvalidDay {
        /// The invalid day.
        value: i32,
    },
    /// Hour outside 0..=24 (code 4).
    InvalidHour {
        /// The invalid hour.
        value: i32,
    },
    /// Minute outside 0..=59, or nonzero at hour 24 (code 5).
    InvalidMinute {
        /// The invalid minute.
        value: i32,
    },
    /// Second outside [0, 60), or nonzero at hour 24 (code 6).
    InvalidSecond {
        /// The invalid second.
        value: f64,
    },
    /// |ΔT| above 8000 seconds (code 7).
    InvalidDeltaT {
        /// The invalid ΔT.
        value: f64,
    },
    /// |timezone| above 18 hours (code 8).
    InvalidTimezone {
        /// The invalid timezone.
        value: f64,
    },
    /// |longitude| above 180 degrees (code 9).
    InvalidLongitude {
        /// The invalid longitude.
        value: f64,
    },
    /// |latitude| above 90 degrees (code 10).
    InvalidLatitude {
        /// The invalid latitude.
        value: f64,
    },
    /// Elevation below -6,500,000 meters (code 11).
    InvalidElevation {
        /// The invalid elevation.
        value: f64,
    },
    /// Pressure outside 0..=5000 millibars (code 12).
    InvalidPressure {
        /// The invalid pressure.
        value: f64,
    },
    /// Temperature outside (-273, 6000] °C (code 13).
    InvalidTemperature {
        /// The invalid temperature.
        value: f64,
    },
    /// |slope| above 360 degrees (code 14).
    InvalidSlope {
        /// The invalid slope.
        value: f64,
    },
    /// |azimuth rotation| above 360 degrees (code 15).
    InvalidAzimuthRotation {
        /// The invalid azimuth rotation.
        value: f64,
    },
    /// |atmospheric refraction| above 5 degrees (code 16).
    InvalidAtmosphericRefraction {
        /// The invalid refraction.
        value: f64,
    },
    /// ΔUT1 outside (-1, 1) seconds (code 17).
    InvalidDeltaUt1 {
        /// The invalid ΔUT1.
        value: f64,
    },
}

impl Error {
    /// Numeric code of this error, 1 through 17.
    ///
    /// # Example
    /// ```
    /// # use solar_spa::Error;
    /// assert_eq!(Error::InvalidLatitude { value: 91.0 }.code(), 10);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::InvalidYear { .. } => 1,
            Self::InvalidMonth { .. } => 2,
            Self::InvalidDay { .. } => 3,
            Self::InvalidHour { .. } => 4,
            Self::InvalidMinute { .. } => 5,
            Self::InvalidSecond { .. } => 6,
            Self::InvalidDeltaT { .. } => 7,
            Self::InvalidTimezone { .. } => 8,
            Self::InvalidLongitude { .. } => 9,
            Self::InvalidLatitude { .. } => 10,
            Self::InvalidElevation { .. } => 11,
            Self::InvalidPressure { .. } => 12,
            Self::InvalidTemperature { .. } => 13,
            Self::InvalidSlope { .. } => 14,
            Self::InvalidAzimuthRotation { .. } => 15,
            Self::InvalidAtmosphericRefraction { .. } => 16,
            Self::InvalidDeltaUt1 { .. } => 17,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidYear { value } => {
                write!(f, "invalid year {value} (must be between -2000 and 6000)")
            }
            Self::InvalidMonth { value } => {
                write!(f, "invalid month {value} (must be between 1 and 12)")
            }
            Self::InvalidDay { value } => {
                write!(f, "invalid day {value} (must be between 1 and 31)")
            }
            Self::InvalidHour { value } => {
                write!(f, "invalid hour {value} (must be between 0 and 24)")
            }
            Self::InvalidMinute { value } => write!(
                f,
                "invalid minute {value} (must be between 0 and 59, and 0 at hour 24)"
            ),
            Self::InvalidSecond { value } => write!(
                f,
                "invalid second {value} (must be in [0, 60), and 0 at hour 24)"
            ),
            Self::InvalidDeltaT { value } => {
                write!(f, "invalid delta T {value} s (magnitude must not exceed 8000 s)")
            }
            Self::InvalidTimezone { value } => {
                write!(f, "invalid timezone {value} h (must be between -18 and +18 h)")
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must be at least -6500000 m)")
            }
            Self::InvalidPressure { value } => {
                write!(f, "invalid pressure {value} mbar (must be between 0 and 5000)")
            }
            Self::InvalidTemperature { value } => write!(
                f,
                "invalid temperature {value}°C (must be above -273°C and at most 6000°C)"
            ),
            Self::InvalidSlope { value } => {
                write!(f, "invalid slope {value}° (must be between -360° and +360°)")
            }
            Self::InvalidAzimuthRotation { value } => write!(
                f,
                "invalid azimuth rotation {value}° (must be between -360° and +360°)"
            ),
            Self::InvalidAtmosphericRefraction { value } => write!(
                f,
                "invalid atmospheric refraction {value}° (must be between -5° and +5°)"
            ),
            Self::InvalidDeltaUt1 { value } => {
                write!(f, "invalid delta UT1 {value} s (must be strictly between -1 and 1 s)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

fn within_magnitude(value: f64, limit: f64) -> bool {
    (-limit..=limit).contains(&value)
}

/// Validates every field of an observer configuration.
///
/// Checks run in a fixed order and the first violation is returned:
/// year, month, day, hour, minute, second, pressure, temperature, ΔUT1,
/// minute and second at hour 24, ΔT, timezone, longitude, latitude,
/// atmospheric refraction, elevation, slope, azimuth rotation.
/// NaN fails the range check of its field.
///
/// # Errors
/// Returns the [`Error`] of the first field found out of range.
pub fn check_inputs(config: &ObserverConfig) -> Result<()> {
    let result = check_in_order(config);
    if let Err(err) = &result {
        log::debug!("observer configuration rejected (code {}): {err}", err.code());
    }
    result
}

fn check_in_order(c: &ObserverConfig) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&c.year) {
        return Err(Error::InvalidYear { value: c.year });
    }
    if !(1..=12).contains(&c.month) {
        return Err(Error::InvalidMonth { value: c.month });
    }
    if !(1..=31).contains(&c.day) {
        return Err(Error::InvalidDay { value: c.day });
    }
    if !(0..=24).contains(&c.hour) {
        return Err(Error::InvalidHour { value: c.hour });
    }
    if !(0..=59).contains(&c.minute) {
        return Err(Error::InvalidMinute { value: c.minute });
    }
    if !(0.0..60.0).contains(&c.second) {
        return Err(Error::InvalidSecond { value: c.second });
    }
    if !(0.0..=MAX_PRESSURE).contains(&c.pressure) {
        return Err(Error::InvalidPressure { value: c.pressure });
    }
    if !(c.temperature > MIN_TEMPERATURE && c.temperature <= MAX_TEMPERATURE) {
        return Err(Error::InvalidTemperature {
            value: c.temperature,
        });
    }
    if !(c.delta_ut1 > -1.0 && c.delta_ut1 < 1.0) {
        return Err(Error::InvalidDeltaUt1 {
            value: c.delta_ut1,
        });
    }
    if c.hour == 24 && c.minute > 0 {
        return Err(Error::InvalidMinute { value: c.minute });
    }
    if c.hour == 24 && c.second > 0.0 {
        return Err(Error::InvalidSecond { value: c.second });
    }
    if !within_magnitude(c.delta_t, MAX_DELTA_T) {
        return Err(Error::InvalidDeltaT { value: c.delta_t });
    }
    if !within_magnitude(c.timezone, MAX_TIMEZONE) {
        return Err(Error::InvalidTimezone { value: c.timezone });
    }
    if !within_magnitude(c.longitude, 180.0) {
        return Err(Error::InvalidLongitude { value: c.longitude });
    }
    if !within_magnitude(c.latitude, 90.0) {
        return Err(Error::InvalidLatitude { value: c.latitude });
    }
    if !within_magnitude(c.atmos_refract, MAX_ATMOS_REFRACT) {
        return Err(Error::InvalidAtmosphericRefraction {
            value: c.atmos_refract,
        });
    }
    if !(c.elevation >= MIN_ELEVATION && c.elevation.is_finite()) {
        return Err(Error::InvalidElevation { value: c.elevation });
    }
    if !within_magnitude(c.slope, MAX_SURFACE_ANGLE) {
        return Err(Error::InvalidSlope { value: c.slope });
    }
    if !within_magnitude(c.azm_rotation, MAX_SURFACE_ANGLE) {
        return Err(Error::InvalidAzimuthRotation {
            value: c.azm_rotation,
        });
    }
    Ok(())
}

/// Validates a configuration and returns its numeric status code.
///
/// 0 means every field is in range; 1 through 17 identify the first
/// out-of-range field (see [`Error::code`]).
///
/// # Example
/// ```
/// # use solar_spa::{validate_inputs, ObserverConfig};
/// assert_eq!(validate_inputs(&ObserverConfig::default()), 0);
///
/// let polar = ObserverConfig { latitude: 95.0, ..ObserverConfig::default() };
/// assert_eq!(validate_inputs(&polar), 10);
/// ```
#[must_use]
pub fn validate_inputs(config: &ObserverConfig) -> u8 {
    check_inputs(config).map_or_else(|err| err.code(), |()| 0)
}
