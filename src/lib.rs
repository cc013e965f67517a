//! # Solar SPA
//!
//! NREL Solar Position Algorithm: topocentric sun position, surface incidence,
//! equation of time and sunrise/transit/sunset for a local date.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! One call to [`spa::calculate`] takes a fully specified [`ObserverConfig`]
//! (calendar date and local time, timezone, ΔT and ΔUT1, location, atmosphere,
//! surface orientation) and returns a [`SpaOutput`]:
//! - zenith angle, astronomer's and navigator's azimuth, surface incidence angle
//! - equation of time in minutes
//! - sunrise, sun transit and sunset as fractional local hours, with hour
//!   angles at rise/set and the transit altitude
//! - every intermediate value of the calculation
//!
//! Inputs are validated up front. [`validate_inputs`] reports the first
//! out-of-range field as a numeric code (0 = valid, 1 to 17 = field), and
//! [`check_inputs`] reports it as an [`Error`].
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Fill an [`ObserverConfig`] from a `DateTime<Tz>`
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize and deserialize configuration and results
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-spa = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! solar-spa = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Reference
//!
//! - Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//!   Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_spa::{spa, ObserverConfig};
//!
//! // Golden, Colorado on 2003-10-17 at 12:30:30 local standard time
//! let config = ObserverConfig::default()
//!     .with_date(2003, 10, 17)
//!     .with_time(12, 30, 30.0)
//!     .with_timezone(-7.0)
//!     .with_location(39.742476, -105.1786, 1830.14)
//!     .with_atmosphere(820.0, 11.0)
//!     .with_surface(30.0, -10.0)
//!     .with_delta_t(67.0);
//!
//! let output = spa::calculate(&config).unwrap();
//! println!("Zenith: {:.6}°", output.zenith());
//! println!("Azimuth: {:.6}°", output.azimuth());
//! println!("Equation of time: {:.6} min", output.eot());
//!
//! let rts = output.rise_transit_set();
//! if let (Some(sunrise), Some(sunset)) = (rts.sunrise_time(), rts.sunset_time()) {
//!     println!("Sunrise {sunrise}, sunset {sunset}");
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - **Navigator's azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Astronomer's azimuth**: 0° = South, measured westward (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon (0° to 180°)
//! - **Longitude**: negative west of Greenwich; **timezone**: hours east of Greenwich

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{check_inputs, validate_inputs, Error, Result};
pub use crate::spa::{calculate, GeocentricPosition, SpaIntermediate, SpaOutput};
pub use crate::types::{ObserverConfig, RiseTransitSet, SolarPosition, TimeOfDay};

// Algorithm modules
pub mod spa;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_calculation() {
        let output = calculate(&ObserverConfig::default()).unwrap();

        assert!((output.zenith() - 23.040_275).abs() < 1e-5);
        assert!((output.azimuth() - 178.069_038).abs() < 1e-5);
        assert!((output.eot() + 3.281_695).abs() < 1e-5);

        let rts = output.rise_transit_set();
        assert!((rts.sunrise() - 5.992_387).abs() < 1e-5);
        assert!((rts.suntransit() - 12.054_768).abs() < 1e-5);
        assert!((rts.sunset() - 18.117_126).abs() < 1e-5);
    }

    #[test]
    fn test_validation_gates_calculation() {
        let config = ObserverConfig {
            month: 13,
            ..ObserverConfig::default()
        };
        assert_eq!(validate_inputs(&config), 2);
        assert_eq!(calculate(&config), Err(Error::InvalidMonth { value: 13 }));
    }
}
