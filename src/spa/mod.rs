//! SPA algorithm implementation.
//!
//! High-accuracy solar positioning based on the NREL algorithm by Reda & Andreas (2003).
//! Accuracy: ±0.0003° for years -2000 to 6000.
//!
//! Every call to [`calculate`] is a pure function of its [`ObserverConfig`]: all
//! intermediate values live in a fresh [`SpaIntermediate`] returned with the result.
//!
//! Reference: Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//! Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::error::check_inputs;
use crate::math::{asin, atan2, cos, deg2rad, limit_degrees, mul_add, powi, rad2deg, sin, tan};
use crate::time::JulianDate;
use crate::{ObserverConfig, Result, RiseTransitSet, SolarPosition};

pub mod coefficients;
pub mod earth;
pub mod nutation;
pub mod rts;
pub mod topocentric;

use earth::{
    geocentric_latitude, geocentric_longitude, heliocentric_latitude, heliocentric_longitude,
    heliocentric_radius_vector,
};
use nutation::{
    ecliptic_mean_obliquity, ecliptic_true_obliquity, mean_elements,
    nutation_longitude_and_obliquity,
};
use topocentric::{
    atmospheric_refraction_correction, observer_hour_angle,
    right_ascension_parallax_and_topocentric_dec, sun_equatorial_horizontal_parallax,
    surface_incidence_angle, topocentric_azimuth_angle, topocentric_azimuth_angle_astro,
    topocentric_elevation_angle, topocentric_elevation_angle_corrected,
    topocentric_local_hour_angle, topocentric_right_ascension, topocentric_zenith_angle,
};

/// Apparent radius of the sun in degrees.
pub(crate) const SUN_RADIUS: f64 = 0.26667;

/// Aberration constant in arcseconds.
const ABERRATION_CONSTANT: f64 = -20.4898;

/// Seconds per hour conversion factor.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Observer-independent sun position for one instant (Reda & Andreas 2003, 3.1-3.8).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeocentricPosition {
    /// Julian day
    pub jd: f64,
    /// Julian century
    pub jc: f64,
    /// Julian ephemeris day
    pub jde: f64,
    /// Julian ephemeris century
    pub jce: f64,
    /// Julian ephemeris millennium
    pub jme: f64,
    /// Earth heliocentric longitude, degrees
    pub l: f64,
    /// Earth heliocentric latitude, degrees
    pub b: f64,
    /// Earth radius vector, AU
    pub r: f64,
    /// Geocentric longitude Θ, degrees
    pub theta: f64,
    /// Geocentric latitude β, degrees
    pub beta: f64,
    /// Mean elements X0..X4, degrees
    pub x: [f64; 5],
    /// Nutation in longitude Δψ, degrees
    pub del_psi: f64,
    /// Nutation in obliquity Δε, degrees
    pub del_epsilon: f64,
    /// Mean obliquity of the ecliptic ε0, arc seconds
    pub epsilon0: f64,
    /// True obliquity of the ecliptic ε, degrees
    pub epsilon: f64,
    /// Aberration correction Δτ, degrees
    pub del_tau: f64,
    /// Apparent sun longitude λ, degrees
    pub lamda: f64,
    /// Greenwich mean sidereal time ν0, degrees
    pub nu0: f64,
    /// Greenwich apparent sidereal time ν, degrees
    pub nu: f64,
    /// Geocentric sun right ascension α, degrees
    pub alpha: f64,
    /// Geocentric sun declination δ, degrees
    pub delta: f64,
}

/// Every intermediate value of one SPA run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaIntermediate {
    /// Observer-independent part
    pub geocentric: GeocentricPosition,
    /// Observer hour angle H, degrees
    pub h: f64,
    /// Sun equatorial horizontal parallax ξ, degrees
    pub xi: f64,
    /// Parallax in the sun right ascension Δα, degrees
    pub del_alpha: f64,
    /// Topocentric sun declination δ′, degrees
    pub delta_prime: f64,
    /// Topocentric sun right ascension α′, degrees
    pub alpha_prime: f64,
    /// Topocentric local hour angle H′, degrees
    pub h_prime: f64,
    /// Topocentric elevation angle without refraction e0, degrees
    pub e0: f64,
    /// Atmospheric refraction correction Δe, degrees
    pub del_e: f64,
    /// Topocentric elevation angle with refraction e, degrees
    pub e: f64,
}

/// Result of a full SPA run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaOutput {
    position: SolarPosition,
    eot: f64,
    rise_transit_set: RiseTransitSet,
    intermediate: SpaIntermediate,
}

impl SpaOutput {
    /// Topocentric zenith, azimuths and surface incidence.
    #[must_use]
    pub const fn position(&self) -> &SolarPosition {
        &self.position
    }

    /// Topocentric zenith angle in degrees.
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        self.position.zenith()
    }

    /// Navigator's azimuth in degrees, eastward from north.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.position.azimuth()
    }

    /// Equation of time in minutes, within ±20.
    #[must_use]
    pub const fn eot(&self) -> f64 {
        self.eot
    }

    /// Sunrise, transit and sunset of the configured local date.
    #[must_use]
    pub const fn rise_transit_set(&self) -> &RiseTransitSet {
        &self.rise_transit_set
    }

    /// All intermediate values of the calculation.
    #[must_use]
    pub const fn intermediate(&self) -> &SpaIntermediate {
        &self.intermediate
    }
}

/// Aberration correction Δτ in degrees.
#[must_use]
pub fn aberration_correction(r: f64) -> f64 {
    ABERRATION_CONSTANT / (SECONDS_PER_HOUR * r)
}

/// Apparent sun longitude λ = Θ + Δψ + Δτ.
#[must_use]
pub fn apparent_sun_longitude(theta: f64, delta_psi: f64, delta_tau: f64) -> f64 {
    theta + delta_psi + delta_tau
}

/// Mean sidereal time at Greenwich ν0 in degrees.
#[must_use]
pub fn greenwich_mean_sidereal_time(jd: f64, jc: f64) -> f64 {
    limit_degrees(mul_add(
        powi(jc, 2),
        0.000387933 - jc / 38710000.0,
        mul_add(360.98564736629, jd - 2451545.0, 280.46061837),
    ))
}

/// Apparent sidereal time at Greenwich ν = ν0 + Δψ·cos ε.
#[must_use]
pub fn greenwich_sidereal_time(nu0: f64, delta_psi: f64, epsilon: f64) -> f64 {
    mul_add(delta_psi, cos(deg2rad(epsilon)), nu0)
}

/// Geocentric sun right ascension α in degrees, [0, 360).
#[must_use]
pub fn geocentric_right_ascension(lamda: f64, epsilon: f64, beta: f64) -> f64 {
    let lamda_rad = deg2rad(lamda);
    let epsilon_rad = deg2rad(epsilon);

    limit_degrees(rad2deg(atan2(
        mul_add(
            sin(lamda_rad),
            cos(epsilon_rad),
            -(tan(deg2rad(beta)) * sin(epsilon_rad)),
        ),
        cos(lamda_rad),
    )))
}

/// Geocentric sun declination δ in degrees.
#[must_use]
pub fn geocentric_declination(beta: f64, epsilon: f64, lamda: f64) -> f64 {
    let beta_rad = deg2rad(beta);
    let epsilon_rad = deg2rad(epsilon);

    rad2deg(asin(mul_add(
        sin(beta_rad),
        cos(epsilon_rad),
        cos(beta_rad) * sin(epsilon_rad) * sin(deg2rad(lamda)),
    )))
}

/// Runs the observer-independent part of the SPA for one Julian date.
#[must_use]
pub fn geocentric_position(jd: JulianDate) -> GeocentricPosition {
    let jc = jd.julian_century();
    let jce = jd.julian_ephemeris_century();
    let jme = jd.julian_ephemeris_millennium();

    let l = heliocentric_longitude(jme);
    let b = heliocentric_latitude(jme);
    let r = heliocentric_radius_vector(jme);

    let theta = geocentric_longitude(l);
    let beta = geocentric_latitude(b);

    let x = mean_elements(jce);
    let nutation = nutation_longitude_and_obliquity(jce, &x);

    let epsilon0 = ecliptic_mean_obliquity(jme);
    let epsilon = ecliptic_true_obliquity(nutation.delta_epsilon, epsilon0);

    let del_tau = aberration_correction(r);
    let lamda = apparent_sun_longitude(theta, nutation.delta_psi, del_tau);

    let nu0 = greenwich_mean_sidereal_time(jd.julian_day(), jc);
    let nu = greenwich_sidereal_time(nu0, nutation.delta_psi, epsilon);

    let alpha = geocentric_right_ascension(lamda, epsilon, beta);
    let delta = geocentric_declination(beta, epsilon, lamda);

    GeocentricPosition {
        jd: jd.julian_day(),
        jc,
        jde: jd.julian_ephemeris_day(),
        jce,
        jme,
        l,
        b,
        r,
        theta,
        beta,
        x,
        del_psi: nutation.delta_psi,
        del_epsilon: nutation.delta_epsilon,
        epsilon0,
        epsilon,
        del_tau,
        lamda,
        nu0,
        nu,
        alpha,
        delta,
    }
}

/// Runs the observer-dependent part of the SPA on top of a geocentric position.
#[must_use]
pub fn topocentric_position(
    config: &ObserverConfig,
    geocentric: GeocentricPosition,
) -> SpaIntermediate {
    let h = observer_hour_angle(geocentric.nu, config.longitude, geocentric.alpha);
    let xi = sun_equatorial_horizontal_parallax(geocentric.r);

    let parallax = right_ascension_parallax_and_topocentric_dec(
        config.latitude,
        config.elevation,
        xi,
        h,
        geocentric.delta,
    );

    let alpha_prime = topocentric_right_ascension(geocentric.alpha, parallax.delta_alpha);
    let h_prime = topocentric_local_hour_angle(h, parallax.delta_alpha);

    let e0 = topocentric_elevation_angle(config.latitude, parallax.delta_prime, h_prime);
    let del_e = atmospheric_refraction_correction(
        config.pressure,
        config.temperature,
        config.atmos_refract,
        e0,
    );
    let e = topocentric_elevation_angle_corrected(e0, del_e);

    SpaIntermediate {
        geocentric,
        h,
        xi,
        del_alpha: parallax.delta_alpha,
        delta_prime: parallax.delta_prime,
        alpha_prime,
        h_prime,
        e0,
        del_e,
        e,
    }
}

fn solar_position(config: &ObserverConfig, intermediate: &SpaIntermediate) -> SolarPosition {
    let zenith = topocentric_zenith_angle(intermediate.e);
    let azimuth_astro = topocentric_azimuth_angle_astro(
        intermediate.h_prime,
        config.latitude,
        intermediate.delta_prime,
    );
    let azimuth = topocentric_azimuth_angle(azimuth_astro);
    let incidence =
        surface_incidence_angle(zenith, azimuth_astro, config.azm_rotation, config.slope);

    SolarPosition::new(zenith, azimuth_astro, azimuth, incidence)
}

/// Calculates solar position, equation of time and sunrise/transit/sunset.
///
/// The configuration is validated first; the pipeline never runs on invalid input.
///
/// # Errors
/// Returns the first out-of-range field, see [`check_inputs`].
///
/// # Example
/// ```
/// use solar_spa::{spa, ObserverConfig};
///
/// let config = ObserverConfig::default()
///     .with_date(2003, 10, 17)
///     .with_time(12, 30, 30.0)
///     .with_timezone(-7.0)
///     .with_location(39.742476, -105.1786, 1830.14)
///     .with_atmosphere(820.0, 11.0)
///     .with_surface(30.0, -10.0)
///     .with_delta_t(67.0);
///
/// let output = spa::calculate(&config).unwrap();
/// assert!((output.zenith() - 50.11162).abs() < 1e-5);
/// assert!((output.azimuth() - 194.34024).abs() < 1e-5);
///
/// let sunrise = output.rise_transit_set().sunrise_time().unwrap();
/// assert_eq!(sunrise.as_tuple(), (6, 12, 43));
/// ```
pub fn calculate(config: &ObserverConfig) -> Result<SpaOutput> {
    check_inputs(config)?;

    let jd = JulianDate::from_calendar(
        config.year,
        config.month,
        config.day,
        config.hour,
        config.minute,
        config.second,
        config.delta_ut1,
        config.timezone,
        config.delta_t,
    );

    let intermediate = topocentric_position(config, geocentric_position(jd));
    let position = solar_position(config, &intermediate);

    log::trace!(
        "jd {:.6}: zenith {:.6}°, azimuth {:.6}°",
        jd.julian_day(),
        position.zenith(),
        position.azimuth()
    );

    let eot = rts::equation_of_time(&intermediate.geocentric);
    let rise_transit_set = rts::sun_rise_transit_set(config);

    Ok(SpaOutput {
        position,
        eot,
        rise_transit_set,
        intermediate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn nrel_example() -> ObserverConfig {
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
    fn test_geocentric_position() {
        let geo = geocentric_position(JulianDate::new(2_452_930.312_847_222, 67.0));

        assert!((geo.l - 24.018_261_7).abs() < 1e-6);
        assert!((geo.r - 0.996_542_3).abs() < 1e-6);
        assert!((geo.theta - 204.018_261_7).abs() < 1e-6);
        assert!((geo.del_psi + 0.003_998_404).abs() < 1e-8);
        assert!((geo.epsilon - 23.440_464_5).abs() < 1e-6);
        assert!((geo.lamda - 204.008_551_9).abs() < 1e-6);
        assert!((geo.nu - 318.511_909_8).abs() < 1e-6);
        assert!((geo.alpha - 202.227_407_8).abs() < 1e-6);
        assert!((geo.delta + 9.314_340_1).abs() < 1e-6);
    }

    #[test]
    fn test_sidereal_time_at_j2000() {
        assert!((greenwich_mean_sidereal_time(2_451_545.0, 0.0) - 280.46061837).abs() < 1e-9);
        assert!((greenwich_sidereal_time(100.0, 0.01, 0.0) - 100.01).abs() < 1e-12);
    }

    #[test]
    fn test_aberration() {
        assert!((aberration_correction(1.0) + 0.005_691_611).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_nrel_example() {
        let output = calculate(&nrel_example()).unwrap();

        assert!((output.zenith() - 50.111_622_02).abs() < 1e-6);
        assert!((output.position().azimuth_astronomer() - 14.340_240_51).abs() < 1e-6);
        assert!((output.azimuth() - 194.340_240_51).abs() < 1e-6);
        assert!((output.position().incidence() - 25.187_000_20).abs() < 1e-6);
        assert!((output.eot() - 14.641_510_77).abs() < 1e-6);

        let intermediate = output.intermediate();
        assert!((intermediate.geocentric.jd - 2_452_930.312_847_222).abs() < 1e-8);
        assert!((intermediate.h - 11.105_902_01).abs() < 1e-6);
        assert!((intermediate.e0 - 39.872_045_90).abs() < 1e-6);
    }

    #[test]
    fn test_calculate_rejects_invalid_config() {
        let config = ObserverConfig {
            latitude: 91.0,
            ..nrel_example()
        };
        assert_eq!(
            calculate(&config),
            Err(Error::InvalidLatitude { value: 91.0 })
        );
    }
}
