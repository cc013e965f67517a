//! Equation of time and sunrise/transit/sunset (Reda & Andreas 2003, Appendix A.1-A.2).

use super::{geocentric_position, SUN_RADIUS};
use crate::math::{
    acos, asin, cos, dayfrac_to_local_hr, deg2rad, limit_degrees, limit_degrees180,
    limit_degrees180pm, limit_minutes, limit_zero2one, polynomial, rad2deg, sin,
};
use crate::spa::coefficients::SUN_MEAN_LONGITUDE_COEFFS;
use crate::spa::GeocentricPosition;
use crate::time::JulianDate;
use crate::{ObserverConfig, RiseTransitSet};

/// Sidereal degrees per fractional day used when stepping ν through the day.
const SIDEREAL_RATE: f64 = 360.985647;

/// Index of the transit in the per-event arrays.
const TRANSIT: usize = 0;
/// Index of the sunrise in the per-event arrays.
const RISE: usize = 1;
/// Index of the sunset in the per-event arrays.
const SET: usize = 2;

/// Approximate fractional-day times of the three events, each in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTimes {
    /// Sun transit
    pub transit: f64,
    /// Sunrise
    pub sunrise: f64,
    /// Sunset
    pub sunset: f64,
}

impl ApproximateTimes {
    const fn as_array(&self) -> [f64; 3] {
        [self.transit, self.sunrise, self.sunset]
    }
}

/// Sun mean longitude M in degrees, [0, 360).
#[must_use]
pub fn sun_mean_longitude(jme: f64) -> f64 {
    limit_degrees(polynomial(SUN_MEAN_LONGITUDE_COEFFS, jme))
}

/// Equation of time in minutes, folded into ±20.
#[must_use]
pub fn eot(m: f64, alpha: f64, del_psi: f64, epsilon: f64) -> f64 {
    limit_minutes(4.0 * (m - 0.0057183 - alpha + del_psi * cos(deg2rad(epsilon))))
}

/// Equation of time for an already computed geocentric position.
#[must_use]
pub fn equation_of_time(geocentric: &GeocentricPosition) -> f64 {
    eot(
        sun_mean_longitude(geocentric.jme),
        geocentric.alpha,
        geocentric.del_psi,
        geocentric.epsilon,
    )
}

/// Approximate sun transit time m0 as a fraction of a day (not yet wrapped).
#[must_use]
pub fn approx_sun_transit_time(alpha_zero: f64, longitude: f64, nu: f64) -> f64 {
    (alpha_zero - longitude - nu) / 360.0
}

/// Local hour angle H0 at which the sun center crosses `h0_prime`, degrees.
///
/// `None` when the sun does not reach that altitude on this date (circumpolar).
#[must_use]
pub fn sun_hour_angle_at_rise_set(latitude: f64, delta_zero: f64, h0_prime: f64) -> Option<f64> {
    let latitude_rad = deg2rad(latitude);
    let delta_zero_rad = deg2rad(delta_zero);
    let argument = (sin(deg2rad(h0_prime)) - sin(latitude_rad) * sin(delta_zero_rad))
        / (cos(latitude_rad) * cos(delta_zero_rad));

    if argument.abs() <= 1.0 {
        Some(limit_degrees180(rad2deg(acos(argument))))
    } else {
        None
    }
}

/// Approximate transit, sunrise and sunset from the transit estimate and H0.
#[must_use]
pub fn approx_sun_rise_and_set(sun_transit: f64, h0: f64) -> ApproximateTimes {
    let h0_dfrac = h0 / 360.0;
    ApproximateTimes {
        transit: limit_zero2one(sun_transit),
        sunrise: limit_zero2one(sun_transit - h0_dfrac),
        sunset: limit_zero2one(sun_transit + h0_dfrac),
    }
}

/// Interpolates a right ascension or declination sampled at day −1, 0, +1.
///
/// Differences of two or more (a wrap of the right ascension past 0°/360°)
/// are folded into [0, 1) first.
#[must_use]
pub fn rts_alpha_delta_prime(ad: &[f64; 3], n: f64) -> f64 {
    let mut a = ad[1] - ad[0];
    let mut b = ad[2] - ad[1];

    if a.abs() >= 2.0 {
        a = limit_zero2one(a);
    }
    if b.abs() >= 2.0 {
        b = limit_zero2one(b);
    }

    ad[1] + n * (a + b + (b - a) * n) / 2.0
}

/// Sun altitude for a local hour angle, degrees.
#[must_use]
pub fn rts_sun_altitude(latitude: f64, delta_prime: f64, h_prime: f64) -> f64 {
    let latitude_rad = deg2rad(latitude);
    let delta_prime_rad = deg2rad(delta_prime);

    rad2deg(asin(
        sin(latitude_rad) * sin(delta_prime_rad)
            + cos(latitude_rad) * cos(delta_prime_rad) * cos(deg2rad(h_prime)),
    ))
}

/// Refines an approximate rise or set time by the altitude error at that instant.
///
/// Falls back to `m` when the correction is not finite (zero denominator).
#[must_use]
pub fn sun_rise_and_set(
    m: f64,
    h: f64,
    delta_prime: f64,
    latitude: f64,
    h_prime: f64,
    h0_prime: f64,
) -> f64 {
    let correction = (h - h0_prime)
        / (360.0 * cos(deg2rad(delta_prime)) * cos(deg2rad(latitude)) * sin(deg2rad(h_prime)));

    if correction.is_finite() {
        m + correction
    } else {
        m
    }
}

/// Sunrise, transit and sunset for the local calendar date of `config`.
///
/// Positions are sampled at 0 UT of the day before, of, and after the date;
/// the caller's time of day and ΔUT1 do not matter. Inputs are not validated
/// here.
#[must_use]
pub fn sun_rise_transit_set(config: &ObserverConfig) -> RiseTransitSet {
    let midnight = JulianDate::midnight_ut(config.year, config.month, config.day, config.delta_t);
    let nu = geocentric_position(midnight).nu;

    let mut alpha = [0.0; 3];
    let mut delta = [0.0; 3];
    for (i, offset) in [-1.0, 0.0, 1.0].into_iter().enumerate() {
        let sample = geocentric_position(midnight.add_days(offset).with_delta_t(0.0));
        alpha[i] = sample.alpha;
        delta[i] = sample.delta;
    }

    let h0_prime = -(SUN_RADIUS + config.atmos_refract);
    let m0 = approx_sun_transit_time(alpha[1], config.longitude, nu);

    let Some(h0) = sun_hour_angle_at_rise_set(config.latitude, delta[1], h0_prime) else {
        log::debug!(
            "sun is circumpolar on {}-{:02}-{:02} at latitude {}",
            config.year,
            config.month,
            config.day,
            config.latitude
        );
        return RiseTransitSet::circumpolar();
    };

    let m_rts = approx_sun_rise_and_set(m0, h0).as_array();
    let mut h_rts = [0.0; 3];
    let mut delta_prime = [0.0; 3];
    let mut h_prime = [0.0; 3];

    for i in 0..3 {
        let nu_rts = nu + SIDEREAL_RATE * m_rts[i];
        let n = m_rts[i] + config.delta_t / 86400.0;
        let alpha_prime = rts_alpha_delta_prime(&alpha, n);
        delta_prime[i] = rts_alpha_delta_prime(&delta, n);
        h_prime[i] = limit_degrees180pm(nu_rts + config.longitude - alpha_prime);
        h_rts[i] = rts_sun_altitude(config.latitude, delta_prime[i], h_prime[i]);
    }

    let refine = |event: usize| {
        sun_rise_and_set(
            m_rts[event],
            h_rts[event],
            delta_prime[event],
            config.latitude,
            h_prime[event],
            h0_prime,
        )
    };

    RiseTransitSet::new(
        dayfrac_to_local_hr(refine(RISE), config.timezone),
        dayfrac_to_local_hr(m_rts[TRANSIT] - h_prime[TRANSIT] / 360.0, config.timezone),
        dayfrac_to_local_hr(refine(SET), config.timezone),
        h_prime[RISE],
        h_prime[SET],
        h_rts[TRANSIT],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden() -> ObserverConfig {
        ObserverConfig::default()
            .with_date(2003, 10, 17)
            .with_time(12, 30, 30.0)
            .with_timezone(-7.0)
            .with_location(39.742476, -105.1786, 1830.14)
            .with_atmosphere(820.0, 11.0)
            .with_surface(30.0, -10.0)
            .with_delta_t(67.0)
    }

    #[test]
    fn test_equation_of_time() {
        let m = sun_mean_longitude(0.003_792_781_992_293_4);
        assert!((m - 205.897_172_25).abs() < 1e-7);

        let eot_minutes = eot(m, 202.227_407_827, -0.003_998_404_3, 23.440_464_52);
        assert!((eot_minutes - 14.641_510_77).abs() < 1e-6);

        // folded by one day
        assert!((eot(359.0, 1.0, 0.0, 0.0) + 8.022_873_2).abs() < 1e-6);
        assert!((eot(1.0, 359.0, 0.0, 0.0) - 7.977_126_8).abs() < 1e-6);
    }

    #[test]
    fn test_hour_angle_at_rise_set() {
        let h0 = sun_hour_angle_at_rise_set(39.742476, -9.016_328_513, -0.83337).unwrap();
        assert!((h0 - 83.524_252_81).abs() < 1e-7);

        // polar night and polar day
        assert_eq!(sun_hour_angle_at_rise_set(75.0, -23.4, -0.83337), None);
        assert_eq!(sun_hour_angle_at_rise_set(75.0, 23.4, -0.83337), None);
    }

    #[test]
    fn test_approximate_times() {
        let approx = approx_sun_rise_and_set(0.782_112_340_3, 83.524_252_81);
        assert!((approx.transit - 0.782_112_340_3).abs() < 1e-9);
        assert!((approx.sunrise - 0.550_100_527_4).abs() < 1e-9);
        assert!((approx.sunset - 0.014_124_153_2).abs() < 1e-9);
        assert!((approx_sun_transit_time(201.467_557_837, -105.1786, 25.085_715_345) - 0.782_112_340_3).abs() < 1e-9);
    }

    #[test]
    fn test_interpolation() {
        assert!((rts_alpha_delta_prime(&[1.0, 2.0, 3.0], 0.5) - 2.5).abs() < 1e-12);
        assert!((rts_alpha_delta_prime(&[1.0, 2.0, 3.5], 1.0) - 3.5).abs() < 1e-12);

        // a difference of exactly 2 is already folded into [0, 1)
        assert!((rts_alpha_delta_prime(&[1.0, 2.0, 4.0], 1.0) - 2.0).abs() < 1e-12);

        // right ascension wrapping past 360° does not jump by a full turn
        let wrapped = rts_alpha_delta_prime(&[359.5, 0.5, 1.5], 0.5);
        assert!((0.5..1.5).contains(&wrapped), "{wrapped}");
    }

    #[test]
    fn test_altitude_and_refinement() {
        assert!((rts_sun_altitude(0.0, 0.0, 0.0) - 90.0).abs() < 1e-10);
        assert!(rts_sun_altitude(45.0, 0.0, 180.0) < -44.9);

        // zero hour angle gives a zero denominator
        assert_eq!(sun_rise_and_set(0.25, 1.0, 0.0, 0.0, 0.0, -0.83337), 0.25);
        assert_eq!(sun_rise_and_set(0.25, -0.83337, 0.0, 0.0, 0.0, -0.83337), 0.25);

        let refined = sun_rise_and_set(0.25, -0.5, 0.0, 0.0, -90.0, -0.83337);
        assert!((refined - (0.25 - 0.33337 / 360.0)).abs() < 1e-12);
    }

    #[test]
    fn test_sun_rise_transit_set() {
        let rts = sun_rise_transit_set(&golden());
        assert!(!rts.is_circumpolar());
        assert!((rts.sunrise() - 6.212_066_6).abs() < 1e-5);
        assert!((rts.suntransit() - 11.768_045).abs() < 1e-5);
        assert!((rts.sunset() - 17.338_666_5).abs() < 1e-5);
        assert!((rts.sunrise_hour_angle() + 83.496_338_2).abs() < 1e-5);
        assert!((rts.sunset_hour_angle() - 83.524_274_1).abs() < 1e-5);
        assert!((rts.transit_altitude() - 40.954_406_8).abs() < 1e-5);
    }

    #[test]
    fn test_time_of_day_does_not_matter() {
        let morning = sun_rise_transit_set(&golden().with_time(0, 0, 0.0));
        let evening = sun_rise_transit_set(&golden().with_time(23, 59, 59.0));
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_polar_night() {
        let rts = sun_rise_transit_set(
            &golden()
                .with_date(2023, 12, 21)
                .with_location(75.0, 0.0, 0.0),
        );
        assert_eq!(rts, RiseTransitSet::circumpolar());
    }
}
