//! Observer-dependent corrections: parallax, refraction, zenith, azimuth and
//! surface incidence (Reda & Andreas 2003, 3.9-3.15).

use super::SUN_RADIUS;
use crate::math::{
    acos, asin, atan, atan2, cos, deg2rad, limit_degrees, mul_add, rad2deg, sin, tan,
};

/// Ratio of the polar to the equatorial Earth radius.
const EARTH_FLATTENING_FACTOR: f64 = 0.99664719;

/// Equatorial Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6378140.0;

/// Parallax in right ascension and the resulting topocentric declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Parallax in the sun right ascension Δα, degrees
    pub delta_alpha: f64,
    /// Topocentric sun declination δ′, degrees
    pub delta_prime: f64,
}

/// Observer local hour angle H in degrees, [0, 360).
#[must_use]
pub fn observer_hour_angle(nu: f64, longitude: f64, alpha_deg: f64) -> f64 {
    limit_degrees(nu + longitude - alpha_deg)
}

/// Equatorial horizontal parallax of the sun ξ in degrees.
#[must_use]
pub fn sun_equatorial_horizontal_parallax(r: f64) -> f64 {
    8.794 / (3600.0 * r)
}

/// Parallax in right ascension and topocentric declination for an observer
/// at `latitude` and `elevation` meters.
#[must_use]
pub fn right_ascension_parallax_and_topocentric_dec(
    latitude: f64,
    elevation: f64,
    xi: f64,
    h: f64,
    delta: f64,
) -> Parallax {
    let lat_rad = deg2rad(latitude);
    let xi_rad = deg2rad(xi);
    let h_rad = deg2rad(h);
    let delta_rad = deg2rad(delta);

    let u = atan(EARTH_FLATTENING_FACTOR * tan(lat_rad));
    let y = mul_add(
        EARTH_FLATTENING_FACTOR,
        sin(u),
        elevation * sin(lat_rad) / EARTH_RADIUS_METERS,
    );
    let x = mul_add(elevation / EARTH_RADIUS_METERS, cos(lat_rad), cos(u));

    let denominator = cos(delta_rad) - x * sin(xi_rad) * cos(h_rad);
    let delta_alpha_rad = atan2(-x * sin(xi_rad) * sin(h_rad), denominator);
    let delta_prime = rad2deg(atan2(
        (sin(delta_rad) - y * sin(xi_rad)) * cos(delta_alpha_rad),
        denominator,
    ));

    Parallax {
        delta_alpha: rad2deg(delta_alpha_rad),
        delta_prime,
    }
}

/// Topocentric sun right ascension α′ = α + Δα.
#[must_use]
pub fn topocentric_right_ascension(alpha_deg: f64, delta_alpha: f64) -> f64 {
    alpha_deg + delta_alpha
}

/// Topocentric local hour angle H′ = H − Δα.
#[must_use]
pub fn topocentric_local_hour_angle(h: f64, delta_alpha: f64) -> f64 {
    h - delta_alpha
}

/// Topocentric elevation angle e0 in degrees, before refraction.
#[must_use]
pub fn topocentric_elevation_angle(latitude: f64, delta_prime: f64, h_prime: f64) -> f64 {
    let lat_rad = deg2rad(latitude);
    let delta_prime_rad = deg2rad(delta_prime);

    rad2deg(asin(mul_add(
        sin(lat_rad),
        sin(delta_prime_rad),
        cos(lat_rad) * cos(delta_prime_rad) * cos(deg2rad(h_prime)),
    )))
}

/// Atmospheric refraction correction Δe in degrees.
///
/// Zero when the sun is below −(sun radius + `atmos_refract`).
#[must_use]
pub fn atmospheric_refraction_correction(
    pressure: f64,
    temperature: f64,
    atmos_refract: f64,
    e0: f64,
) -> f64 {
    if e0 >= -(SUN_RADIUS + atmos_refract) {
        (pressure / 1010.0) * (283.0 / (273.0 + temperature)) * 1.02
            / (60.0 * tan(deg2rad(e0 + 10.3 / (e0 + 5.11))))
    } else {
        0.0
    }
}

/// Topocentric elevation angle e = e0 + Δe.
#[must_use]
pub fn topocentric_elevation_angle_corrected(e0: f64, delta_e: f64) -> f64 {
    e0 + delta_e
}

/// Topocentric zenith angle θ = 90° − e.
#[must_use]
pub fn topocentric_zenith_angle(e: f64) -> f64 {
    90.0 - e
}

/// Topocentric astronomer's azimuth Γ in degrees, westward from south.
#[must_use]
pub fn topocentric_azimuth_angle_astro(h_prime: f64, latitude: f64, delta_prime: f64) -> f64 {
    let h_prime_rad = deg2rad(h_prime);
    let lat_rad = deg2rad(latitude);

    limit_degrees(rad2deg(atan2(
        sin(h_prime_rad),
        cos(h_prime_rad) * sin(lat_rad) - tan(deg2rad(delta_prime)) * cos(lat_rad),
    )))
}

/// Topocentric navigator's azimuth Φ in degrees, eastward from north.
#[must_use]
pub fn topocentric_azimuth_angle(azimuth_astro: f64) -> f64 {
    limit_degrees(azimuth_astro + 180.0)
}

/// Incidence angle of the sun on a surface with the given slope and azimuth
/// rotation, in degrees.
#[must_use]
pub fn surface_incidence_angle(
    zenith: f64,
    azimuth_astro: f64,
    azm_rotation: f64,
    slope: f64,
) -> f64 {
    let zenith_rad = deg2rad(zenith);
    let slope_rad = deg2rad(slope);

    rad2deg(acos(mul_add(
        cos(zenith_rad),
        cos(slope_rad),
        sin(slope_rad) * sin(zenith_rad) * cos(deg2rad(azimuth_astro - azm_rotation)),
    )))
}
