//! Earth heliocentric position from the periodic series (Reda & Andreas 2003, 3.2).

use super::coefficients::{TERMS_B, TERMS_L, TERMS_R};
use crate::math::{cos, limit_degrees, mul_add, polynomial, rad2deg};

/// Highest number of series (powers of JME) in any of the L, B, R tables.
const MAX_SERIES: usize = 6;

/// Sums `A·cos(B + C·jme)` over the rows of one series.
#[must_use]
pub fn periodic_term_summation(terms: &[[f64; 3]], jme: f64) -> f64 {
    terms
        .iter()
        .map(|&[a, b, c]| a * cos(mul_add(c, jme, b)))
        .sum()
}

/// Combines per-power sums into `Σ sum[i]·jme^i / 1e8`.
#[must_use]
pub fn earth_values(term_sums: &[f64], jme: f64) -> f64 {
    polynomial(term_sums, jme) / 1e8
}

fn series_value(series: &[&[[f64; 3]]], jme: f64) -> f64 {
    let mut sums = [0.0; MAX_SERIES];
    for (sum, terms) in sums.iter_mut().zip(series) {
        *sum = periodic_term_summation(terms, jme);
    }
    earth_values(&sums[..series.len()], jme)
}

/// Earth heliocentric longitude L in degrees, [0, 360).
#[must_use]
pub fn heliocentric_longitude(jme: f64) -> f64 {
    limit_degrees(rad2deg(series_value(TERMS_L, jme)))
}

/// Earth heliocentric latitude B in degrees, [0, 360).
#[must_use]
pub fn heliocentric_latitude(jme: f64) -> f64 {
    limit_degrees(rad2deg(series_value(TERMS_B, jme)))
}

/// Earth radius vector R in astronomical units.
#[must_use]
pub fn heliocentric_radius_vector(jme: f64) -> f64 {
    series_value(TERMS_R, jme)
}

/// Geocentric longitude Θ = L + 180°, wrapped to [0, 360).
#[must_use]
pub fn geocentric_longitude(l: f64) -> f64 {
    limit_degrees(l + 180.0)
}

/// Geocentric latitude β = −B.
#[must_use]
pub fn geocentric_latitude(b: f64) -> f64 {
    -b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::limit_degrees180pm;

    // JME of 2003-10-17 12:30:30 MST with ΔT = 67 s
    const JME: f64 = 0.003_792_781_992_293_4;

    #[test]
    fn test_periodic_term_summation() {
        let terms = [[2.0, 0.0, 0.0], [3.0, 1.0, 2.0]];
        let expected = 2.0 + 3.0 * cos(2.0);
        assert!((periodic_term_summation(&terms, 0.5) - expected).abs() < 1e-12);
        assert_eq!(periodic_term_summation(&[], 0.5), 0.0);
    }

    #[test]
    fn test_earth_values() {
        assert!((earth_values(&[1e8, 2e8, 3e8], 2.0) - 17.0).abs() < 1e-12);
    }

    #[test]
    fn test_heliocentric_position() {
        assert!((heliocentric_longitude(JME) - 24.018_261_69).abs() < 1e-6);
        assert!((limit_degrees180pm(heliocentric_latitude(JME)) + 0.000_101_1).abs() < 1e-6);
        assert!((heliocentric_radius_vector(JME) - 0.996_542_3).abs() < 1e-6);
    }

    #[test]
    fn test_geocentric_position() {
        assert!((geocentric_longitude(24.0) - 204.0).abs() < 1e-12);
        assert!((geocentric_longitude(200.0) - 20.0).abs() < 1e-12);
        assert_eq!(geocentric_latitude(359.9999), -359.9999);
    }

    #[test]
    fn test_radius_vector_stays_near_one_au() {
        for jme in [-0.4, -0.1, 0.0, 0.1, 0.4] {
            let r = heliocentric_radius_vector(jme);
            assert!((0.98..1.02).contains(&r), "R({jme}) = {r}");
        }
    }
}
