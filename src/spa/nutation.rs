//! Nutation in longitude and obliquity, obliquity of the ecliptic (Reda & Andreas 2003, 3.4-3.5).

use super::coefficients::{MEAN_ELEMENT_COEFFS, OBLIQUITY_COEFFS, TERMS_PE, TERMS_Y};
use crate::math::{cos, deg2rad, mul_add, polynomial, sin, third_order_polynomial};

/// Nutation in longitude (Δψ) and obliquity (Δε), both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ
    pub delta_psi: f64,
    /// Nutation in obliquity Δε
    pub delta_epsilon: f64,
}

/// The five lunar-solar mean elements X0..X4 in degrees for the given JCE.
#[must_use]
pub fn mean_elements(jce: f64) -> [f64; 5] {
    MEAN_ELEMENT_COEFFS.map(|[a, b, c, d]| third_order_polynomial(a, b, c, d, jce))
}

/// Σ Xj·Yij for one nutation term.
fn xy_term_summation(i: usize, x: &[f64; 5]) -> f64 {
    x.iter()
        .zip(TERMS_Y[i])
        .map(|(&xj, yij)| xj * f64::from(yij))
        .sum()
}

/// Sums the 63 periodic nutation terms.
#[must_use]
pub fn nutation_longitude_and_obliquity(jce: f64, x: &[f64; 5]) -> Nutation {
    let mut sum_psi = 0.0;
    let mut sum_epsilon = 0.0;

    for (i, &[a, b, c, d]) in TERMS_PE.iter().enumerate() {
        let xy = deg2rad(xy_term_summation(i, x));
        sum_psi += mul_add(b, jce, a) * sin(xy);
        sum_epsilon += mul_add(d, jce, c) * cos(xy);
    }

    Nutation {
        delta_psi: sum_psi / 36_000_000.0,
        delta_epsilon: sum_epsilon / 36_000_000.0,
    }
}

/// Mean obliquity of the ecliptic ε0 in arc seconds.
#[must_use]
pub fn ecliptic_mean_obliquity(jme: f64) -> f64 {
    polynomial(OBLIQUITY_COEFFS, jme / 10.0)
}

/// True obliquity of the ecliptic ε in degrees.
#[must_use]
pub fn ecliptic_true_obliquity(delta_epsilon: f64, epsilon0: f64) -> f64 {
    delta_epsilon + epsilon0 / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const JCE: f64 = 0.037_927_819_922_933_6;

    #[test]
    fn test_mean_elements() {
        let x = mean_elements(JCE);
        let expected = [
            17_185.861_179_06,
            1_722.893_218_46,
            18_234.075_702_61,
            18_420.071_012_28,
            51.686_951_17,
        ];
        for (actual, expected) in x.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-6, "{actual} vs {expected}");
        }
    }

    #[test]
    fn test_nutation() {
        let nutation = nutation_longitude_and_obliquity(JCE, &mean_elements(JCE));
        assert!((nutation.delta_psi + 0.003_998_404).abs() < 1e-8);
        assert!((nutation.delta_epsilon - 0.001_666_568).abs() < 1e-8);
    }

    #[test]
    fn test_obliquity() {
        let epsilon0 = ecliptic_mean_obliquity(JCE / 10.0);
        assert!((epsilon0 - 84_379.672_625).abs() < 1e-5);

        let epsilon = ecliptic_true_obliquity(0.001_666_568_2, epsilon0);
        assert!((epsilon - 23.440_464_52).abs() < 1e-8);

        // J2000.0
        assert!((ecliptic_mean_obliquity(0.0) - 84_381.448).abs() < 1e-12);
    }
}
