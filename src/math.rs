//! Angle normalization and math helpers shared by the SPA pipeline.
//!
//! Trigonometric functions dispatch to the native `f64` methods with the `std`
//! feature and to `libm` otherwise.

#![allow(clippy::many_single_char_names)]

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rad2deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Normalizes an angle in degrees to the range [0, 360).
///
/// # Example
/// ```
/// # use solar_spa::math::limit_degrees;
/// assert_eq!(limit_degrees(-90.0), 270.0);
/// assert_eq!(limit_degrees(720.0), 0.0);
/// ```
#[must_use]
pub fn limit_degrees(degrees: f64) -> f64 {
    let mut limited = degrees % 360.0;
    if limited < 0.0 {
        limited += 360.0;
    }
    // a tiny negative remainder rounds up to exactly 360
    if limited >= 360.0 {
        limited -= 360.0;
    }
    limited
}

/// Normalizes an angle in degrees to the range (-180, 180].
///
/// # Example
/// ```
/// # use solar_spa::math::limit_degrees180pm;
/// assert_eq!(limit_degrees180pm(270.0), -90.0);
/// assert_eq!(limit_degrees180pm(-180.0), 180.0);
/// ```
#[must_use]
pub fn limit_degrees180pm(degrees: f64) -> f64 {
    let limited = degrees % 360.0;
    if limited > 180.0 {
        limited - 360.0
    } else if limited <= -180.0 {
        limited + 360.0
    } else {
        limited
    }
}

/// Normalizes an angle in degrees to the range [0, 180).
#[must_use]
pub fn limit_degrees180(degrees: f64) -> f64 {
    let mut limited = degrees % 180.0;
    if limited < 0.0 {
        limited += 180.0;
    }
    if limited >= 180.0 {
        limited -= 180.0;
    }
    limited
}

/// Wraps a value into [0, 1) by dropping its integer part.
#[must_use]
pub fn limit_zero2one(value: f64) -> f64 {
    let limited = value - floor(value);
    if limited >= 1.0 {
        0.0
    } else {
        limited
    }
}

/// Folds a time difference in minutes into the ±20 minute band by one day (1440 min).
#[must_use]
pub fn limit_minutes(minutes: f64) -> f64 {
    if minutes < -20.0 {
        minutes + 1440.0
    } else if minutes > 20.0 {
        minutes - 1440.0
    } else {
        minutes
    }
}

/// Converts a fraction of a UT day into local fractional hours in [0, 24).
#[must_use]
pub fn dayfrac_to_local_hr(dayfrac: f64, timezone: f64) -> f64 {
    24.0 * limit_zero2one(dayfrac + timezone / 24.0)
}

/// Evaluates `((a·x + b)·x + c)·x + d`.
#[inline]
#[must_use]
pub fn third_order_polynomial(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
    mul_add(mul_add(mul_add(a, x, b), x, c), x, d)
}

/// Computes a polynomial using Horner's method for numerical stability.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
#[must_use]
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = mul_add(result, x, coeff);
    }
    result
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Rounds half away from zero.
#[inline]
#[must_use]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
#[must_use]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

/// Computes x^n for integer n.
#[inline]
#[must_use]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}
