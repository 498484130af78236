// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exponent helpers shared by step, offset and magnitude extraction.

/// `base^exp`.
///
/// Exact for decimal exponents up to `±22`, so that `1e-5` computed here is
/// the same float that `"1e-5".parse()` yields. Larger exponents go through
/// `libm::pow`.
pub(crate) fn powi(base: f64, exp: i32) -> f64 {
    let n = exp.unsigned_abs();
    if n > 22 {
        return libm::pow(base, f64::from(exp));
    }
    let mut p = 1.0;
    for _ in 0..n {
        p *= base;
    }
    if exp < 0 { 1.0 / p } else { p }
}

/// `floor(log_base(x))` for positive finite `x`.
///
/// The logarithm only provides a guess; the result is corrected against
/// [`powi`] so exact powers of `base` land in their own bin.
pub(crate) fn floor_log(x: f64, base: f64) -> i32 {
    let guess = if base == 10.0 {
        libm::log10(x)
    } else {
        libm::log(x) / libm::log(base)
    };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "exponents of finite f64 values fit comfortably in i32"
    )]
    let mut exp = libm::floor(guess) as i32;
    if powi(base, exp) > x {
        exp -= 1;
    } else if powi(base, exp + 1) <= x {
        exp += 1;
    }
    exp
}

#[cfg(test)]
mod tests {
    use super::{floor_log, powi};

    #[test]
    fn decimal_powers_match_literals() {
        assert_eq!(powi(10.0, 0), 1.0);
        assert_eq!(powi(10.0, 3), 1e3);
        assert_eq!(powi(10.0, -5), 1e-5);
        assert_eq!(powi(10.0, -22), 1e-22);
        assert_eq!(powi(2.0, -3), 0.125);
    }

    #[test]
    fn floor_log_exact_powers() {
        assert_eq!(floor_log(1000.0, 10.0), 3);
        assert_eq!(floor_log(999.999, 10.0), 2);
        assert_eq!(floor_log(1e-3, 10.0), -3);
        assert_eq!(floor_log(0.5, 10.0), -1);
        assert_eq!(floor_log(8.0, 2.0), 3);
        assert_eq!(floor_log(7.9, 2.0), 2);
    }
}
