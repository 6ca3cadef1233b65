//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Mean of `count` values summing to `total`; `0.0` when `count` is zero.
#[must_use]
pub fn safe_mean(total: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Coupling factor `sum_cbo / (n * (n - 1))`.
///
/// Coupling is undefined for fewer than two classes; the result is `0.0`
/// there.
///
/// # Examples
///
/// ```
/// use qmetrics_math::coupling_factor;
///
/// assert_eq!(coupling_factor(6, 3), 1.0);
/// assert_eq!(coupling_factor(9, 1), 0.0);
/// ```
#[must_use]
pub fn coupling_factor(sum_cbo: u64, classes: usize) -> f64 {
    if classes <= 1 {
        return 0.0;
    }
    let pairs = classes as f64 * (classes - 1) as f64;
    sum_cbo as f64 / pairs
}
