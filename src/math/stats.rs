//! Descriptive statistics over raw series.
//!
//! Sums are accumulated left to right from `+0.0` so results are stable
//! across runtimes that use the same evaluation order.

/// Left-to-right sum starting at `+0.0`.
#[inline]
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &v| acc + v)
}

/// Arithmetic mean. Empty input yields NaN (0 / 0).
#[inline]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Mean, or 0 for an empty series.
#[inline]
#[must_use]
pub fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        mean(values)
    }
}

/// Population variance around a precomputed `center`.
///
/// `center` is normally the series mean; passing `0.0` gives the raw second
/// moment.
#[must_use]
pub fn variance_about(values: &[f64], center: f64) -> f64 {
    let m2 = values.iter().fold(0.0, |acc, &v| {
        let d = v - center;
        acc + d * d
    });
    m2 / values.len() as f64
}

/// Maximum that propagates NaN. Empty input yields negative infinity.
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |acc, &v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else if v > acc {
            v
        } else {
            acc
        }
    })
}

/// Maximum, or 0 for an empty series.
#[inline]
#[must_use]
pub fn max_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        max(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert!(mean(&[]).is_nan());
        assert_eq!(mean_or_zero(&[]), 0.0);
    }

    #[test]
    fn test_population_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert_relative_eq!(variance_about(&values, m), 4.0);
    }

    #[test]
    fn test_second_moment() {
        assert_relative_eq!(variance_about(&[1.0, -1.0, 2.0], 0.0), 2.0);
    }

    #[test]
    fn test_max() {
        assert_eq!(max(&[0.5, 3.0, -1.0]), 3.0);
        assert_eq!(max(&[]), f64::NEG_INFINITY);
        assert!(max(&[1.0, f64::NAN, 2.0]).is_nan());
        assert_eq!(max_or_zero(&[]), 0.0);
    }

    #[test]
    fn test_sum_of_negative_zeros_is_positive() {
        let s = sum(&[-0.0, -0.0]);
        assert_eq!(s, 0.0);
        assert!(s.is_sign_positive());
    }
}
