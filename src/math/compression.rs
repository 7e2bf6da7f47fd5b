//! Normalization utilities for range-bounding raw statistics.
//!
//! Raw statistics are mapped to `[0, 1]` by dividing by a fixed scale and
//! capping at 1. Both helpers here keep IEEE-754 NaN propagation: a NaN input
//! is returned unchanged instead of being replaced by the bound, which is what
//! `f64::min`/`f64::max` would do.

/// Divide by `scale` and cap the result at 1.
///
/// There is no lower clamp. Negative values (only reachable from malformed
/// input) pass through, and NaN stays NaN.
///
/// # Example
///
/// ```
/// use trajectory_features::math::scale_clamp;
///
/// assert_eq!(scale_clamp(1.0, 2.0), 0.5);
/// assert_eq!(scale_clamp(9.0, 2.0), 1.0);
/// assert!(scale_clamp(f64::NAN, 2.0).is_nan());
/// ```
#[inline]
#[must_use]
pub fn scale_clamp(value: f64, scale: f64) -> f64 {
    let scaled = value / scale;
    if scaled > 1.0 {
        1.0
    } else {
        scaled
    }
}

/// Raise `value` to at least `floor`, propagating NaN.
///
/// Used for the `max(dt, 1)` style denominator guards.
#[inline]
#[must_use]
pub fn floor_at(value: f64, floor: f64) -> f64 {
    if value < floor {
        floor
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_clamp() {
        assert_eq!(scale_clamp(0.25, 0.5), 0.5);
        assert_eq!(scale_clamp(5.0, 5.0), 1.0);
        assert_eq!(scale_clamp(1e9, 100.0), 1.0);
        assert_eq!(scale_clamp(f64::INFINITY, 1.0), 1.0);
        assert_eq!(scale_clamp(-3.0, 1.0), -3.0);
    }

    #[test]
    fn test_nan_propagation() {
        assert!(scale_clamp(f64::NAN, 1.0).is_nan());
        assert!(floor_at(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_floor_at() {
        assert_eq!(floor_at(0.0, 1.0), 1.0);
        assert_eq!(floor_at(-20.0, 1.0), 1.0);
        assert_eq!(floor_at(16.0, 1.0), 16.0);
    }
}
