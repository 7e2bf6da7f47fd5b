//! Planar geometry on sample positions.

use crate::sample::Sample;

/// Displacement `[dx, dy]` from `a` to `b`.
#[must_use]
#[inline]
pub fn step(a: &Sample, b: &Sample) -> [f64; 2] {
    [b.x - a.x, b.y - a.y]
}

/// Euclidean norm of a 2D vector.
///
/// Deliberately `sqrt(dx² + dy²)` rather than `hypot`, whose rounding differs.
#[must_use]
#[inline]
pub fn norm2(v: &[f64; 2]) -> f64 {
    (v[0] * v[0] + v[1] * v[1]).sqrt()
}

/// Euclidean distance between two samples in the x/y plane.
#[must_use]
#[inline]
pub fn distance(a: &Sample, b: &Sample) -> f64 {
    norm2(&step(a, b))
}

/// Dot product of two 2D vectors.
#[must_use]
#[inline]
pub fn dot2(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

/// Z component of the cross product of two 2D vectors.
#[must_use]
#[inline]
pub fn cross2(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

/// Signed turning angle from `v1` to `v2`, in `(-π, π]`.
///
/// Positive for counter-clockwise turns in a y-up frame. A zero-length step
/// on either side gives 0.
///
/// Computed with fdlibm's `atan2` (the `libm` crate), which JavaScript
/// engines also use; the platform libm can differ in the last bit.
#[must_use]
#[inline]
pub fn turning_angle(v1: &[f64; 2], v2: &[f64; 2]) -> f64 {
    libm::atan2(cross2(v1, v2), dot2(v1, v2))
}

/// L1 magnitude of the change between two consecutive steps.
#[must_use]
#[inline]
pub fn second_difference_l1(v1: &[f64; 2], v2: &[f64; 2]) -> f64 {
    (v2[0] - v1[0]).abs() + (v2[1] - v1[1]).abs()
}
