//! Orientation primitive and the dot-product helper used for collinear cases.

use std::cmp::Ordering;

use super::scalar::Scalar;
use super::types::Point;

/// Twice the signed area of triangle `(a, b, c)`, computed as `(a − c) × (b − c)`.
///
/// Positive when `(a, b, c)` turns counter-clockwise, negative for clockwise,
/// zero for collinear points. Exact for integer coordinates.
#[inline]
pub fn signed_area<T: Scalar>(a: Point<T>, b: Point<T>, c: Point<T>) -> T {
    (a.x - c.x) * (b.y - c.y) - (a.y - c.y) * (b.x - c.x)
}

/// Tolerance-aware sign of [`signed_area`]: `Greater` means counter-clockwise.
#[inline]
pub fn orientation<T: Scalar>(a: Point<T>, b: Point<T>, c: Point<T>) -> Ordering {
    signed_area(a, b, c).sign()
}

/// `(a − o) · (b − o)`.
#[inline]
pub(crate) fn dot_from<T: Scalar>(o: Point<T>, a: Point<T>, b: Point<T>) -> T {
    (a.x - o.x) * (b.x - o.x) + (a.y - o.y) * (b.y - o.y)
}
