//! Quadratic reference: test every pair.
//!
//! Same semantics as the sweep (degenerate segments skipped), no consistency
//! errors. Used to cross-check the sweep and as the benchmark baseline.

use crate::primitives::{Scalar, Segment};

/// First intersecting pair `(i, j)` with `i < j` in row-major pair order.
pub fn find_intersection_naive<T: Scalar>(segments: &[Segment<T>]) -> Option<(usize, usize)> {
    for (i, a) in segments.iter().enumerate() {
        if a.is_degenerate() {
            continue;
        }
        for (j, b) in segments.iter().enumerate().skip(i + 1) {
            if !b.is_degenerate() && a.intersects(b) {
                return Some((i, j));
            }
        }
    }
    None
}

#[inline]
pub fn any_intersection_naive<T: Scalar>(segments: &[Segment<T>]) -> bool {
    find_intersection_naive(segments).is_some()
}
