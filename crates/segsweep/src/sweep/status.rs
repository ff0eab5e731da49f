//! Sweep-line status: active segments in vertical order.
//!
//! Keys compare by where they cross the sweep line. For two active segments
//! the one that starts later (ties broken by the `Segment` order) is located
//! against the supporting line of the other (its start point, or its end
//! point when the start lies on that line). Before the first intersection
//! this order cannot change, so the comparison does not depend on the sweep
//! position and a plain `BTreeSet` holds the status. Collinear keys fall back to the `Segment` order, which
//! keeps distinct values apart and makes equal values collide.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Bound;

use crate::error::{SweepError, SweepResult};
use crate::primitives::{orientation, Point, Scalar, Segment};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SweepKey<T> {
    /// Lexicographically smaller endpoint.
    pub lo: Point<T>,
    pub hi: Point<T>,
    /// Caller's segment as given.
    pub segment: Segment<T>,
    pub idx: usize,
}

impl<T: Scalar> SweepKey<T> {
    pub fn new(idx: usize, segment: Segment<T>) -> Self {
        let n = segment.normalized();
        Self {
            lo: n.first,
            hi: n.second,
            segment,
            idx,
        }
    }

    #[inline]
    fn base_order(&self, other: &Self) -> Ordering {
        self.lo
            .cmp(&other.lo)
            .then_with(|| self.segment.cmp(&other.segment))
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.segment.intersects(&other.segment)
    }
}

/// Side of `other` relative to the directed line `base.lo → base.hi`
/// (`Greater` = above), where `base` starts no later than `other`.
#[inline]
fn side_of<T: Scalar>(base: &SweepKey<T>, other: &SweepKey<T>) -> Ordering {
    match orientation(base.lo, base.hi, other.lo) {
        Ordering::Equal => orientation(base.lo, base.hi, other.hi),
        side => side,
    }
}

/// The base line is always the key that is smaller by `(lo, segment)`, so
/// `vertical_cmp(a, b)` and `vertical_cmp(b, a)` evaluate the same areas and
/// stay antisymmetric even when rounding decides a near-collinear sign.
fn vertical_cmp<T: Scalar>(a: &SweepKey<T>, b: &SweepKey<T>) -> Ordering {
    if a.base_order(b) != Ordering::Greater {
        side_of(a, b).reverse()
    } else {
        side_of(b, a)
    }
}

impl<T: Scalar> Eq for SweepKey<T> {}

impl<T: Scalar> Ord for SweepKey<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        vertical_cmp(self, other).then_with(|| self.segment.cmp(&other.segment))
    }
}

impl<T: Scalar> PartialOrd for SweepKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered set of the segments currently crossing the sweep line.
#[derive(Debug)]
pub(crate) struct SweepLine<T> {
    active: BTreeSet<SweepKey<T>>,
}

impl<T: Scalar> SweepLine<T> {
    pub fn new() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn contains(&self, key: &SweepKey<T>) -> bool {
        self.active.contains(key)
    }

    pub fn insert(&mut self, key: SweepKey<T>) -> SweepResult<()> {
        let idx = key.idx;
        if !self.active.insert(key) {
            tracing::error!(segment = idx, "duplicate segment in sweep line");
            return Err(SweepError::DuplicateSegment { index: idx });
        }
        Ok(())
    }

    pub fn remove(&mut self, key: &SweepKey<T>) -> SweepResult<()> {
        if !self.active.remove(key) {
            tracing::error!(segment = key.idx, "segment missing from sweep line");
            return Err(SweepError::MissingSegment { index: key.idx });
        }
        Ok(())
    }

    /// Immediate neighbours of `key` as `(below, above)`; `key` itself need not be present.
    pub fn neighbors(&self, key: &SweepKey<T>) -> (Option<&SweepKey<T>>, Option<&SweepKey<T>>) {
        let below = self.active.range::<SweepKey<T>, _>(..key).next_back();
        let above = self
            .active
            .range::<SweepKey<T>, _>((Bound::Excluded(key), Bound::Unbounded))
            .next();
        (below, above)
    }
}
