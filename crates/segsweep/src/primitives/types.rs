//! Point, segment and polygon value types.
//!
//! - `Point`: lexicographic total order (x, then y).
//! - `Segment`: ordered by `(first, second)` as stored; a segment and its
//!   reversal are the same segment (`same_as`) but distinct values.
//! - `Polygon`: explicitly closed vertex list, `[v0, v1, …, vk, v0]`.

use std::cmp::Ordering;

use super::scalar::Scalar;
use crate::error::SweepResult;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn translated(self, dx: T, dy: T) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl<T: Scalar> Eq for Point<T> {}

impl<T: Scalar> Ord for Point<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .cmp_coord(&other.x)
            .then_with(|| self.y.cmp_coord(&other.y))
    }
}

impl<T: Scalar> PartialOrd for Point<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A straight segment between two points, kept in caller orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment<T> {
    pub first: Point<T>,
    pub second: Point<T>,
}

impl<T: Scalar> Segment<T> {
    #[inline]
    pub fn new(first: Point<T>, second: Point<T>) -> Self {
        Self { first, second }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.second, self.first)
    }

    /// Copy with `first <= second`.
    #[inline]
    pub fn normalized(self) -> Self {
        if self.first > self.second {
            self.reversed()
        } else {
            self
        }
    }

    /// Zero length: both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }

    /// Equal as an unordered pair of endpoints.
    #[inline]
    pub fn same_as(&self, other: &Self) -> bool {
        self == other || *self == other.reversed()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.first.is_finite() && self.second.is_finite()
    }

    #[inline]
    pub fn translated(self, dx: T, dy: T) -> Self {
        Self::new(self.first.translated(dx, dy), self.second.translated(dx, dy))
    }

    /// Open-segment intersection test, see [`crate::pair::segments_intersect`].
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        crate::pair::segments_intersect(self, other)
    }
}

impl<T: Scalar> Eq for Segment<T> {}

impl<T: Scalar> Ord for Segment<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.first
            .cmp(&other.first)
            .then_with(|| self.second.cmp(&other.second))
    }
}

impl<T: Scalar> PartialOrd for Segment<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Polygon boundary as an explicitly closed vertex list.
///
/// Invariant expected by [`crate::polygon::is_simple`]: the first vertex is
/// repeated as the last one. Use [`Polygon::from_ring`] to close an open ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon<T> {
    pub vertices: Vec<Point<T>>,
}

impl<T: Scalar> Polygon<T> {
    /// Wrap a vertex list as given (no closing vertex is added).
    #[inline]
    pub fn new(vertices: Vec<Point<T>>) -> Self {
        Self { vertices }
    }

    /// Close an open ring by repeating its first vertex; already closed rings
    /// are kept as they are.
    pub fn from_ring(mut ring: Vec<Point<T>>) -> Self {
        if let Some(&first) = ring.first() {
            if ring.len() == 1 || ring.last() != Some(&first) {
                ring.push(first);
            }
        }
        Self { vertices: ring }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex repeated last (and at least two entries).
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 2 && self.vertices.first() == self.vertices.last()
    }

    /// Boundary edges between consecutive stored vertices. For a closed
    /// polygon this includes the edge back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        self.vertices.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    pub fn translated(&self, dx: T, dy: T) -> Self {
        Self::new(self.vertices.iter().map(|p| p.translated(dx, dy)).collect())
    }

    /// See [`crate::polygon::is_simple`].
    #[inline]
    pub fn is_simple(&self) -> SweepResult<bool> {
        crate::polygon::is_simple(self)
    }
}
