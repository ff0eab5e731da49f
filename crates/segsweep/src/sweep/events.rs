//! Endpoint events for one sweep.
//!
//! Order: by point; at an equal point `End` precedes `Start`; remaining ties
//! by segment index. Ending first means two segments that merely meet at a
//! point are never active together at that point.

use std::cmp::Ordering;

use crate::error::{SweepError, SweepResult};
use crate::primitives::{Point, Scalar, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum EventKind {
    End,
    Start,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Endpoint<T> {
    pub vertex: Point<T>,
    pub segment_idx: usize,
    pub kind: EventKind,
}

impl<T: Scalar> Eq for Endpoint<T> {}

impl<T: Scalar> Ord for Endpoint<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertex
            .cmp(&other.vertex)
            .then(self.kind.cmp(&other.kind))
            .then(self.segment_idx.cmp(&other.segment_idx))
    }
}

impl<T: Scalar> PartialOrd for Endpoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorted start/end events for every non-degenerate segment.
///
/// Fails on the first segment carrying a non-finite coordinate.
pub(crate) fn build_events<T: Scalar>(segments: &[Segment<T>]) -> SweepResult<Vec<Endpoint<T>>> {
    let mut events = Vec::with_capacity(segments.len() * 2);
    for (idx, segment) in segments.iter().enumerate() {
        if !segment.is_finite() {
            return Err(SweepError::NonFiniteCoordinate { index: idx });
        }
        if segment.is_degenerate() {
            tracing::debug!(segment = idx, "skipping zero-length segment");
            continue;
        }
        let lo_hi = segment.normalized();
        events.push(Endpoint {
            vertex: lo_hi.first,
            segment_idx: idx,
            kind: EventKind::Start,
        });
        events.push(Endpoint {
            vertex: lo_hi.second,
            segment_idx: idx,
            kind: EventKind::End,
        });
    }
    events.sort_unstable();
    Ok(events)
}
