//! Sweep-line (Shamos–Hoey) test: does any pair in a segment set intersect?
//!
//! Purpose
//! - Decide the existence of an intersecting pair in `O(n log n)` by
//!   processing endpoints in sorted order and only testing segments that are
//!   adjacent in the vertical order along the sweep line.
//!
//! Algorithm
//! - Start event: insert, then test the new segment against the neighbours
//!   below and above it.
//! - End event: test the two neighbours that are about to become adjacent,
//!   then remove.
//! - The first positive test ends the sweep. Until then no two active segments
//!   cross, which keeps the status order valid.
//!
//! The status is a local of each call; nothing is shared between sweeps.
//!
//! Code cross-refs: `events::{Endpoint, EventKind}`, `status::{SweepKey, SweepLine}`,
//! `pair::segments_intersect`, `naive` for the quadratic reference.

mod events;
pub mod naive;
mod status;

use crate::error::{SweepError, SweepResult};
use crate::primitives::{Scalar, Segment};
use events::{build_events, EventKind};
use status::{SweepKey, SweepLine};

/// True iff two segments of `segments` intersect (open-segment convention).
///
/// Zero-length segments are ignored; fewer than two remaining segments give
/// `false`. Errors: `NonFiniteCoordinate` for NaN/∞ input, `DuplicateSegment`
/// / `MissingSegment` when the status order breaks down (e.g. the same
/// segment value supplied twice).
#[inline]
pub fn any_intersection<T: Scalar>(segments: &[Segment<T>]) -> SweepResult<bool> {
    Ok(find_intersection(segments)?.is_some())
}

/// Like [`any_intersection`], reporting the indices `(i, j)`, `i < j`, of the
/// first intersecting pair the sweep meets.
pub fn find_intersection<T: Scalar>(
    segments: &[Segment<T>],
) -> SweepResult<Option<(usize, usize)>> {
    let events = build_events(segments)?;
    if events.len() < 4 {
        return Ok(None);
    }

    let mut line = SweepLine::new();
    for event in &events {
        let key = SweepKey::new(event.segment_idx, segments[event.segment_idx]);
        tracing::trace!(
            segment = key.idx,
            kind = ?event.kind,
            at = ?event.vertex,
            active = line.len(),
            "event"
        );
        match event.kind {
            EventKind::Start => {
                line.insert(key)?;
                let (below, above) = line.neighbors(&key);
                for other in [below, above].into_iter().flatten() {
                    if other.intersects(&key) {
                        return Ok(Some(found(key.idx, other.idx)));
                    }
                }
            }
            EventKind::End => {
                if !line.contains(&key) {
                    tracing::error!(segment = key.idx, "segment missing from sweep line");
                    return Err(SweepError::MissingSegment { index: key.idx });
                }
                if let (Some(below), Some(above)) = line.neighbors(&key) {
                    if below.intersects(above) {
                        return Ok(Some(found(below.idx, above.idx)));
                    }
                }
                line.remove(&key)?;
            }
        }
    }

    tracing::debug!(segments = segments.len(), "sweep finished without intersection");
    Ok(None)
}

fn found(a: usize, b: usize) -> (usize, usize) {
    let pair = (a.min(b), a.max(b));
    tracing::debug!(first = pair.0, second = pair.1, "intersecting pair found");
    pair
}
