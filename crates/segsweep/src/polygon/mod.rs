//! Simple-polygon test.
//!
//! A polygon is simple when its closed boundary neither crosses nor touches
//! itself except where consecutive edges share their vertex. The input
//! convention is an explicitly closed vertex list (`[v0, …, vk, v0]`).
//!
//! Checks, cheapest first:
//! 1. fewer than 3 vertices: trivially simple;
//! 2. not closed: error;
//! 3. non-finite coordinate: error;
//! 4. duplicate consecutive vertices: not simple;
//! 5. a vertex coordinate used by other than exactly two edge endpoints
//!    (the boundary revisits a vertex): not simple;
//! 6. sweep over the edges: simple iff no intersection.
//!
//! Polygons with holes are not modelled; each ring has to be tested on its own.

use crate::error::{SweepError, SweepResult};
use crate::primitives::{Point, Polygon, Scalar, Segment};
use crate::sweep::any_intersection;

/// True iff `polygon` bounds a simple closed curve.
pub fn is_simple<T: Scalar>(polygon: &Polygon<T>) -> SweepResult<bool> {
    let vertices = &polygon.vertices;
    if vertices.len() < 3 {
        return Ok(true);
    }
    if !polygon.is_closed() {
        return Err(SweepError::NotClosed {
            vertices: vertices.len(),
        });
    }
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(SweepError::NonFiniteCoordinate { index });
    }

    if let Some(index) = first_repeated_vertex(vertices) {
        tracing::debug!(vertex = index, "duplicate consecutive vertices");
        return Ok(false);
    }

    let edges: Vec<Segment<T>> = polygon.edges().collect();
    if let Some(vertex) = vertex_with_bad_degree(&edges) {
        tracing::debug!(?vertex, "vertex shared by more than two edges");
        return Ok(false);
    }

    Ok(!any_intersection(&edges)?)
}

/// Index `i` of the first pair `vertices[i] == vertices[i + 1]`.
fn first_repeated_vertex<T: Scalar>(vertices: &[Point<T>]) -> Option<usize> {
    vertices.windows(2).position(|w| w[0] == w[1])
}

/// A coordinate that does not appear in exactly two edge endpoints.
fn vertex_with_bad_degree<T: Scalar>(edges: &[Segment<T>]) -> Option<Point<T>> {
    let mut ends: Vec<Point<T>> = edges.iter().flat_map(|e| [e.first, e.second]).collect();
    ends.sort_unstable();
    let mut run_start = 0;
    for i in 1..=ends.len() {
        if i == ends.len() || ends[i] != ends[run_start] {
            if i - run_start != 2 {
                return Some(ends[run_start]);
            }
            run_start = i;
        }
    }
    None
}
