//! Geometric primitives: coordinate domain, value types, orientation.
//!
//! Purpose
//! - Immutable building blocks for the pair predicate, the sweep and the
//!   polygon test. No state, no allocation beyond `Polygon`'s vertex list.
//!
//! Code cross-refs: `pair::segments_intersect`, `sweep::any_intersection`,
//! `polygon::is_simple`.

mod convert;
mod orient;
mod scalar;
mod types;

pub(crate) use orient::dot_from;
pub use orient::{orientation, signed_area};
pub use scalar::Scalar;
pub use types::{Point, Polygon, Segment};
