//! Error type shared by the sweep and the polygon test.
//!
//! Two classes live here:
//! - caller faults (`NotClosed`, `NonFiniteCoordinate`): the query cannot be
//!   evaluated as stated;
//! - internal consistency violations (`DuplicateSegment`, `MissingSegment`):
//!   the sweep-line ordering broke down. These are never folded into a
//!   `false` answer.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepError {
    #[error("polygon with {vertices} vertices is not closed: the first vertex must be repeated last")]
    NotClosed { vertices: usize },

    #[error("non-finite coordinate at index {index}")]
    NonFiniteCoordinate { index: usize },

    #[error("encountered duplicate segment {index} in sweep line")]
    DuplicateSegment { index: usize },

    #[error("failed to find expected segment {index} in sweep line")]
    MissingSegment { index: usize },
}

impl SweepError {
    /// True for violations of the sweep's own invariants (as opposed to bad input).
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            SweepError::DuplicateSegment { .. } | SweepError::MissingSegment { .. }
        )
    }
}

pub type SweepResult<T> = Result<T, SweepError>;
