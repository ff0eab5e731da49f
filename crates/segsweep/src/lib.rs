//! Segment-set intersection and simple-polygon testing in the plane.
//!
//! Layers
//! - `primitives`: `Point`, `Segment`, `Polygon`, `signed_area`, and the
//!   `Scalar` coordinate domain (signed integers exact, floats with an
//!   `EPSILON` tolerance).
//! - `pair`: open-segment intersection test for two segments.
//! - `sweep`: Shamos–Hoey sweep deciding whether any pair in a set intersects.
//! - `polygon`: simple-polygon test on top of the sweep.
//!
//! Every operation is a pure function of its input; the sweep status lives
//! only for the duration of one call.
//!
//! ```
//! use segsweep::prelude::*;
//!
//! let square = Polygon::from_ring(vec![
//!     Point::new(0, 0),
//!     Point::new(1, 0),
//!     Point::new(1, 1),
//!     Point::new(0, 1),
//! ]);
//! assert_eq!(is_simple(&square), Ok(true));
//!
//! let bowtie = Polygon::from_ring(vec![
//!     Point::new(0, 0),
//!     Point::new(1, 1),
//!     Point::new(1, 0),
//!     Point::new(0, 1),
//! ]);
//! assert_eq!(is_simple(&bowtie), Ok(false));
//! ```

pub mod error;
pub mod pair;
pub mod polygon;
pub mod primitives;
pub mod random;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{SweepError, SweepResult};
pub use pair::segments_intersect;
pub use polygon::is_simple;
pub use primitives::{orientation, signed_area, Point, Polygon, Scalar, Segment};
pub use sweep::{any_intersection, find_intersection};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{SweepError, SweepResult};
    pub use crate::pair::segments_intersect;
    pub use crate::polygon::is_simple;
    pub use crate::primitives::{signed_area, Point, Polygon, Scalar, Segment};
    pub use crate::sweep::naive::any_intersection_naive;
    pub use crate::sweep::{any_intersection, find_intersection};
}
