//! Visibility polygon computation.
//!
//! Computes the region visible from an observer point amid opaque
//! line-segment obstacles, as a clockwise polygon around the observer.
//!
//! The algorithm is a rotational plane sweep: a ray anchored at the
//! observer rotates clockwise from the +y direction, stopping at every
//! obstacle endpoint. An ordered set keyed by radial distance tracks
//! the segments the ray currently crosses; whenever its minimum
//! changes, the polygon boundary jumps between an obstacle vertex and
//! the wall behind it, and the sweep emits the pair of vertices.
//!
//! # Example
//!
//! ```
//! use sightline::{visibility_polygon, Point2, Segment2};
//!
//! // A square room around the observer
//! let walls = vec![
//!     Segment2::from_coords(-250.0, -250.0, -250.0, 250.0),
//!     Segment2::from_coords(-250.0, 250.0, 250.0, 250.0),
//!     Segment2::from_coords(250.0, 250.0, 250.0, -250.0),
//!     Segment2::from_coords(250.0, -250.0, -250.0, -250.0),
//! ];
//!
//! let polygon = visibility_polygon(Point2::<f32>::origin(), walls);
//! assert_eq!(polygon.len(), 4);
//! ```

mod angle;
mod distance;
mod sweep;

pub use angle::angle_less;
pub use distance::segment_closer;
pub use sweep::visibility_polygon;
