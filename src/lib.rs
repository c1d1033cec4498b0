//! sightline - Visibility polygons in the plane
//!
//! Computes the region visible from an observer point amid opaque
//! line-segment obstacles, returned as a clockwise polygon around the
//! observer. The computation is a rotational plane sweep over the
//! obstacle endpoints; every tolerant comparison takes an explicit
//! relative epsilon.

pub mod primitives;
pub mod tolerance;
pub mod visibility;

pub use primitives::{Point2, Ray2, Segment2, Vec2};
pub use tolerance::{approx_eq, orient2d, strictly_less, Orientation};
pub use visibility::{angle_less, segment_closer, visibility_polygon};
