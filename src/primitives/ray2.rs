//! 2D ray type and its tolerant segment cast.

use super::{Point2, Segment2, Vec2};
use crate::tolerance::{approx_eq, orient2d, strictly_less, Orientation};
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin in the direction specified.
/// The direction is stored as-is (not necessarily normalized) and must
/// be non-zero.
///
/// # Example
///
/// ```
/// use sightline::{Point2, Ray2, Segment2, Vec2};
///
/// let ray: Ray2<f32> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
/// let wall = Segment2::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
///
/// assert_eq!(ray.intersect_segment(&wall, f32::EPSILON), Some(Point2::new(5.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray.
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized).
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from an origin point through a target point.
    #[inline]
    pub fn from_points(origin: Point2<F>, through: Point2<F>) -> Self {
        Self {
            origin,
            direction: through - origin,
        }
    }

    /// Returns the point along the ray at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Finds the nearest intersection of the ray with a line segment.
    ///
    /// Returns the intersection point closest to the ray origin, or
    /// `None` when the ray misses the segment. When the segment lies on
    /// the ray's supporting line, the nearer endpoint is returned, and a
    /// segment straddling the origin intersects at the origin itself.
    ///
    /// `eps` governs the parallelism test and the parameter-range tests;
    /// the tolerance is applied symmetrically on both ends of the
    /// segment and at the ray origin, so grazing hits at endpoints
    /// count. The collinearity test of the parallel branch always uses
    /// machine epsilon. The result is identical under reversal of the
    /// segment's endpoints.
    pub fn intersect_segment(&self, segment: &Segment2<F>, eps: F) -> Option<Point2<F>> {
        let ao = self.origin - segment.start;
        let ab = segment.direction();
        let det = ab.cross(self.direction);

        if approx_eq(det, F::zero(), eps) {
            if orient2d(segment.start, segment.end, self.origin, F::epsilon())
                != Orientation::Collinear
            {
                return None;
            }

            // Signed offsets of the origin past each endpoint, measured
            // along the ray direction.
            let dist_a = ao.dot(self.direction);
            let dist_b = (self.origin - segment.end).dot(self.direction);

            if dist_a > F::zero() && dist_b > F::zero() {
                // The whole segment lies behind the origin.
                return None;
            }
            if (dist_a > F::zero()) != (dist_b > F::zero()) {
                // The segment straddles the origin.
                return Some(self.origin);
            }
            // Both offsets are non-positive; the larger one marks the
            // endpoint nearer to the origin.
            if dist_a > dist_b {
                return Some(segment.start);
            }
            return Some(segment.end);
        }

        let u = ao.cross(self.direction) / det;
        if strictly_less(u, F::zero(), eps) || strictly_less(F::one(), u, eps) {
            return None;
        }

        let t = -ab.cross(ao) / det;
        if approx_eq(t, F::zero(), eps) || t > F::zero() {
            Some(self.point_at(t))
        } else {
            None
        }
    }
}
