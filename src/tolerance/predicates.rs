//! Orientation predicate with relative tolerance.

use crate::primitives::Point2;
use crate::tolerance::strictly_less;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The triple turns left (counter-clockwise, positive determinant).
    CounterClockwise,
    /// The triple turns right (clockwise, negative determinant).
    Clockwise,
    /// The points are collinear within tolerance.
    Collinear,
}

/// Computes the turn direction of the point triple `(a, b, c)`.
///
/// The sign of `cross(b - a, c - a)` decides: positive means `c` lies to
/// the left of the directed line from `a` through `b`, negative to the
/// right. The sign test goes through [`strictly_less`] in both
/// directions, so determinants inside the relative tolerance band are
/// collinear. Triples with two coincident points are always collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let det = (b - a).cross(c - a);
    if strictly_less(F::zero(), det, eps) {
        Orientation::CounterClockwise
    } else if strictly_less(det, F::zero(), eps) {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
