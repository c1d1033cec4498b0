//! Clockwise angular order around an observer.

use crate::primitives::Point2;
use crate::tolerance::{approx_eq, strictly_less};
use num_traits::Float;
use std::cmp::Ordering;

/// Tests whether `a` precedes `b` in clockwise angular order around
/// `origin`.
///
/// The order starts at the ray pointing in the +y direction and
/// increases clockwise, so the right half-plane sorts before the left.
/// Points collinear with the origin are ordered by distance, nearer
/// first. This is a strict weak order; coincident points are unordered.
pub fn angle_less<F: Float>(origin: Point2<F>, a: Point2<F>, b: Point2<F>) -> bool {
    let eps = F::epsilon();

    let a_left = strictly_less(a.x, origin.x, eps);
    let b_left = strictly_less(b.x, origin.x, eps);
    if a_left != b_left {
        return b_left;
    }

    if approx_eq(a.x, origin.x, eps) && approx_eq(b.x, origin.x, eps) {
        // Both points sit on the vertical axis through the origin. The
        // sweep starts towards +y, so on the upper axis larger y comes
        // first; below the origin the order flips.
        if !strictly_less(a.y, origin.y, eps) || !strictly_less(b.y, origin.y, eps) {
            return strictly_less(b.y, a.y, eps);
        }
        return strictly_less(a.y, b.y, eps);
    }

    let oa = a - origin;
    let ob = b - origin;
    let det = oa.cross(ob);
    if approx_eq(det, F::zero(), eps) {
        return oa.length_squared() < ob.length_squared();
    }
    det < F::zero()
}

/// Total ordering adapter over [`angle_less`] for sorting.
pub(crate) fn angle_ordering<F: Float>(
    origin: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
) -> Ordering {
    if angle_less(origin, a, b) {
        Ordering::Less
    } else if angle_less(origin, b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
