//! Radial order of obstacle segments around an observer.

use crate::primitives::{Point2, Segment2};
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;
use std::cmp::Ordering;

/// Tests whether segment `x` is strictly closer to `origin` than `y`.
///
/// Preconditions, upheld by the sweep and debug-asserted here: some
/// common ray from `origin` crosses both segments, the segments meet
/// only at shared endpoints if at all, and neither segment is collinear
/// with `origin`. Outside these preconditions the result is
/// meaningless. The result does not depend on the endpoint order of
/// either segment.
pub fn segment_closer<F: Float>(origin: Point2<F>, x: &Segment2<F>, y: &Segment2<F>) -> bool {
    let eps = F::epsilon();

    let (mut a, mut b) = (x.start, x.end);
    let (mut c, mut d) = (y.start, y.end);

    debug_assert!(
        orient2d(origin, a, b, eps) != Orientation::Collinear,
        "segment must not be collinear with the observer"
    );
    debug_assert!(
        orient2d(origin, c, d, eps) != Orientation::Collinear,
        "segment must not be collinear with the observer"
    );

    // Normalise the endpoint order so that a shared endpoint, if any,
    // ends up as both a and c.
    if b.approx_eq(c, eps) || b.approx_eq(d, eps) {
        std::mem::swap(&mut a, &mut b);
    }
    if a.approx_eq(d, eps) {
        std::mem::swap(&mut c, &mut d);
    }

    if a.approx_eq(c, eps) {
        // Shared endpoint. Coincident segments are never closer; if the
        // segments open into different angular wedges they never overlap
        // a common ray past the shared point and x is not closer. When
        // they do share a wedge, x is closer iff y's far endpoint lies
        // on the opposite side of x's line from the observer.
        let oad = orient2d(origin, a, d, eps);
        let oab = orient2d(origin, a, b, eps);
        if b.approx_eq(d, eps) || oad != oab {
            return false;
        }
        return orient2d(a, b, d, eps) != orient2d(a, b, origin, eps);
    }

    let cda = orient2d(c, d, a, eps);
    let cdb = orient2d(c, d, b, eps);
    if cda == Orientation::Collinear && cdb == Orientation::Collinear {
        // x lies on the supporting line of y; endpoint distance decides.
        return origin.distance_squared(a) < origin.distance_squared(c);
    }
    if cda == cdb || cda == Orientation::Collinear || cdb == Orientation::Collinear {
        // Both endpoints of x are on one side of y's line (or touch it):
        // x is closer iff the observer shares that side.
        let cdo = orient2d(c, d, origin, eps);
        return cdo == cda || cdo == cdb;
    }

    // x straddles y's supporting line, so y separates one end of x from
    // the observer; x is closer iff the observer is on c's side of x.
    orient2d(a, b, origin, eps) != orient2d(a, b, c, eps)
}

/// Ordered-set key for the sweep state.
///
/// Couples a segment with the observer so the radial order can be
/// re-derived on every comparison. Precomputed distances would go stale:
/// the relative order of two segments changes as the sweep rotates, but
/// the pairwise order of segments crossed by a common ray does not.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveSegment<F> {
    pub segment: Segment2<F>,
    origin: Point2<F>,
}

impl<F: Float> ActiveSegment<F> {
    pub fn new(origin: Point2<F>, segment: Segment2<F>) -> Self {
        Self { segment, origin }
    }
}

impl<F: Float> PartialEq for ActiveSegment<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for ActiveSegment<F> {}

impl<F: Float> PartialOrd for ActiveSegment<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for ActiveSegment<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        if segment_closer(self.origin, &self.segment, &other.segment) {
            Ordering::Less
        } else if segment_closer(self.origin, &other.segment, &self.segment) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(a: (f32, f32), b: (f32, f32)) -> Segment2<f32> {
        Segment2::new(Point2::new(a.0, a.1), Point2::new(b.0, b.1))
    }

    /// Asserts that (a, b) is closer than (c, d) under every endpoint order.
    fn assert_closer(a: (f32, f32), b: (f32, f32), c: (f32, f32), d: (f32, f32)) {
        let origin = Point2::origin();
        for (x, y) in [
            (seg(a, b), seg(c, d)),
            (seg(b, a), seg(c, d)),
            (seg(a, b), seg(d, c)),
            (seg(b, a), seg(d, c)),
        ] {
            assert!(segment_closer(origin, &x, &y));
            assert!(!segment_closer(origin, &y, &x));
        }
    }

    /// Asserts that (a, b) and (c, d) are unordered under every endpoint order.
    fn assert_equivalent(a: (f32, f32), b: (f32, f32), c: (f32, f32), d: (f32, f32)) {
        let origin = Point2::origin();
        for (x, y) in [
            (seg(a, b), seg(c, d)),
            (seg(b, a), seg(c, d)),
            (seg(a, b), seg(d, c)),
            (seg(b, a), seg(d, c)),
        ] {
            assert!(!segment_closer(origin, &x, &y));
            assert!(!segment_closer(origin, &y, &x));
        }
    }

    #[test]
    fn test_no_common_endpoints() {
        assert_closer((1.0, 1.0), (1.0, -1.0), (2.0, 1.0), (2.0, -1.0));
        assert_closer((1.0, 1.0), (1.0, -1.0), (2.0, 2.0), (2.0, 3.0));
    }

    #[test]
    fn test_common_endpoints_diverging_wedges() {
        // Segments meeting end to end along the x = 1 line span disjoint
        // angular wedges, so neither is closer.
        assert_equivalent((1.0, 1.0), (1.0, 0.0), (1.0, 0.0), (1.0, -1.0));
    }

    #[test]
    fn test_coincident_segments() {
        assert_equivalent((1.0, 1.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0));
    }

    #[test]
    fn test_common_endpoints_shared_wedge() {
        assert_closer((2.0, 0.0), (1.0, 1.0), (2.0, 1.0), (2.0, 0.0));
        assert_closer((2.0, 1.0), (2.0, 0.0), (2.0, 0.0), (3.0, 1.0));
    }

    #[test]
    fn test_collinear_segments_order_by_distance() {
        // Both segments on the line y = x + 2, the nearer one first.
        assert_closer((-1.0, 1.0), (0.0, 2.0), (1.0, 3.0), (2.0, 4.0));
    }

    #[test]
    fn test_straddling_segment_behind() {
        // y = 2 wall straddled by a far segment behind it.
        assert_closer((-1.0, 2.0), (1.0, 2.0), (0.0, 3.0), (0.5, 5.0));
    }

    #[test]
    fn test_active_segment_set_order() {
        use std::collections::BTreeSet;

        let origin = Point2::origin();
        let near = seg((1.0, 1.0), (1.0, -1.0));
        let far = seg((2.0, 1.0), (2.0, -1.0));

        let mut state = BTreeSet::new();
        state.insert(ActiveSegment::new(origin, far));
        state.insert(ActiveSegment::new(origin, near));
        assert_eq!(state.len(), 2);
        assert_eq!(state.first().unwrap().segment, near);

        // Removal by the reversed segment finds the stored one.
        assert!(state.remove(&ActiveSegment::new(origin, near.reversed())));
        assert_eq!(state.first().unwrap().segment, far);
    }
}
