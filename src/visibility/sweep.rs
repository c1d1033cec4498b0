//! Rotational plane sweep computing the visibility polygon.

use std::collections::BTreeSet;

use num_traits::Float;

use super::angle::angle_ordering;
use super::distance::{segment_closer, ActiveSegment};
use crate::primitives::{Point2, Ray2, Segment2};
use crate::tolerance::{approx_eq, orient2d, Orientation};

/// Relative tolerance for the ray casts performed by the sweep.
///
/// Looser than the machine epsilon used by the comparators: the cast
/// must report grazing hits at shared obstacle endpoints, or the
/// emission step would miss the wall behind a corner vertex.
const RAY_CAST_EPS: f64 = 1e-4;

/// Kind of sweep event. `End` sorts before `Start`, so at a shared
/// vertex the leaving segment is removed before the entering one is
/// added and the state set never holds two segments crossing there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    End,
    Start,
}

/// A stopping point of the rotational sweep: one endpoint of an
/// obstacle. The carried segment is oriented so that [`point`] is the
/// endpoint the event is for; an `End` event therefore carries the
/// segment reversed.
///
/// [`point`]: SweepEvent::point
#[derive(Debug, Clone, Copy)]
struct SweepEvent<F> {
    kind: EventKind,
    segment: Segment2<F>,
}

impl<F: Float> SweepEvent<F> {
    fn point(&self) -> Point2<F> {
        self.segment.start
    }
}

/// Computes the visibility polygon of `observer` amid the given
/// obstacle segments.
///
/// Returns the polygon vertices in clockwise order around the observer,
/// starting at the upward vertical ray. Obstacle endpoints may be given
/// in either order; segments collinear with the observer block nothing
/// and are ignored. The obstacles must not cross each other except at
/// shared endpoints and must not pass through the observer.
///
/// An empty obstacle set yields an empty polygon. The result never
/// contains three consecutive collinear vertices.
pub fn visibility_polygon<F, I>(observer: Point2<F>, obstacles: I) -> Vec<Point2<F>>
where
    F: Float,
    I: IntoIterator<Item = Segment2<F>>,
{
    let eps = F::epsilon();
    let mut events: Vec<SweepEvent<F>> = Vec::new();
    let mut state: BTreeSet<ActiveSegment<F>> = BTreeSet::new();

    for segment in obstacles {
        // Orient each segment's endpoints by sweep order and record its
        // events; a start event carries the endpoint swept first.
        match orient2d(observer, segment.start, segment.end, eps) {
            Orientation::Collinear => continue,
            Orientation::Clockwise => {
                events.push(SweepEvent {
                    kind: EventKind::Start,
                    segment,
                });
                events.push(SweepEvent {
                    kind: EventKind::End,
                    segment: segment.reversed(),
                });
            }
            Orientation::CounterClockwise => {
                events.push(SweepEvent {
                    kind: EventKind::Start,
                    segment: segment.reversed(),
                });
                events.push(SweepEvent {
                    kind: EventKind::End,
                    segment,
                });
            }
        }

        // Seed the state with segments already crossed by the sweep's
        // initial ray, the upward vertical from the observer.
        let (a, b) = if segment.start.x > segment.end.x {
            (segment.end, segment.start)
        } else {
            (segment.start, segment.end)
        };
        if orient2d(a, b, observer, eps) == Orientation::Clockwise
            && (approx_eq(b.x, observer.x, eps) || (a.x < observer.x && observer.x < b.x))
        {
            state.insert(ActiveSegment::new(observer, segment));
        }
    }

    // Sort by clockwise angle; where two events share a point, the kind
    // order puts End first.
    events.sort_by(|u, v| {
        if u.point().approx_eq(v.point(), eps) {
            u.kind.cmp(&v.kind)
        } else {
            angle_ordering(observer, u.point(), v.point())
        }
    });

    let cast_eps = F::from(RAY_CAST_EPS).unwrap();
    let mut vertices: Vec<Point2<F>> = Vec::new();

    for event in &events {
        if event.kind == EventKind::End {
            state.remove(&ActiveSegment::new(observer, event.segment));
        }

        if let Some(nearest) = state.first() {
            if segment_closer(observer, &event.segment, &nearest.segment) {
                // The nearest segment changes at this event: the polygon
                // boundary jumps between the event vertex and the wall
                // behind it.
                let ray = Ray2::from_points(observer, event.point());
                let hit = ray.intersect_segment(&nearest.segment, cast_eps);
                debug_assert!(
                    hit.is_some(),
                    "a ray toward the event point must hit every segment in the state"
                );
                match event.kind {
                    EventKind::Start => {
                        if let Some(intersection) = hit {
                            vertices.push(intersection);
                        }
                        vertices.push(event.point());
                    }
                    EventKind::End => {
                        vertices.push(event.point());
                        if let Some(intersection) = hit {
                            vertices.push(intersection);
                        }
                    }
                }
            }
        } else {
            vertices.push(event.point());
        }

        if event.kind == EventKind::Start {
            state.insert(ActiveSegment::new(observer, event.segment));
        }
    }

    remove_collinear(&mut vertices, eps);
    vertices
}

/// Compacts the vertex ring in place, dropping every vertex collinear
/// with its kept predecessor and raw successor. The ring is cyclic: the
/// first vertex is tested against the last raw one.
fn remove_collinear<F: Float>(vertices: &mut Vec<Point2<F>>, eps: F) {
    let n = vertices.len();
    let mut top = 0;
    for i in 0..n {
        let current = vertices[i];
        let prev = if top == 0 {
            vertices[n - 1]
        } else {
            vertices[top - 1]
        };
        let next = vertices[(i + 1) % n];
        if orient2d(prev, current, next, eps) != Orientation::Collinear {
            vertices[top] = current;
            top += 1;
        }
    }
    vertices.truncate(top);
}
