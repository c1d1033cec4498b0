//! Benchmarks for the visibility sweep.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sightline::{visibility_polygon, Point2, Segment2};

/// Generates a scene of disjoint wall chords arranged on concentric
/// rings around the origin, plus an enclosing box.
///
/// Each wall occupies its own angular slot on its ring, so no two walls
/// intersect and the sweep's preconditions hold by construction.
fn generate_ring_scene(num_walls: usize) -> Vec<Segment2<f32>> {
    const SLOTS: usize = 64;
    let mut walls = vec![
        Segment2::from_coords(-1.0e4, -1.0e4, -1.0e4, 1.0e4),
        Segment2::from_coords(-1.0e4, 1.0e4, 1.0e4, 1.0e4),
        Segment2::from_coords(1.0e4, 1.0e4, 1.0e4, -1.0e4),
        Segment2::from_coords(1.0e4, -1.0e4, -1.0e4, -1.0e4),
    ];

    for i in 0..num_walls {
        let ring = (i / SLOTS) as f32;
        let radius = 100.0 + ring * 40.0;
        let slot = (i % SLOTS) as f32;
        let step = 2.0 * std::f32::consts::PI / SLOTS as f32;
        let from = slot * step + step * 0.1;
        let to = slot * step + step * 0.8;
        walls.push(Segment2::from_coords(
            radius * from.cos(),
            radius * from.sin(),
            radius * to.cos(),
            radius * to.sin(),
        ));
    }

    walls
}

fn bench_visibility_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_polygon");

    for size in [16, 64, 256, 1024] {
        let walls = generate_ring_scene(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ring_scene", size), &walls, |b, walls| {
            b.iter(|| visibility_polygon(black_box(Point2::<f32>::origin()), walls.iter().copied()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visibility_polygon);
criterion_main!(benches);
