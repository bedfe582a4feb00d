//! Criterion benchmarks for the Jarvis march.
//! Focus sizes: n in {10, 100, 1000}; disk clouds (h grows slowly) vs
//! points on a circle (every point is a vertex, worst case O(n²)).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p giftwrap

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use giftwrap::api::{
    convex_hull, draw_point_cloud, CloudCfg, CloudShape, PointSet, ReplayToken, Vec2,
};

fn disk_cloud(n: usize, seed: u64) -> PointSet {
    let cfg = CloudCfg {
        count: n,
        shape: CloudShape::Disk,
        ..CloudCfg::default()
    };
    draw_point_cloud(cfg, ReplayToken { seed, index: 0 }).unwrap()
}

fn circle(n: usize) -> PointSet {
    let pts = (0..n)
        .map(|k| {
            let theta = std::f64::consts::TAU * (k as f64) / (n as f64);
            Vec2::new(theta.cos(), theta.sin())
        })
        .collect();
    PointSet::new(pts).unwrap()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("jarvis");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("disk", n), &n, |b, &n| {
            b.iter_batched(
                || disk_cloud(n, 43),
                |pts| {
                    let _hull = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            let pts = circle(n);
            b.iter(|| convex_hull(&pts).map(|h| h.len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
