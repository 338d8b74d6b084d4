//! geomvec benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Eager operator chains vs. lazy elementwise expressions
//! - Distance metrics across dimension counts
//! - Extents over large point clouds

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geomvec::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate points uniformly distributed in `[-100, 100)^N`.
fn generate_uniform_points<const N: usize>(size: usize, seed: u64) -> Vec<Vector<f64, N>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-100.0, 100.0).unwrap();
    (0..size)
        .map(|_| Vector::new(std::array::from_fn(|_| dist.sample(&mut rng))))
        .collect()
}

/// Generate integer points clustered around the origin.
fn generate_clustered_points<const N: usize>(size: usize, seed: u64) -> Vec<Vector<i64, N>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1_000.0).unwrap();
    (0..size)
        .map(|_| Vector::new(std::array::from_fn(|_| dist.sample(&mut rng) as i64)))
        .collect()
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let points = generate_uniform_points::<8>(3, 42);
    let (a, b, d) = (points[0], points[1], points[2]);

    group.bench_function("eager_chain_8d", |bench| {
        bench.iter(|| black_box((black_box(a) + black_box(b) - black_box(d)) * 2.0))
    });

    group.bench_function("lazy_chain_8d", |bench| {
        bench.iter(|| {
            let expr = (lazy(black_box(&a)) + black_box(&b) - black_box(&d)) * 2.0;
            black_box(Vector::<f64, 8>::from_expression(&expr))
        })
    });

    group.finish();
}

// ============================================================================
// Metric Benchmarks
// ============================================================================

fn bench_metrics_for<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let points = generate_uniform_points::<N>(1_000, 7);

    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_with_input(BenchmarkId::new("distance", N), &points, |bench, points| {
        bench.iter(|| {
            points
                .windows(2)
                .map(|pair| distance(&pair[0], &pair[1]))
                .sum::<f64>()
        })
    });
    group.bench_with_input(
        BenchmarkId::new("manhattan_distance", N),
        &points,
        |bench, points| {
            bench.iter(|| {
                points
                    .windows(2)
                    .map(|pair| manhattan_distance(&pair[0], &pair[1]))
                    .sum::<f64>()
            })
        },
    );
    group.bench_with_input(
        BenchmarkId::new("chebyshev_distance", N),
        &points,
        |bench, points| {
            bench.iter(|| {
                points
                    .windows(2)
                    .map(|pair| chebyshev_distance(&pair[0], &pair[1]))
                    .sum::<f64>()
            })
        },
    );

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    bench_metrics_for::<2>(c);
    bench_metrics_for::<3>(c);
    bench_metrics_for::<16>(c);
}

// ============================================================================
// Extent Benchmarks
// ============================================================================

fn bench_extents(c: &mut Criterion) {
    let mut group = c.benchmark_group("extents");

    for size in [1_000, 10_000, 100_000] {
        let points = generate_clustered_points::<3>(size, 123);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("extents", size), &points, |bench, points| {
            bench.iter(|| black_box(extents(points)))
        });
        group.bench_with_input(
            BenchmarkId::new("min_and_max_extent", size),
            &points,
            |bench, points| bench.iter(|| black_box((min_extent(points), max_extent(points)))),
        );
        group.bench_with_input(BenchmarkId::new("min_x", size), &points, |bench, points| {
            bench.iter(|| black_box(min_x(points)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_metrics, bench_extents);
criterion_main!(benches);
