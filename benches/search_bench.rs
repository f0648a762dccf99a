//! Criterion benchmarks for the combination search.
//!
//! Uses synthetic catalogs sized like real inputs (tens of activities,
//! tens of hours) to measure the pruned enumeration, and the built-in
//! catalog as a realistic fixture.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trainplan::catalog::{Activity, ActivityCatalog};
use trainplan::search::{SearchConfig, SearchRunner};

// ===========================================================================
// Fixtures
// ===========================================================================

fn synthetic_catalog(size: usize) -> ActivityCatalog {
    let activities: Vec<Activity> = (0..size)
        .map(|i| {
            let duration = 1 + (i % 3) as u32;
            let cost = if i % 7 == 6 { -13 } else { 10 + (i * 11 % 50) as i32 };
            let points = (i * 17 % 60) as u32;
            Activity::new(format!("act{i}"), duration, cost).with_points(points)
        })
        .collect();
    ActivityCatalog::from_activities(activities).expect("synthetic catalog is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_builtin_catalog(c: &mut Criterion) {
    let catalog = ActivityCatalog::builtin();
    let config = SearchConfig::default()
        .with_available_time(10)
        .with_available_resource(80)
        .with_top_n(10);

    c.bench_function("search_builtin_10h", |b| {
        b.iter(|| SearchRunner::run(black_box(&catalog), black_box(&config)).unwrap())
    });
}

fn bench_catalog_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_catalog_size");
    for size in [6, 10, 14] {
        let catalog = synthetic_catalog(size);
        let config = SearchConfig::default()
            .with_available_time(10)
            .with_available_resource(80)
            .with_top_n(10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| SearchRunner::run(black_box(&catalog), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_time_budgets(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_time_budget");
    let catalog = synthetic_catalog(10);
    for hours in [6u32, 10, 14] {
        let config = SearchConfig::default()
            .with_available_time(hours)
            .with_available_resource(80)
            .with_top_n(10);
        group.bench_with_input(BenchmarkId::from_parameter(hours), &hours, |b, _| {
            b.iter(|| SearchRunner::run(black_box(&catalog), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_builtin_catalog,
    bench_catalog_sizes,
    bench_time_budgets
);
criterion_main!(benches);
