//! Benchmarks for report computation.
//!
//! Run with: cargo bench -p carteira-engine --features parallel

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use carteira_engine::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_snapshot(size: usize) -> PortfolioSnapshot {
    let categories = Category::all();
    let holdings = (0..size).map(|i| {
        let category = categories[i % categories.len()];
        let sections = category.canonical_sections();
        let applied = 1_000.0 + (i % 97) as f64 * 150.0;

        Holding::builder()
            .id(format!("ASSET_{:05}", i))
            .category(category)
            .section(sections[i % sections.len()])
            .quantity(10.0 + (i % 13) as f64)
            .applied_value(applied)
            .current_value(applied * (0.8 + (i % 41) as f64 / 100.0))
            .target_percent((i % 25) as f64)
            .build()
            .unwrap()
    });

    let targets = categories
        .iter()
        .map(|&c| AllocationTarget::new(c, 100.0 / categories.len() as f64).with_band(5.0, 15.0));

    PortfolioSnapshot::builder()
        .add_holdings(holdings)
        .add_targets(targets)
        .build()
        .unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_report_sequential(c: &mut Criterion) {
    let config = ReportConfig::sequential();

    let mut group = c.benchmark_group("report_sequential");
    group.sample_size(50);

    for size in [10, 100, 500, 2_000].iter() {
        let snapshot = create_snapshot(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &snapshot, |b, s| {
            b.iter(|| build_report(black_box(s), &config))
        });
    }
    group.finish();
}

fn bench_report_parallel(c: &mut Criterion) {
    let config = ReportConfig::default().with_threshold(1);

    let mut group = c.benchmark_group("report_parallel");
    group.sample_size(50);

    for size in [100, 500, 2_000, 10_000].iter() {
        let snapshot = create_snapshot(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &snapshot, |b, s| {
            b.iter(|| build_report(black_box(s), &config))
        });
    }
    group.finish();
}

fn bench_diagnostics(c: &mut Criterion) {
    let snapshot = create_snapshot(500);
    let config = ReportConfig::default();

    c.bench_function("diagnostics_500", |b| {
        b.iter(|| black_box(&snapshot).diagnostics(&config))
    });
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(reports, bench_report_sequential, bench_report_parallel,);

criterion_group!(checks, bench_diagnostics,);

criterion_main!(reports, checks);
