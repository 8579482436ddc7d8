//! Benchmark for Set vs standard HashSet.
//!
//! Compares keyset's Set against Rust's standard HashSet for the core
//! mutation and lookup operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use keyset::Set;
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = Set::new();
                set.insert_all((0..size).map(black_box));
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = HashSet::new();
                set.extend((0..size).map(black_box));
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [1_000, 10_000, 100_000] {
        let set: Set<i32> = (0..size).collect();
        let standard: HashSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for index in 0..size * 2 {
                    if set.contains(black_box(&index)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for index in 0..size * 2 {
                    if standard.contains(black_box(&index)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove / clear Benchmark
// =============================================================================

fn benchmark_remove_and_clear(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_and_clear");

    for size in [1_000, 10_000] {
        let source: Set<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("remove_all", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = source.clone();
                set.remove_all((0..size).step_by(2));
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("clear", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut set = source.clone();
                set.clear();
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// to_vec Benchmark
// =============================================================================

fn benchmark_to_vec(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("to_vec");

    for size in [1_000, 10_000, 100_000] {
        let set: Set<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.to_vec()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_remove_and_clear,
    benchmark_to_vec
);

criterion_main!(benches);
