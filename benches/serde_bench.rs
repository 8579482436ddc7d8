//! Benchmark for JSON encoding and decoding of Set.
//!
//! Compares Set against the standard library's HashSet going through
//! serde_json.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use keyset::Set;
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// Serialize
// =============================================================================

fn benchmark_serialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_serialize_set");

    for size in [100, 1000, 10000] {
        let set: Set<i32> = (0..size).collect();
        let standard_set: HashSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, _| {
            bencher.iter(|| {
                let json = set.to_json().unwrap();
                black_box(json)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                let json = serde_json::to_string(&standard_set).unwrap();
                black_box(json)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Deserialize
// =============================================================================

fn benchmark_deserialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_deserialize_set");

    for size in [100, 1000, 10000] {
        let standard_vec: Vec<i32> = (0..size).collect();
        let json = serde_json::to_string(&standard_vec).unwrap();

        group.bench_with_input(BenchmarkId::new("Set", size), &json, |bencher, json| {
            bencher.iter(|| {
                let set: Set<i32> = Set::from_json(json).unwrap();
                black_box(set)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Set::deserialize_json (reused)", size),
            &json,
            |bencher, json| {
                let mut set: Set<i32> = Set::new();
                bencher.iter(|| {
                    set.deserialize_json(json).unwrap();
                    black_box(set.len())
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashSet", size), &json, |bencher, json| {
            bencher.iter(|| {
                let set: HashSet<i32> = serde_json::from_str(json).unwrap();
                black_box(set)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_serialize, benchmark_deserialize);

criterion_main!(benches);
