//! Benchmark for the sequence operators.
//!
//! Compares the `each`-based operators against hand-written iterator
//! chains, and measures the hash-based `uniq` over different duplicate
//! ratios.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashMap;
use std::hint::black_box;
use underbar::sequence::{contains, every, filter, map, pluck, reduce, uniq};

// =============================================================================
// 1. map / filter
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("underbar", size), &values, |bencher, values| {
            bencher.iter(|| black_box(map(values, |value, _| value * 2)));
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().map(|value| value * 2).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("underbar", size), &values, |bencher, values| {
            bencher.iter(|| black_box(filter(values, |value, _| value % 3 == 0)));
        });
    }

    group.finish();
}

// =============================================================================
// 2. reduce / contains / every
// =============================================================================

fn benchmark_reduce(criterion: &mut Criterion) {
    let values: Vec<i64> = (0..10_000).collect();

    criterion.bench_function("reduce_sum_10000", |bencher| {
        bencher.iter(|| black_box(reduce(&values, |total, value| total + value, 0)));
    });

    criterion.bench_function("contains_last_10000", |bencher| {
        bencher.iter(|| black_box(contains(&values, &black_box(9_999))));
    });

    criterion.bench_function("every_positive_10000", |bencher| {
        bencher.iter(|| black_box(every(&values, |value, _| *value >= 0)));
    });
}

// =============================================================================
// 3. uniq
// =============================================================================

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for distinct in [10, 1_000, 10_000] {
        let values: Vec<u32> = (0..10_000).map(|index| index % distinct).collect();

        group.bench_with_input(BenchmarkId::from_parameter(distinct), &values, |bencher, values| {
            bencher.iter(|| black_box(uniq(values)));
        });
    }

    group.finish();
}

// =============================================================================
// 4. pluck
// =============================================================================

fn benchmark_pluck(criterion: &mut Criterion) {
    let records: Vec<HashMap<&str, u32>> = (0..1_000)
        .map(|index| HashMap::from([("id", index), ("score", index * 7)]))
        .collect();

    criterion.bench_function("pluck_1000", |bencher| {
        bencher.iter(|| black_box(pluck(&records, &"score")));
    });
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_filter,
    benchmark_reduce,
    benchmark_uniq,
    benchmark_pluck
);

criterion_main!(benches);
