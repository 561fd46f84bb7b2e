//! Benchmark for the function decorators.
//!
//! Measures the per-call overhead each decorator adds on its fast path:
//! a `once` after the first call, a `memoize` cache hit, and a dropped
//! `throttle` call.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use underbar::decorator::{memoize, once, throttle};

// =============================================================================
// 1. once
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let wrapped = once(|value: u64| value * 3);
    wrapped.call(1);

    criterion.bench_function("once_cached_call", |bencher| {
        bencher.iter(|| black_box(*wrapped.call(black_box(2))));
    });
}

// =============================================================================
// 2. memoize
// =============================================================================

fn fibonacci(position: u64) -> u64 {
    (0..position).fold((0_u64, 1_u64), |(current, next), _| (next, current.wrapping_add(next))).0
}

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for cached in [1_u64, 100, 10_000] {
        let wrapped = memoize(fibonacci);
        for position in 0..cached {
            wrapped.call(position);
        }

        group.bench_with_input(BenchmarkId::new("hit", cached), &cached, |bencher, &cached| {
            bencher.iter(|| black_box(wrapped.call(black_box(cached / 2))));
        });
    }

    group.bench_function("uncached_function", |bencher| {
        bencher.iter(|| black_box(fibonacci(black_box(50))));
    });

    group.finish();
}

// =============================================================================
// 3. throttle
// =============================================================================

fn benchmark_throttle(criterion: &mut Criterion) {
    let wrapped = throttle(|value: u64| value + 1, Duration::from_secs(3600));
    wrapped.call(0);

    criterion.bench_function("throttle_dropped_call", |bencher| {
        bencher.iter(|| black_box(wrapped.call(black_box(1))));
    });
}

criterion_group!(benches, benchmark_once, benchmark_memoize, benchmark_throttle);

criterion_main!(benches);
