//! Benchmark for the memoization cache.
//!
//! Measures cache-hit lookups against recomputing the wrapped function.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funky::memo::Memoizer;
use std::hint::black_box;

fn fibonacci(n: u64) -> u64 {
    if n < 2 { n } else { fibonacci(n - 1) + fibonacci(n - 2) }
}

fn benchmark_memoizer(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoizer");

    for size in [15_u64, 20, 25] {
        group.bench_with_input(BenchmarkId::new("direct", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(fibonacci(black_box(size))));
        });

        group.bench_with_input(
            BenchmarkId::new("memoized_hit", size),
            &size,
            |bencher, &size| {
                let mut memoized = Memoizer::new(|&(n,): &(u64,)| fibonacci(n));
                // Warm the entry so the measured path is the hit
                memoized.call((size,)).unwrap();
                bencher.iter(|| black_box(memoized.call((black_box(size),)).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_key_derivation(criterion: &mut Criterion) {
    use funky::memo::ToCacheKey;

    criterion.bench_function("cache_key_tuple", |bencher| {
        let arguments = (42_i64, "benchmark", true);
        bencher.iter(|| black_box(arguments.to_cache_key().unwrap()));
    });
}

criterion_group!(benches, benchmark_memoizer, benchmark_key_derivation);
criterion_main!(benches);
