//! Criterion benchmarks for collection_core shuffling and chunking.
//!
//! Compares the in-place, copy and lazy shuffle forms and measures chunking
//! across input sizes to characterise scaling behaviour.

use collection_core::rng::CollectionRng;
use collection_core::shuffle::{shuffle_in_place_with, shuffle_iter_with, shuffled_with};
use collection_core::split::{split, split_iter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark the three shuffle forms with a seeded source.
fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for size in [100, 10_000, 1_000_000] {
        let items: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("in_place", size), &items, |b, items| {
            let mut rng = CollectionRng::from_seed(42);
            let mut buffer = items.clone();
            b.iter(|| shuffle_in_place_with(black_box(&mut buffer), &mut rng));
        });

        group.bench_with_input(BenchmarkId::new("copy", size), &items, |b, items| {
            let mut rng = CollectionRng::from_seed(42);
            b.iter(|| shuffled_with(black_box(items), &mut rng));
        });

        group.bench_with_input(BenchmarkId::new("lazy", size), &items, |b, items| {
            let mut rng = CollectionRng::from_seed(42);
            b.iter(|| {
                shuffle_iter_with(black_box(items).iter().copied(), &mut rng).sum::<u64>()
            });
        });
    }

    group.finish();
}

/// Benchmark chunking of slices and iterators.
fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in [1_000u64, 100_000] {
        let items: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("slice", size), &items, |b, items| {
            b.iter(|| split(black_box(items), 64).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("iter", size), &items, |b, items| {
            b.iter(|| split_iter(black_box(items).iter().copied(), 64).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shuffle, bench_split);
criterion_main!(benches);
