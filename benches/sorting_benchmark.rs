use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use xsort::prelude::*;

fn bench_random_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random u64");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("xsort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| xsort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("Patterns");
    group.sample_size(10);

    let count = 10_000u64;
    let ascending: Vec<u64> = (0..count).collect();
    let descending: Vec<u64> = (0..count).rev().collect();
    let saw: Vec<u64> = (0..count).map(|i| i % 97).collect();

    for (name, input) in [
        ("ascending", ascending),
        ("descending", descending),
        ("saw", saw),
    ] {
        group.bench_function(format!("xsort {}", name), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| xsort(black_box(&mut data)),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("slice::sort {}", name), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| data.sort(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_index_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Index Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let records: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random_range('a'..='z')).collect()
        })
        .collect();

    group.bench_function("argsort_by", |b| {
        b.iter(|| argsort_by(black_box(records.as_slice()), |x, y| x.cmp(y)))
    });

    group.bench_function("std index sort_by", |b| {
        b.iter(|| {
            let mut indices: Vec<usize> = (0..records.len()).collect();
            indices.sort_by(|&x, &y| records[x].cmp(&records[y]));
            indices
        })
    });

    group.finish();
}

criterion_group!(benches, bench_random_u64, bench_patterns, bench_index_sort);
criterion_main!(benches);
