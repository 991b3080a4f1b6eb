// Repeated, warmed-up measurements of every pattern pair. The perf-compare
// binary only times each side once; use these numbers when the ratio matters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use perf_patterns::patterns::{
    dictionary_access, filtering, insertion, lookups, membership, nested_loops, string_building,
};
use std::collections::HashMap;

fn bench_string_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_building");
    let n = 5000;

    group.bench_with_input(BenchmarkId::new("inefficient", n), &n, |b, &n| {
        b.iter(|| string_building::inefficient(black_box(n)))
    });
    group.bench_with_input(BenchmarkId::new("optimized", n), &n, |b, &n| {
        b.iter(|| string_building::optimized(black_box(n)))
    });

    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let items: Vec<i64> = (0..2000).collect();

    group.bench_with_input(BenchmarkId::new("inefficient", items.len()), &items, |b, items| {
        b.iter(|| membership::inefficient(black_box(items), 1000))
    });
    group.bench_with_input(BenchmarkId::new("optimized", items.len()), &items, |b, items| {
        b.iter(|| membership::optimized(black_box(items), 1000))
    });

    group.finish();
}

fn bench_slices(c: &mut Criterion) {
    let data: Vec<i64> = (0..200).collect();
    let mut group = c.benchmark_group("nested_loops");
    group.bench_with_input(BenchmarkId::new("inefficient", data.len()), &data, |b, d| {
        b.iter(|| nested_loops::inefficient(black_box(d)))
    });
    group.bench_with_input(BenchmarkId::new("optimized", data.len()), &data, |b, d| {
        b.iter(|| nested_loops::optimized(black_box(d)))
    });
    group.finish();

    let numbers: Vec<i64> = (0..1000).collect();
    let mut group = c.benchmark_group("filtering");
    group.bench_with_input(BenchmarkId::new("inefficient", numbers.len()), &numbers, |b, d| {
        b.iter(|| filtering::inefficient(black_box(d)))
    });
    group.bench_with_input(BenchmarkId::new("optimized", numbers.len()), &numbers, |b, d| {
        b.iter(|| filtering::optimized(black_box(d)))
    });
    group.finish();
}

fn bench_sized(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    for n in [100usize, 1000] {
        group.bench_with_input(BenchmarkId::new("inefficient", n), &n, |b, &n| {
            b.iter(|| insertion::inefficient(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("optimized", n), &n, |b, &n| {
            b.iter(|| insertion::optimized(black_box(n)))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("lookups");
    let n = 2000;
    group.bench_function("inefficient", |b| b.iter(|| lookups::inefficient(black_box(n))));
    group.bench_function("optimized", |b| b.iter(|| lookups::optimized(black_box(n))));
    group.finish();
}

fn bench_dictionary_access(c: &mut Criterion) {
    let map: HashMap<String, usize> = (0..2000).map(|i| (format!("key_{}", i), i)).collect();
    let mut group = c.benchmark_group("dictionary_access");
    group.bench_function("inefficient", |b| {
        b.iter(|| dictionary_access::inefficient(black_box(&map)))
    });
    group.bench_function("optimized", |b| {
        b.iter(|| dictionary_access::optimized(black_box(&map)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_string_building,
    bench_membership,
    bench_slices,
    bench_sized,
    bench_dictionary_access
);
criterion_main!(benches);
