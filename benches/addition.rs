//! Benchmarks for the addition pipeline.
//!
//! These measure the cost of the full parse/merge/canonicalize/render
//! pipeline against worst-case operands (maximal subtractive spellings and
//! long expanded runs), and the canonicalization sweep in isolation.

use calculi::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmarks the full string-level pipeline on small operands.
fn bench_add_small(c: &mut Criterion) {
    c.bench_function("add_small", |b| {
        b.iter(|| add(black_box("CX"), black_box("LXII")).unwrap());
    });
}

/// Benchmarks the pipeline on the worst-case operands: every tier carries
/// and every subtractive pair must expand and refold.
fn bench_add_worst_case(c: &mut Criterion) {
    c.bench_function("add_worst_case", |b| {
        b.iter(|| add(black_box("MMMCMXCIX"), black_box("MMMCMXCIX")).unwrap());
    });
}

/// Benchmarks the canonicalization sweep alone on a long denormalized run.
fn bench_canonicalize_long_run(c: &mut Criterion) {
    // 1999 + 1999 merged but not yet collapsed.
    let left = parse("MCMXCIX").unwrap();
    let right = parse("MCMXCIX").unwrap();
    let merged = raw_add(&left, &right);

    c.bench_function("canonicalize_long_run", |b| {
        b.iter(|| canonicalize(black_box(&merged)));
    });
}

/// Benchmarks the raw merge alone, without canonicalization.
fn bench_raw_add(c: &mut Criterion) {
    let left = parse("DCCCLXXXVIII").unwrap();
    let right = parse("CMXCIX").unwrap();

    c.bench_function("raw_add", |b| {
        b.iter(|| raw_add(black_box(&left), black_box(&right)));
    });
}

criterion_group!(
    benches,
    bench_add_small,
    bench_add_worst_case,
    bench_canonicalize_long_run,
    bench_raw_add
);
criterion_main!(benches);
