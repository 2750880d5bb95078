//! Performance measurement for homography solving and point projection

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use calepin::geometry::{Quad, solve};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures full solve cost for affine and perspective destinations
fn bench_solve(c: &mut Criterion) {
    let Ok(axis_aligned) = Quad::from_pixels([
        [0.0, 0.0],
        [800.0, 0.0],
        [800.0, 600.0],
        [0.0, 600.0],
    ]) else {
        return;
    };
    let Ok(skewed) = Quad::from_pixels([
        [100.0, 80.0],
        [620.0, 120.0],
        [580.0, 440.0],
        [60.0, 400.0],
    ]) else {
        return;
    };

    let mut group = c.benchmark_group("solve");
    group.bench_function("affine", |b| {
        b.iter(|| solve(black_box(800.0), black_box(600.0), &axis_aligned));
    });
    group.bench_function("perspective", |b| {
        b.iter(|| solve(black_box(400.0), black_box(300.0), &skewed));
    });
    group.finish();
}

/// Measures per-point projection through a solved perspective transform
fn bench_apply(c: &mut Criterion) {
    let Ok(quad) = Quad::from_pixels([
        [100.0, 80.0],
        [620.0, 120.0],
        [580.0, 440.0],
        [60.0, 400.0],
    ]) else {
        return;
    };
    let Ok(transform) = solve(400.0, 300.0, &quad) else {
        return;
    };

    c.bench_function("apply_point", |b| {
        b.iter(|| transform.apply(black_box(123.0), black_box(45.0)));
    });
}

criterion_group!(benches, bench_solve, bench_apply);
criterion_main!(benches);
