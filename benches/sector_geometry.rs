//! Benchmarks for the sector geometry core
//!
//! The geometry path is recomputed for every interval on every render
//! pass, so per-call cost bounds how many overlays a host can stack
//! before a one-second tick starts to feel slow.
//!
//! Platform: Cross-platform (pure computation, CI-safe)

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use dialface::types::{ClockFrame, Interval, WallTime};
use dialface::{compute_sector, time_to_angle};

fn bench_time_to_angle(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_to_angle");

    group.bench_function("well_formed", |b| b.iter(|| time_to_angle(black_box("09:30"))));
    group.bench_function("malformed_fallback", |b| b.iter(|| time_to_angle(black_box("garbage"))));

    group.finish();
}

fn bench_compute_sector(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_sector");

    group.bench_function("arc_sector", |b| {
        b.iter(|| {
            compute_sector(black_box("09:00"), black_box("17:00"), black_box("#ff0000"), 2)
        })
    });
    group.bench_function("full_annulus", |b| {
        b.iter(|| {
            compute_sector(black_box("10:00"), black_box("10:00"), black_box("#0000ff"), 0)
        })
    });

    group.finish();
}

fn bench_frame_projection(c: &mut Criterion) {
    let intervals: Vec<Interval> = (0..8u64)
        .map(|i| Interval {
            id: i,
            start: format!("{:02}:00", i + 1),
            end: format!("{:02}:00", i + 3),
            color: "#abcdef".to_string(),
        })
        .collect();

    c.bench_function("frame_projection_8_intervals", |b| {
        b.iter(|| {
            ClockFrame::project(black_box(WallTime::new(10, 15, 30)), black_box(&intervals))
        })
    });
}

criterion_group!(benches, bench_time_to_angle, bench_compute_sector, bench_frame_projection);
criterion_main!(benches);
