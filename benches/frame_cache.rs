// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for frame cache operations.
//!
//! Measures the performance of:
//! - Adding frames under eviction pressure (steady-state playback)
//! - Lookups on a warm cache (scrubbing)
//! - Recency promotion and smallest-frame queries

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use frame_cache::{Frame, FrameCache, FrameNumber};
use std::hint::black_box;
use std::sync::Arc;

/// 1080p RGBA frame size, declared without allocating pixels.
const FRAME_BYTES: usize = 1920 * 1080 * 4;

struct BenchFrame {
    number: FrameNumber,
}

impl Frame for BenchFrame {
    fn frame_number(&self) -> FrameNumber {
        self.number
    }

    fn size_in_bytes(&self) -> usize {
        FRAME_BYTES
    }
}

fn warm_cache(frames: i64) -> FrameCache<BenchFrame> {
    let cache = FrameCache::new();
    for number in 1..=frames {
        cache.add(Arc::new(BenchFrame { number }));
    }
    cache
}

/// Benchmark insertion when every add evicts one frame.
fn bench_add_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_cache");

    for resident in [64i64, 512, 4096] {
        let cache = FrameCache::with_max_bytes(resident as usize * FRAME_BYTES);
        for number in 1..=resident {
            cache.add(Arc::new(BenchFrame { number }));
        }
        let mut next = resident + 1;

        group.bench_with_input(
            BenchmarkId::new("add_evicting", resident),
            &resident,
            |b, _| {
                b.iter(|| {
                    cache.add(Arc::new(BenchFrame { number: next }));
                    next += 1;
                });
            },
        );
    }

    group.finish();
}

/// Benchmark hits and misses on a warm cache.
fn bench_get_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_cache");
    let cache = warm_cache(1024);

    group.bench_function("get_frame_hit", |b| {
        let mut number = 0i64;
        b.iter(|| {
            number = number % 1024 + 1;
            black_box(cache.get_frame(black_box(number)));
        });
    });

    group.bench_function("get_frame_miss", |b| {
        b.iter(|| black_box(cache.get_frame(black_box(-1))));
    });

    group.finish();
}

/// Benchmark recency promotion and the smallest-frame query.
fn bench_recency(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_cache");
    let cache = warm_cache(1024);

    group.bench_function("move_to_front", |b| {
        let mut number = 0i64;
        b.iter(|| {
            number = number % 1024 + 1;
            cache.move_to_front(black_box(number));
        });
    });

    group.bench_function("smallest_frame", |b| {
        b.iter(|| black_box(cache.smallest_frame()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_with_eviction,
    bench_get_frame,
    bench_recency
);
criterion_main!(benches);
