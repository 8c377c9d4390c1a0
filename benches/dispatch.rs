//! Benchmarks for signal dispatch through a mounted telemetry core.
//!
//! Run with: cargo bench
//!
//! Every signal triggers a full recompute (no coalescing or throttling),
//! so the per-signal cost here bounds what a high-frequency pointer device
//! can impose. Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scrollspot::{SimulatedSource, SimulatedViewport, ViewportTelemetry};

type Core = ViewportTelemetry<SimulatedSource, SimulatedViewport>;

/// A mounted core over a 2800px document in an 800px viewport. The core is
/// returned so its listeners stay registered for the whole run.
fn mounted_core() -> (SimulatedSource, SimulatedViewport, Core) {
    let source = SimulatedSource::new();
    let viewport = SimulatedViewport::new(2800.0, 800.0);
    let mut telemetry = ViewportTelemetry::new(source.clone(), viewport.clone());
    telemetry.mount().expect("mount failed");
    (source, viewport, telemetry)
}

/// Benchmark one scroll signal: fresh metrics read plus progress recompute.
fn bench_scroll_dispatch(c: &mut Criterion) {
    let (source, viewport, _core) = mounted_core();

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));
    group.bench_function("scroll_signal", |b| {
        let mut offset = 0.0;
        b.iter(|| {
            offset = (offset + 7.0) % 2000.0;
            viewport.set_scroll_offset(black_box(offset));
            source.emit_scroll();
        })
    });
    group.finish();
}

/// Benchmark one pointer-move signal: tracker overwrite plus snapshot.
fn bench_pointer_dispatch(c: &mut Criterion) {
    let (source, _viewport, _core) = mounted_core();

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));
    group.bench_function("pointer_signal", |b| {
        let mut x = 0;
        b.iter(|| {
            x = (x + 3) % 1920;
            source.emit_pointer_move(black_box(x), black_box(540));
        })
    });
    group.finish();
}

/// Benchmark a burst of interleaved signals, the shape a real session
/// produces while scrolling with the pointer down.
fn bench_interleaved_burst(c: &mut Criterion) {
    let (source, viewport, _core) = mounted_core();
    const BURST: u64 = 64;

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(BURST * 2));
    group.bench_function("interleaved_burst", |b| {
        b.iter(|| {
            for i in 0..BURST {
                viewport.set_scroll_offset((i * 30) as f64);
                source.emit_scroll();
                source.emit_pointer_move(black_box(i as i32 * 5), black_box(i as i32 * 3));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scroll_dispatch,
    bench_pointer_dispatch,
    bench_interleaved_burst
);
criterion_main!(benches);
