//! Criterion benchmarks for full runs, single ticks and collision resolution.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gridcar_bench::{crowded_profile, reference_profile, stress_profile};
use gridcar_core::{Car, Field, TickId};
use gridcar_engine::resolve;
use gridcar_test_utils::random_roster;

/// Benchmark: run the reference profile to completion.
fn bench_run_reference(c: &mut Criterion) {
    c.bench_function("run_reference", |b| {
        b.iter_batched(
            || reference_profile(42),
            |mut sim| black_box(sim.run()),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: run the stress profile to completion.
fn bench_run_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("run_stress", |b| {
        b.iter_batched(
            || stress_profile(42),
            |mut sim| black_box(sim.run()),
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

/// Benchmark: one tick of the crowded profile, collisions included.
fn bench_first_tick_crowded(c: &mut Criterion) {
    c.bench_function("first_tick_crowded", |b| {
        b.iter_batched(
            || crowded_profile(42),
            |mut sim| black_box(sim.step()),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: resolver scan alone over 1024 cars on a 32x32 field.
fn bench_resolve_1k(c: &mut Criterion) {
    let field = Field::new(32, 32).unwrap();
    let roster: Vec<Car> = random_roster(&field, 1024, 1, 42);

    c.bench_function("resolve_1k", |b| {
        b.iter_batched(
            || roster.clone(),
            |mut cars| black_box(resolve(TickId(1), &mut cars)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_run_reference,
    bench_run_stress,
    bench_first_tick_crowded,
    bench_resolve_1k
);
criterion_main!(benches);
