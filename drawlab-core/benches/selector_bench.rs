//! Criterion benchmarks for DrawLab hot paths.
//!
//! Benchmarks:
//! 1. Single weighted pick at varying roster sizes
//! 2. Full draw without replacement
//! 3. Fairness simulation (1000 trials)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use drawlab_core::{draw_without_replacement, simulate, single_pick, Roster};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_roster(n: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 0..n {
        // Varied weights so the subtraction walk terminates at different depths.
        roster.add(format!("p{i}"), 1 + (i as u64 % 17)).unwrap();
    }
    roster
}

// ── 1. Single Pick ───────────────────────────────────────────────────

fn bench_single_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_pick");

    for &size in &[10, 100, 1000] {
        let roster = make_roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| single_pick(black_box(roster.participants()), &mut rng));
        });
    }

    group.finish();
}

// ── 2. Draw Without Replacement ──────────────────────────────────────

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_without_replacement");

    let roster = make_roster(100);
    for &winners in &[1usize, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("100_participants", winners),
            &winners,
            |b, &k| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| draw_without_replacement(black_box(&roster), k, &mut rng));
            },
        );
    }

    group.finish();
}

// ── 3. Fairness Simulation ───────────────────────────────────────────

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for &size in &[10, 100] {
        let roster = make_roster(size);
        group.bench_with_input(
            BenchmarkId::new("1000_trials", size),
            &size,
            |b, _| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| simulate(black_box(&roster), 1000, &mut rng));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_pick, bench_draw, bench_simulate);
criterion_main!(benches);
