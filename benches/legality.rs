//! Benchmarks for legal-move and legal-build enumeration.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use santorini_rules::actions::{buildable_cells, movable_cells};
use santorini_rules::core::{GameConfig, GameState, PlayerId};
use santorini_rules::game::GameBuilder;
use santorini_rules::roster::WorkerId;

fn setup(seed: u64) -> GameState {
    GameBuilder::new(GameConfig::default().with_seed(seed))
        .build_state()
        .unwrap()
}

fn bench_movable_cells(c: &mut Criterion) {
    let state = setup(42);
    let worker = WorkerId::new(PlayerId::new(0), 0);

    c.bench_function("movable_cells", |b| {
        b.iter(|| black_box(movable_cells(black_box(&state), worker)));
    });
}

fn bench_buildable_cells(c: &mut Criterion) {
    let state = setup(42);
    let worker = WorkerId::new(PlayerId::new(0), 0);

    c.bench_function("buildable_cells", |b| {
        b.iter(|| black_box(buildable_cells(black_box(&state), worker)));
    });
}

fn bench_all_workers(c: &mut Criterion) {
    // Every worker of both seats, the way a turn-start stuck check walks them
    let state = setup(7);
    let workers: Vec<WorkerId> = state
        .players()
        .iter()
        .flat_map(|(_, p)| p.worker_ids())
        .collect();

    c.bench_function("all_workers_moves_and_builds", |b| {
        b.iter(|| {
            for &worker in &workers {
                black_box(movable_cells(&state, worker));
                black_box(buildable_cells(&state, worker));
            }
        });
    });
}

criterion_group!(benches, bench_movable_cells, bench_buildable_cells, bench_all_workers);
criterion_main!(benches);
