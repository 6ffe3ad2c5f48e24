//! Chess Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.

use std::hint::black_box;

use chess_engine::api::{self, new_game};
use chess_engine::evaluation::{BoardEvaluator, StandardBoardEvaluator};
use chess_engine::move_gen::generate_pseudo_legal_moves;
use chess_engine::{Alliance, MiniMax, MoveStrategy};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(new_game())));
}

fn bench_move_generation_starting(c: &mut Criterion) {
    let position = new_game();

    c.bench_function("generate_moves_starting_position", |b| {
        b.iter(|| black_box(generate_pseudo_legal_moves(&position, Alliance::White)))
    });
}

fn bench_make_move(c: &mut Criterion) {
    let position = new_game();
    let mv = api::create_move(&position, 52, 36);

    c.bench_function("make_move_e2e4", |b| {
        b.iter(|| black_box(api::make_move(&position, &mv).status()))
    });
}

fn bench_evaluate_position_starting(c: &mut Criterion) {
    let position = new_game();

    c.bench_function("evaluate_position_starting", |b| {
        b.iter(|| black_box(StandardBoardEvaluator.evaluate(&position, 0)))
    });
}

fn bench_shallow_search(c: &mut Criterion) {
    let position = new_game();
    let search = MiniMax::new(2);

    c.bench_function("minimax_depth_2_starting", |b| {
        b.iter(|| black_box(search.execute(&position)))
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_move_generation_starting,
    bench_make_move,
    bench_evaluate_position_starting,
    bench_shallow_search,
);
criterion_main!(benches);
