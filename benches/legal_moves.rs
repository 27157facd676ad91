use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rust_go::controller::{Agent, ControllerConfig, GameController, RandomAgent};
use rust_go::core::{Color, GameConfig, GameState, Position};

/// A mid-game position reached by two seeded random agents.
fn midgame(size: u8, plies: u32) -> GameState {
    let config = GameConfig::new(size);
    let mut ctl = GameController::new(config, ControllerConfig::default());
    let mut black = RandomAgent::new(17);
    let mut white = RandomAgent::new(29);
    while ctl.state().move_index() < plies && !ctl.is_over() {
        let state = ctl.state().clone();
        let mv = match ctl.turn() {
            Color::Black => black.select(&state),
            _ => white.select(&state),
        };
        if ctl.submit(mv).is_err() {
            break;
        }
    }
    ctl.state().as_ref().clone()
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    for (size, plies) in [(7u8, 20u32), (9, 40), (19, 200)] {
        let state = midgame(size, plies);
        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| black_box(state.legal_moves()))
        });
    }
    group.finish();
}

fn bench_play(c: &mut Criterion) {
    let state = midgame(19, 200);
    let target = state.legal_moves()[0];
    c.bench_function("play_19x19", |b| {
        b.iter(|| black_box(state.play(black_box(target))))
    });
    c.bench_function("score_19x19", |b| b.iter(|| black_box(state.score())));
    c.bench_function("snapshot_clone_19x19", |b| {
        b.iter(|| black_box(state.clone()).is_legal(Position::new(0, 0)))
    });
}

criterion_group!(benches, bench_legal_moves, bench_play);
criterion_main!(benches);
