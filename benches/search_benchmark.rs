use criterion::{criterion_group, criterion_main, Criterion};

use isolation::board::{Board, Player};
use isolation::evaluate::Defensive;
use isolation::isolation_position;
use isolation::search::{alpha_beta, iterative_deepening, minimax, TimeoutGuard};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax depth 3", |b| b.iter(minimax_depth_3));
    c.bench_function("alpha beta depth 3", |b| b.iter(alpha_beta_depth_3));
    c.bench_function("iterative deepening to the ply bound", |b| {
        b.iter(iterative_deepening_full)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn midgame() -> Board {
    isolation_position! {
        ". . . . . . ."
        ". x . . . . ."
        ". . 1 . x . ."
        ". . . x . . ."
        ". . x . 2 . ."
        ". . . . . . ."
        ". . . . . . ."
    }
}

fn minimax_depth_3() {
    let board = midgame();
    let clock = || 1_000_000.0;
    let guard = TimeoutGuard::new(&clock, 10.0);

    minimax(&board, 3, Player::One, &Defensive, &guard).unwrap();
}

fn alpha_beta_depth_3() {
    let board = midgame();
    let clock = || 1_000_000.0;
    let guard = TimeoutGuard::new(&clock, 10.0);

    alpha_beta(&board, 3, Player::One, &Defensive, &guard).unwrap();
}

fn iterative_deepening_full() {
    let board = isolation_position! {
        ". . ."
        ". 1 ."
        "x . 2"
    };
    let clock = || 1_000_000.0;
    let guard = TimeoutGuard::new(&clock, 10.0);

    iterative_deepening(&board, Player::One, &Defensive, &guard);
}
