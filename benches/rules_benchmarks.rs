//! Benchmarks for move validation and execution throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::{Coord, Match, MoveRequest};

fn req(from: &str, to: &str) -> MoveRequest {
    MoveRequest::new(Coord::from_notation(from), Coord::from_notation(to))
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let game = Match::standard();
    group.bench_function("pawn_double_push", |b| {
        b.iter(|| black_box(game.validate(&req("e2", "e4"))))
    });
    group.bench_function("knight_jump", |b| {
        b.iter(|| black_box(game.validate(&req("g1", "f3"))))
    });
    group.bench_function("blocked_slider", |b| {
        b.iter(|| black_box(game.validate(&req("a1", "a8"))))
    });
    group.bench_function("off_board", |b| {
        let request = MoveRequest::new(Coord::INVALID, Coord::from_notation("e4"));
        b.iter(|| black_box(game.validate(&request)))
    });

    group.finish();
}

fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");

    // Four-move loop that returns to the starting position each iteration.
    let shuffle = [
        ("g1", "f3"),
        ("g8", "f6"),
        ("f3", "g1"),
        ("f6", "g8"),
    ];
    group.bench_function("knight_shuffle", |b| {
        let mut game = Match::standard();
        b.iter(|| {
            for (from, to) in shuffle {
                assert!(game.execute(&req(from, to)));
                game.tick(1.0 / 60.0);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_validate, bench_execute);
criterion_main!(benches);
