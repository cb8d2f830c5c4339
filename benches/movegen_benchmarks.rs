//! Benchmarks for the move generation core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::{Board, MoveList, STARTPOS_FEN};

// One entry per position family: name, FEN, deepest depth worth timing.
// Kiwipete branches so hard that depth 3 already dominates the group.
const PERFT_POSITIONS: [(&str, &str, usize); 4] = [
    ("startpos", STARTPOS_FEN, 4),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        3,
    ),
    ("endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 4),
    ("promotions", "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1", 4),
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    for (name, fen, max_depth) in PERFT_POSITIONS {
        let mut board = Board::from_fen(fen);
        for depth in 2..=max_depth {
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, &depth| {
                b.iter(|| board.perft(black_box(depth)))
            });
        }
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    // Starting position
    let mut startpos = Board::new();
    let mut moves = MoveList::new();
    group.bench_function("startpos", |b| {
        b.iter(|| {
            startpos.generate_legal_moves(&mut moves);
            black_box(moves.len())
        })
    });

    // Kiwipete (many moves available)
    let mut kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    group.bench_function("kiwipete", |b| {
        b.iter(|| {
            kiwipete.generate_legal_moves(&mut moves);
            black_box(moves.len())
        })
    });

    // Endgame with few pieces
    let mut endgame = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    group.bench_function("endgame", |b| {
        b.iter(|| {
            endgame.generate_legal_moves(&mut moves);
            black_box(moves.len())
        })
    });

    group.finish();
}

fn bench_fen(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen");

    group.bench_function("parse_kiwipete", |b| {
        b.iter(|| {
            Board::from_fen(black_box(
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            ))
        })
    });

    let board = Board::new();
    group.bench_function("emit_startpos", |b| b.iter(|| black_box(&board).to_fen()));

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_fen);
criterion_main!(benches);
