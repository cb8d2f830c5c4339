//! Perft driver for move generation debugging.
//!
//! Prints the divide counts for each root move plus the total, which is the
//! fastest way to bisect a generator bug against a known-good engine.

use std::env;

use chess_core::board::{Board, STARTPOS_FEN};

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: usize = match args.get(1).map(|s| s.parse()) {
        Some(Ok(d)) => d,
        Some(Err(_)) => {
            eprintln!("usage: perft <depth> [fen]");
            return;
        }
        None => 5,
    };
    let fen = args.get(2).map_or(STARTPOS_FEN, String::as_str);

    let mut board = match Board::try_from_fen(fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("bad FEN: {err}");
            return;
        }
    };

    println!("{board}");

    let results = board.perft_divide(depth);
    let mut total = 0u64;
    for (notation, nodes) in &results {
        println!("{notation} {nodes}");
        total += nodes;
    }
    println!("TOTAL {total}");
}
