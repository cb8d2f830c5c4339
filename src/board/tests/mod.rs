//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node-count oracles for move generation
//! - `movegen.rs` - Check/pin invariants and symmetry
//! - `make_move.rs` - Move application and snapshot restore
//! - `edge_cases.rs` - Special positions and special moves
//! - `proptest.rs` - Property-based tests


use super::types::{Color, Piece};
use super::Board;

/// Assert that every piece list entry points at a square holding exactly
/// that piece, and that every occupied square is listed.
pub(crate) fn assert_lists_consistent(board: &Board) {
    let mut listed = 0usize;
    for color in Color::BOTH {
        let c = color.index();
        let classes = [
            (&board.pawns[c], Piece::PAWN),
            (&board.knights[c], Piece::KNIGHT),
            (&board.bishops[c], Piece::BISHOP),
            (&board.rooks[c], Piece::ROOK),
            (&board.queens[c], Piece::QUEEN),
        ];
        for (list, kind) in classes {
            for sq in list.iter() {
                assert_eq!(
                    board.piece_at(sq),
                    kind.colored(color),
                    "list entry {sq} disagrees with board"
                );
                listed += 1;
            }
        }

        let slider_total =
            board.bishops[c].len() + board.rooks[c].len() + board.queens[c].len();
        assert_eq!(board.sliders[c].len(), slider_total);
        for sq in board.sliders[c].iter() {
            assert!(board
                .piece_at(sq)
                .is_kind(Piece(Piece::BISHOP.0 | Piece::ROOK.0 | Piece::QUEEN.0)));
            assert!(board.piece_at(sq).has_color(color));
        }

        let king_sq = board.king_square(color);
        assert_eq!(board.piece_at(king_sq), Piece::KING.colored(color));
        listed += 1;
    }

    let mut occupied = 0usize;
    for rank in 0..8 {
        for file in 0..8 {
            if !board
                .piece_at(super::types::Square::new(rank, file))
                .is_empty()
            {
                occupied += 1;
            }
        }
    }
    assert_eq!(listed, occupied, "board and lists cover different squares");
}
