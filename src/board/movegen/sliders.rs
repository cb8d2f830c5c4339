//! Sliding move generation for bishops, rooks and queens.

use crate::board::tables::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::board::types::{Info, Move, MoveList, Piece};
use crate::board::Board;

impl Board {
    pub(crate) fn generate_bishop_moves(&self, moves: &mut MoveList) {
        self.generate_sliding_moves(moves, &DIAGONAL_DIRS, Piece::BISHOP);
    }

    pub(crate) fn generate_rook_moves(&self, moves: &mut MoveList) {
        self.generate_sliding_moves(moves, &ORTHOGONAL_DIRS, Piece::ROOK);
    }

    pub(crate) fn generate_queen_moves(&self, moves: &mut MoveList) {
        self.generate_sliding_moves(moves, &ORTHOGONAL_DIRS, Piece::QUEEN);
        self.generate_sliding_moves(moves, &DIAGONAL_DIRS, Piece::QUEEN);
    }

    /// Walk each piece of `kind` outward along `dirs`, emitting moves that
    /// survive the pin and check filters of the info board.
    fn generate_sliding_moves(&self, moves: &mut MoveList, dirs: &[i8; 4], kind: Piece) {
        let color = self.player;
        let is_check = self.check.is_single();
        let list = self.kind_list(color, kind);

        for i in 0..list.len() {
            let from = list.get(i);
            let from_pin = self.info[from.index()].pinval();
            let is_pinned = from_pin != 0;

            for &dir in dirs {
                let mut to = from.offset(dir);
                loop {
                    if !to.on_board() {
                        break;
                    }
                    if is_pinned && self.info[to.index()].pinval() != from_pin {
                        // Pinned and the target leaves the pin ray.
                        break;
                    }
                    if is_check && !self.info[to.index()].is_set(Info::CHECK) {
                        // The move neither captures the checker nor blocks
                        // the ray; an occupied square also ends the walk.
                        if !self.squares[to.index()].is_empty() {
                            break;
                        }
                    } else {
                        let tpiece = self.squares[to.index()];
                        if tpiece.has_color(color) {
                            break;
                        }
                        moves.push(Move::new(from, to, Piece::NONE));
                        if !tpiece.is_empty() {
                            // A capture ends the ray.
                            break;
                        }
                    }
                    to = to.offset(dir);
                }
            }
        }
    }
}
