//! Pawn move generation.
//!
//! Pawn moves have the strangest side effects on the board: en passant
//! removes a pawn from a square the move never touches, and the capture can
//! uncover a rank check no pin marker on the moving pawn's ray would catch.
//! En-passant and promotion moves are therefore validated by playing them
//! on the raw board and probing the king, while plain pushes and captures
//! go through the cheap marker filters.

use crate::board::tables::{
    PAWN_BASE_RANK, PAWN_CAPTURE_DIRS, PAWN_PROMOTE_RANK, PAWN_PUSH_DIRS,
};
use crate::board::types::{Info, Move, MoveList, Piece, Square, PROMOTION_PIECES};
use crate::board::Board;

impl Board {
    pub(crate) fn generate_pawn_moves(&mut self, moves: &mut MoveList) {
        let color = self.player;
        let c = color.index();
        let opp = color.flip();

        // En-passant captures are found backwards: step from the target
        // square along the opponent's capture directions to land on our own
        // pawns, which keeps the capture loop below free of EP conditionals.
        if let Some(ep_sq) = self.ep_square {
            for d in 0..2 {
                let from = ep_sq.offset(PAWN_CAPTURE_DIRS[opp.index()][d]);
                if from.on_board() && self.squares[from.index()] == Piece::PAWN.colored(color) {
                    if let Some(mv) = self.pawn_move_if_legal(from, ep_sq, true) {
                        moves.push(mv);
                    }
                }
            }
        }

        for i in 0..self.pawns[c].len() {
            let from = self.pawns[c].get(i);

            // a. Captures.
            for d in 0..2 {
                let to = from.offset(PAWN_CAPTURE_DIRS[c][d]);
                if !to.on_board() {
                    continue;
                }
                let tpiece = self.squares[to.index()];
                if !tpiece.has_color(opp) {
                    continue;
                }
                if to.rank() == PAWN_PROMOTE_RANK[c] {
                    // If one promotion is legal, all four are.
                    if self.try_pawn_move(from, to, to, tpiece) {
                        for &promo in &PROMOTION_PIECES {
                            moves.push(Move::new(from, to, promo));
                        }
                    }
                } else if let Some(mv) = self.pawn_move_if_legal(from, to, false) {
                    moves.push(mv);
                }
            }

            // b. Push by one. Pawns never sit on their promotion rank, so
            // the target square needs no on-board test.
            let to = from.offset(PAWN_PUSH_DIRS[c]);
            if self.squares[to.index()].is_empty() {
                if to.rank() == PAWN_PROMOTE_RANK[c] {
                    if self.try_pawn_move(from, to, to, Piece::EMPTY) {
                        for &promo in &PROMOTION_PIECES {
                            moves.push(Move::new(from, to, promo));
                        }
                    }
                } else if let Some(mv) = self.pawn_move_if_legal(from, to, false) {
                    moves.push(mv);
                }

                // c. Double push from the base rank.
                if from.rank() == PAWN_BASE_RANK[c] {
                    let to2 = to.offset(PAWN_PUSH_DIRS[c]);
                    if self.squares[to2.index()].is_empty() {
                        if let Some(mv) = self.pawn_move_if_legal(from, to2, false) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }
    }

    /// Filter one non-promoting pawn move. En-passant captures are decided
    /// by simulation; everything else by the pin and check markers.
    fn pawn_move_if_legal(&mut self, from: Square, to: Square, ep_capture: bool) -> Option<Move> {
        if ep_capture {
            let opp = self.player.flip();
            // The captured pawn sits one push-step behind the target square.
            let cap_sq = to.offset(PAWN_PUSH_DIRS[opp.index()]);
            if self.try_pawn_move(from, to, cap_sq, Piece::PAWN.colored(opp)) {
                return Some(Move::new(from, to, Piece::NONE));
            }
            return None;
        }

        let from_pin = self.info[from.index()].pinval();
        if from_pin != 0 && self.info[to.index()].pinval() != from_pin {
            // Pinned and the target leaves the pin ray.
            return None;
        }
        if self.check.is_single() && !self.info[to.index()].is_set(Info::CHECK) {
            // In check and the move does not address it.
            return None;
        }
        Some(Move::new(from, to, Piece::NONE))
    }

    /// Play the pawn move on the raw board (promotions kept as pawns, which
    /// blocks rays identically), probe the king, and restore the squares.
    fn try_pawn_move(&mut self, from: Square, to: Square, cap_sq: Square, cap_piece: Piece) -> bool {
        let color = self.player;

        self.squares[cap_sq.index()] = Piece::EMPTY;
        self.squares[to.index()] = self.squares[from.index()];
        self.squares[from.index()] = Piece::EMPTY;

        // The captured piece is still listed on `cap_sq`; ignore it there.
        let legal =
            !self.is_square_attacked(self.kings[color.index()], Some(cap_sq), color);

        self.squares[from.index()] = Piece::PAWN.colored(color);
        if cap_sq == to {
            self.squares[to.index()] = cap_piece;
        } else {
            self.squares[cap_sq.index()] = cap_piece;
            self.squares[to.index()] = Piece::EMPTY;
        }

        legal
    }
}
