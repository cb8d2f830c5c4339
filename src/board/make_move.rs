//! Move application.

use super::tables::{
    CASTLING_DETECT_LONG, CASTLING_DETECT_SHORT, CASTLING_PATH_LONG, CASTLING_PATH_SHORT,
    CASTLING_ROOK_LONG, CASTLING_ROOK_SHORT, PAWN_PUSH_DIRS,
};
use super::types::{Move, Piece};
use super::Board;

impl Board {
    /// Apply a move that is known to be legal for the current position.
    ///
    /// Capture, en passant, double push and castling are derived from the
    /// position itself. Passing a move that is not legal here violates the
    /// board invariants; the detectable cases (capturing a king, moving an
    /// empty or unknown piece slot) abort with the position and the move.
    pub fn make_legal_move(&mut self, mv: Move) {
        let (from, to) = (mv.from(), mv.to());
        let color = self.player;
        let opp = color.flip();
        let c = color.index();
        let o = opp.index();

        let ptype = self.squares[from.index()].kind();
        let tpiece = self.squares[to.index()];

        if !tpiece.is_empty() {
            if tpiece.is_kind(Piece::KING) {
                panic!(
                    "make_legal_move: capturing a king\n{}\n{}for move: {mv}",
                    self.info_string(),
                    self
                );
            }
            self.remove_piece(to);

            // Capturing a rook on its home square kills that castling side.
            if to == CASTLING_ROOK_SHORT[o] {
                self.castle_short[o] = false;
            } else if to == CASTLING_ROOK_LONG[o] {
                self.castle_long[o] = false;
            }
        } else if ptype == Piece::PAWN && Some(to) == self.ep_square {
            // En passant: the captured pawn is one push-step behind.
            let cap_sq = to.offset(PAWN_PUSH_DIRS[o]);
            self.remove_piece(cap_sq);
        }

        self.squares[to.index()] = self.squares[from.index()];
        self.squares[from.index()] = Piece::EMPTY;
        self.ep_square = None;

        match ptype {
            Piece::PAWN => {
                if from.rank().abs_diff(to.rank()) == 2 {
                    self.ep_square = Some(from.offset(PAWN_PUSH_DIRS[c]));
                }
                if let Some(promo) = mv.promotion() {
                    self.pawns[c].remove(from);
                    self.add_piece(to, promo.colored(color));
                } else {
                    self.pawns[c].move_piece(from, to);
                }
            }
            Piece::KNIGHT => self.knights[c].move_piece(from, to),
            Piece::BISHOP => {
                self.bishops[c].move_piece(from, to);
                self.sliders[c].move_piece(from, to);
            }
            Piece::ROOK => {
                if from == CASTLING_ROOK_SHORT[c] {
                    self.castle_short[c] = false;
                } else if from == CASTLING_ROOK_LONG[c] {
                    self.castle_long[c] = false;
                }
                self.rooks[c].move_piece(from, to);
                self.sliders[c].move_piece(from, to);
            }
            Piece::QUEEN => {
                self.queens[c].move_piece(from, to);
                self.sliders[c].move_piece(from, to);
            }
            Piece::KING => {
                self.kings[c] = to;
                self.castle_short[c] = false;
                self.castle_long[c] = false;

                let short_castle =
                    from == CASTLING_DETECT_SHORT[c][0] && to == CASTLING_DETECT_SHORT[c][1];
                let long_castle =
                    from == CASTLING_DETECT_LONG[c][0] && to == CASTLING_DETECT_LONG[c][1];
                // Castling teleports the rook onto the king's step square.
                if short_castle {
                    let rook_from = CASTLING_ROOK_SHORT[c];
                    let rook_to = CASTLING_PATH_SHORT[c][0];
                    self.squares[rook_to.index()] = Piece::ROOK.colored(color);
                    self.squares[rook_from.index()] = Piece::EMPTY;
                    self.rooks[c].move_piece(rook_from, rook_to);
                    self.sliders[c].move_piece(rook_from, rook_to);
                } else if long_castle {
                    let rook_from = CASTLING_ROOK_LONG[c];
                    let rook_to = CASTLING_PATH_LONG[c][0];
                    self.squares[rook_to.index()] = Piece::ROOK.colored(color);
                    self.squares[rook_from.index()] = Piece::EMPTY;
                    self.rooks[c].move_piece(rook_from, rook_to);
                    self.sliders[c].move_piece(rook_from, rook_to);
                }
            }
            _ => panic!(
                "make_legal_move: no piece to move\n{}for move: {mv}",
                self
            ),
        }

        self.player = opp;
        self.move_number += 1;
    }
}
