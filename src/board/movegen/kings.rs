//! King move generation, castling included.

use crate::board::tables::{CASTLING_PATH_LONG, CASTLING_PATH_SHORT, KING_DIRS};
use crate::board::types::{Info, Move, MoveList, Piece};
use crate::board::Board;

impl Board {
    pub(crate) fn generate_king_moves(&self, moves: &mut MoveList) {
        let color = self.player;
        let c = color.index();
        let from = self.kings[c];

        // Safe target squares per direction; the castling tests below reuse
        // the east ([0]) and west ([1]) entries for the king's step square.
        let mut targets = [false; 8];

        for (i, &dir) in KING_DIRS.iter().enumerate() {
            let to = from.offset(dir);
            if !to.on_board() {
                continue;
            }
            let tpiece = self.squares[to.index()];
            if tpiece.has_color(color) {
                continue;
            }
            if self.is_square_attacked(to, None, color) {
                continue;
            }
            targets[i] = true;
            // The square behind the king on a checking ray reads as safe to
            // the attack probe (the king itself blocks the ray), so it
            // carries an explicit do-not-retreat flag instead.
            if !self.info[to.index()].is_set(Info::FORBIDDEN_ESCAPE) {
                moves.push(Move::new(from, to, Piece::NONE));
            }
        }

        if self.check.is_check() {
            // No castling out of check.
            return;
        }

        // a. Castle short: both path squares empty, neither attacked.
        if self.castle_short[c] {
            let sq1 = CASTLING_PATH_SHORT[c][0];
            let sq2 = CASTLING_PATH_SHORT[c][1];
            if self.squares[sq1.index()].is_empty()
                && self.squares[sq2.index()].is_empty()
                && targets[0]
                && !self.is_square_attacked(sq2, None, color)
            {
                moves.push(Move::new(from, sq2, Piece::NONE));
            }
        }

        // b. Castle long: three path squares empty (the b-file square may be
        // attacked, it only has to be vacant), step and destination safe.
        if self.castle_long[c] {
            let sq1 = CASTLING_PATH_LONG[c][0];
            let sq2 = CASTLING_PATH_LONG[c][1];
            let sq3 = CASTLING_PATH_LONG[c][2];
            if self.squares[sq1.index()].is_empty()
                && self.squares[sq2.index()].is_empty()
                && self.squares[sq3.index()].is_empty()
                && targets[1]
                && !self.is_square_attacked(sq2, None, color)
            {
                moves.push(Move::new(from, sq2, Piece::NONE));
            }
        }
    }
}
