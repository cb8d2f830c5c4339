//! Knight move generation.

use crate::board::tables::KNIGHT_DIRS;
use crate::board::types::{Info, Move, MoveList, Piece};
use crate::board::Board;

impl Board {
    pub(crate) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let color = self.player;
        let c = color.index();
        let is_check = self.check.is_single();

        for i in 0..self.knights[c].len() {
            let from = self.knights[c].get(i);

            // A pinned knight can never stay on its pin ray.
            if self.info[from.index()].pinval() != 0 {
                continue;
            }

            for &dir in &KNIGHT_DIRS {
                let to = from.offset(dir);
                if !to.on_board() {
                    continue;
                }
                // Under a single check the destination must capture the
                // checker or land on the check ray.
                if is_check && !self.info[to.index()].is_set(Info::CHECK) {
                    continue;
                }
                if !self.squares[to.index()].has_color(color) {
                    moves.push(Move::new(from, to, Piece::NONE));
                }
            }
        }
    }
}
