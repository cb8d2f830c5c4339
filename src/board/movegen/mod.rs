//! Strictly-legal move generation.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::MoveList;
use super::{Board, CheckState};

impl Board {
    /// Generate every strictly legal move for the side to move into `moves`.
    ///
    /// The list is cleared first. The info board is re-annotated, king moves
    /// are emitted, and under double check generation stops there; otherwise
    /// the remaining generators run with the check/pin filters the
    /// annotation pass prepared.
    pub fn generate_legal_moves(&mut self, moves: &mut MoveList) {
        moves.clear();

        self.detect_checks_and_pins();

        self.generate_king_moves(moves);
        if self.check == CheckState::DoubleCheck {
            return;
        }

        self.generate_knight_moves(moves);
        self.generate_queen_moves(moves);
        self.generate_bishop_moves(moves);
        self.generate_rook_moves(moves);
        self.generate_pawn_moves(moves);
    }
}
