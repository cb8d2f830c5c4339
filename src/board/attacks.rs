//! Square attack detection.

use super::tables::{DIFFS, PAWN_CAPTURE_DIRS};
use super::types::{Color, Piece, Square};
use super::Board;

impl Board {
    /// True iff any piece of `color.flip()` attacks `sq`.
    ///
    /// Pieces listed on `ignore` are skipped. Pawn-move legality tests play
    /// the move on the raw board first; the captured piece is then gone from
    /// its square but still sits in the enemy piece lists, and `ignore`
    /// keeps that stale entry from reporting a phantom attack.
    pub(crate) fn is_square_attacked(
        &self,
        sq: Square,
        ignore: Option<Square>,
        color: Color,
    ) -> bool {
        let opp = color.flip();
        let o = opp.index();

        // 1. Knights.
        for i in 0..self.knights[o].len() {
            let knight_sq = self.knights[o].get(i);
            if Some(knight_sq) == ignore {
                continue;
            }
            if DIFFS.kinds[knight_sq.diff(sq)].is_kind(Piece::KNIGHT) {
                return true;
            }
        }

        // 2. Sliders.
        if self.is_attacked_by_slider(sq, ignore, color) {
            return true;
        }

        // 3. Pawns: step from `sq` along the defender's capture directions
        // and look for an enemy pawn at the source.
        let opp_pawn = Piece::PAWN.colored(opp);
        for d in 0..2 {
            let maybe_pawn_sq = sq.offset(PAWN_CAPTURE_DIRS[color.index()][d]);
            if maybe_pawn_sq.on_board() && self.squares[maybe_pawn_sq.index()] == opp_pawn {
                return true;
            }
        }

        // 4. The enemy king.
        DIFFS.kinds[self.kings[o].diff(sq)].is_kind(Piece::KING)
    }

    fn is_attacked_by_slider(&self, sq: Square, ignore: Option<Square>, color: Color) -> bool {
        let opp = color.flip();
        let o = opp.index();

        for i in 0..self.sliders[o].len() {
            let slider_sq = self.sliders[o].get(i);
            if Some(slider_sq) == ignore {
                continue;
            }
            let kind = self.squares[slider_sq.index()].kind();
            let diff = sq.diff(slider_sq);
            if !DIFFS.kinds[diff].is_kind(kind) {
                continue;
            }

            // The slider lies on a matching ray; walk from `sq` toward it.
            // The diff table guarantees the ray stays on the board until the
            // slider's square is reached.
            let dir = DIFFS.dirs[diff];
            let mut step_sq = sq.offset(dir);
            loop {
                let cur = self.squares[step_sq.index()];
                if cur.is_empty() {
                    step_sq = step_sq.offset(dir);
                    continue;
                }
                if cur.has_color(color) {
                    // Friendly blocker, no attack on this ray.
                    break;
                }
                if cur.is_kind(kind) {
                    return true;
                }
                // A blocking enemy of another kind.
                break;
            }
        }

        false
    }

    /// True iff the given color's king is currently attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.kings[color.index()], None, color)
    }
}
