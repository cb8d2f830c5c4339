//! The check-and-pin annotation pass.
//!
//! Runs once per position before move generation. A single ray walk per
//! enemy slider writes both the check-blocker squares (where a piece may
//! interpose or capture) and the pin rays (the only squares a pinned piece
//! may move to), so the generators can filter each destination with one
//! info-byte load.

use super::tables::{DIFFS, PAWN_CAPTURE_DIRS};
use super::types::{Info, Piece};
use super::{Board, CheckState};

impl Board {
    /// Annotate the info board with checks and pins for the side to move.
    ///
    /// Aborts as soon as a second check is found; ray markings may then be
    /// incomplete, which is harmless because only king moves are generated
    /// under double check and they never consult ray markers.
    pub(crate) fn detect_checks_and_pins(&mut self) {
        self.clear_meta();

        let color = self.player;
        let opp = color.flip();
        let o = opp.index();
        let king_sq = self.kings[color.index()];
        let mut check_count = 0u32;
        let mut pin_marker = Info::PIN_FIRST;

        // 1. Checks by knights. Two knights can never check at once.
        for i in 0..self.knights[o].len() {
            let knight_sq = self.knights[o].get(i);
            if DIFFS.kinds[knight_sq.diff(king_sq)].is_kind(Piece::KNIGHT) {
                self.check = CheckState::Check(knight_sq);
                check_count += 1;
                self.info[knight_sq.index()].set(Info::CHECK);
                break;
            }
        }

        // 2. Checks by pawns. Same: a double pawn check is impossible.
        'pawns: for i in 0..self.pawns[o].len() {
            let pawn_sq = self.pawns[o].get(i);
            for d in 0..2 {
                let to = pawn_sq.offset(PAWN_CAPTURE_DIRS[o][d]);
                if to == king_sq {
                    self.check = CheckState::Check(pawn_sq);
                    check_count += 1;
                    self.info[pawn_sq.index()].set(Info::CHECK);
                    break 'pawns;
                }
            }
        }

        // 3. Checks and pins by sliders: queens, then bishops, then rooks.
        for kind in [Piece::QUEEN, Piece::BISHOP, Piece::ROOK] {
            check_count += self.detect_slider_checks_and_pins(&mut pin_marker, check_count, kind);
            if check_count > 1 {
                self.check = CheckState::DoubleCheck;
                return;
            }
        }
    }

    /// Scan one enemy slider kind for checks and pins against our king.
    /// Returns the number of checks found by this kind.
    fn detect_slider_checks_and_pins(
        &mut self,
        pin_marker: &mut u8,
        prior_checks: u32,
        kind: Piece,
    ) -> u32 {
        let color = self.player;
        let opp = color.flip();
        let king_sq = self.kings[color.index()];
        let mut check_count = 0u32;

        for i in 0..self.kind_list(opp, kind).len() {
            let slider_sq = self.kind_list(opp, kind).get(i);
            let diff = king_sq.diff(slider_sq);
            if !DIFFS.kinds[diff].is_kind(kind) {
                continue;
            }

            // The slider shares a ray with the king; walk from the king
            // toward the slider and classify what the ray holds.
            let dir = DIFFS.dirs[diff];
            let mut info = Info::NONE;
            let mut step_sq = king_sq.offset(dir);
            loop {
                let cur = self.squares[step_sq.index()];
                if cur.is_empty() {
                    step_sq = step_sq.offset(dir);
                    continue;
                }

                if cur.has_color(color) {
                    if info == Info::NONE {
                        // First friendly piece on the ray: pin candidate.
                        info.set(Info::MAYBE_PINNED);
                        step_sq = step_sq.offset(dir);
                        continue;
                    }
                    // A second friendly piece shields the first one.
                    info = Info::NONE;
                    break;
                }

                // An enemy piece.
                if step_sq == slider_sq {
                    if info == Info::NONE {
                        check_count += 1;
                        self.check = CheckState::Check(slider_sq);
                        info = Info::CHECK;
                    } else {
                        info = Info::pin(*pin_marker);
                        *pin_marker += 1;
                    }
                } else {
                    // Some other enemy blocks the ray.
                    info = Info::NONE;
                }
                break;
            }

            if info.is_set(Info::CHECK) || info.pinval() != 0 {
                // Mark the whole ray (slider square included, king square
                // excluded) so the generators can filter destinations.
                let mut mark_sq = slider_sq;
                while mark_sq != king_sq {
                    self.info[mark_sq.index()].set(info);
                    mark_sq = mark_sq.offset(-dir);
                }

                if info.is_set(Info::CHECK) {
                    // The king may not retreat along the checking ray.
                    let behind = king_sq.offset(-dir);
                    if behind.on_board() {
                        self.info[behind.index()].set(Info::FORBIDDEN_ESCAPE);
                    }
                }
            }

            if check_count + prior_checks > 1 {
                return check_count;
            }
        }

        check_count
    }
}

#[cfg(test)]
impl Board {
    pub(crate) fn pinval_at(&self, sq: super::types::Square) -> u8 {
        self.info[sq.index()].pinval()
    }

    pub(crate) fn check_marked(&self, sq: super::types::Square) -> bool {
        self.info[sq.index()].is_set(Info::CHECK)
    }
}
