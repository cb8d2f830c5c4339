//! Perft node counting, the correctness oracle for the move generator.

use std::collections::BTreeMap;

use super::types::MoveList;
use super::Board;

impl Board {
    /// Count the leaf nodes of every legal move path of `depth` plies.
    ///
    /// Depth 0 is 1; depth 1 is the number of legal moves. Positions are
    /// restored by snapshot assignment, not by undoing moves.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.generate_legal_moves(&mut moves);
        if depth == 1 {
            return moves.len() as u64;
        }

        let snapshot = *self;
        let mut nodes = 0;
        for mv in &moves {
            self.make_legal_move(*mv);
            nodes += self.perft(depth - 1);
            *self = snapshot;
        }

        nodes
    }

    /// Per-root-move perft: maps each legal move's mini-notation to the
    /// number of leaves reached after playing it. Sorted by notation.
    #[must_use]
    pub fn perft_divide(&mut self, depth: usize) -> BTreeMap<String, u64> {
        let mut moves = MoveList::new();
        self.generate_legal_moves(&mut moves);

        let snapshot = *self;
        let mut results = BTreeMap::new();
        for mv in &moves {
            self.make_legal_move(*mv);
            let nodes = if depth > 1 { self.perft(depth - 1) } else { 1 };
            results.insert(mv.to_string(), nodes);
            *self = snapshot;
        }

        results
    }
}
