mod attacks;
mod checks;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, CheckState, STARTPOS_FEN};
pub use types::{Color, Move, MoveList, Piece, Square};
