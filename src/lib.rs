//! Chess position core built on a 0x88 board.
//!
//! Provides the parts of a chess engine that have to be exactly right:
//! - 0x88 board representation with a parallel per-square info board
//! - one-pass check and pin detection before each move generation
//! - strictly-legal move enumeration (no make/unmake legality filtering)
//! - move application, FEN in/out, and perft node counting
//!
//! Search, evaluation and protocol handling are consumers of this crate,
//! not part of it.
//!
//! # Quick Start
//!
//! ```
//! use chess_core::board::{Board, MoveList};
//!
//! let mut board = Board::new();
//!
//! // Generate all legal moves.
//! let mut moves = MoveList::new();
//! board.generate_legal_moves(&mut moves);
//! assert_eq!(moves.len(), 20);
//!
//! // Apply one by mini-notation and count nodes from the reply position.
//! board.make_move_str("e2e4").unwrap();
//! assert_eq!(board.perft(1), 20);
//! ```
//!
//! # Positions from FEN
//!
//! ```
//! use chess_core::board::Board;
//!
//! let mut board =
//!     Board::try_from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
//! assert_eq!(board.perft(2), 191);
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Square`, `Piece`, `Color` and `Move`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// 0x88 hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Chess cores have intentionally similar names (castle_short/castle_long, etc.)
#![allow(clippy::similar_names)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
