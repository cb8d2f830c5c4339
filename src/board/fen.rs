//! FEN parsing and emission, and mini-notation move lookup.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::tables::LOOKUP_0X88;
use super::types::{Color, Move, MoveList, Piece, Square};
use super::Board;

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// The placement field is decoded into a staging 8x8 array first; only
    /// when every field has validated is the 0x88 board populated, so an
    /// invalid FEN installs no partial state.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, ranks 8..1.
        let mut staging = [Piece::EMPTY; 64];
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    staging[(7 - rank_idx) * 8 + file] = piece;
                    file += 1;
                }
            }
        }

        let player = match parts[1] {
            "w" => Color::WHITE,
            "b" => Color::BLACK,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castle_short = [false; 2];
        let mut castle_long = [false; 2];
        for c in parts[2].chars() {
            match c {
                'K' => castle_short[Color::WHITE.index()] = true,
                'Q' => castle_long[Color::WHITE.index()] = true,
                'k' => castle_short[Color::BLACK.index()] = true,
                'q' => castle_long[Color::BLACK.index()] = true,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let ep_square = if parts[3] == "-" {
            None
        } else {
            Some(
                Square::from_str(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?,
            )
        };

        let draw_counter = match parts.get(4) {
            Some(s) => s.parse().map_err(|_| FenError::InvalidCounter {
                found: (*s).to_string(),
            })?,
            None => 0,
        };
        let move_number = match parts.get(5) {
            Some(s) => s.parse().map_err(|_| FenError::InvalidCounter {
                found: (*s).to_string(),
            })?,
            None => 1,
        };

        // All fields validated; populate the 0x88 board and piece lists.
        let mut board = Board::empty();
        board.player = player;
        board.castle_short = castle_short;
        board.castle_long = castle_long;
        board.ep_square = ep_square;
        board.draw_counter = draw_counter;
        board.move_number = move_number;

        for (idx, &piece) in staging.iter().enumerate() {
            if !piece.is_empty() {
                board.put_piece(LOOKUP_0X88[idx], piece);
            }
        }

        board.detect_checks_and_pins();
        Ok(board)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Emit the position as a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let piece = self.piece_at(Square::new(rank, file));
                if piece.is_empty() {
                    empty += 1;
                } else {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.player == Color::WHITE { "w" } else { "b" };
        let mut castling = String::new();
        if self.castle_short[Color::WHITE.index()] {
            castling.push('K');
        }
        if self.castle_long[Color::WHITE.index()] {
            castling.push('Q');
        }
        if self.castle_short[Color::BLACK.index()] {
            castling.push('k');
        }
        if self.castle_long[Color::BLACK.index()] {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .ep_square
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.draw_counter,
            self.move_number
        )
    }

    /// Parse a move in mini-notation (e.g. `e2e4`, `e7e8q`) against the
    /// current position's legal moves.
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if notation.len() < 4 || notation.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.len(),
            });
        }

        let from = notation[0..2]
            .parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            })?;
        let to = notation[2..4]
            .parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            })?;

        let promotion = match notation.as_bytes().get(4) {
            Some(&b) => match b {
                b'n' => Some(Piece::KNIGHT),
                b'b' => Some(Piece::BISHOP),
                b'r' => Some(Piece::ROOK),
                b'q' => Some(Piece::QUEEN),
                _ => {
                    return Err(MoveParseError::InvalidPromotion { char: b as char });
                }
            },
            None => None,
        };

        let mut moves = MoveList::new();
        self.generate_legal_moves(&mut moves);
        for mv in &moves {
            if mv.from() == from && mv.to() == to && mv.promotion() == promotion {
                return Ok(*mv);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })
    }

    /// Parse a mini-notation move and apply it in one call.
    pub fn make_move_str(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_legal_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STARTPOS_FEN;

    #[test]
    fn test_fen_round_trip_startpos() {
        let board = Board::try_from_fen(STARTPOS_FEN).unwrap();
        assert_eq!(board.to_fen(), STARTPOS_FEN);
    }

    #[test]
    fn test_fen_round_trip_kiwipete() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_round_trip_counters_and_ep() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 7 12";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.draw_counter(), 7);
        assert_eq!(board.move_number(), 12);
        assert_eq!(board.ep_square(), Some(Square::new(2, 4)));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_black_to_move() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(board.player(), Color::BLACK);
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { .. })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { .. })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { .. })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1");
        assert!(matches!(result, Err(FenError::InvalidCounter { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        assert!(board.can_castle_short(Color::WHITE));
        assert!(!board.can_castle_long(Color::WHITE));
        assert!(!board.can_castle_short(Color::BLACK));
        assert!(board.can_castle_long(Color::BLACK));
    }

    #[test]
    fn test_fen_load_sets_check_state() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/4q3/4K3 w - - 0 1").unwrap();
        assert!(board.check_state().is_check());
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square::new(1, 4));
        assert_eq!(mv.to(), Square::new(3, 4));
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::QUEEN));
    }

    #[test]
    fn test_parse_move_error_invalid_length() {
        let mut board = Board::new();
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_parse_move_error_invalid_square() {
        let mut board = Board::new();
        assert!(matches!(
            board.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_parse_move_error_invalid_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert!(matches!(
            board.parse_move("a7a8x"),
            Err(MoveParseError::InvalidPromotion { .. })
        ));
    }

    #[test]
    fn test_parse_move_error_illegal() {
        let mut board = Board::new();
        // A pawn cannot advance three squares.
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_make_move_str() {
        let mut board = Board::new();
        board.make_move_str("e2e4").unwrap();
        assert_eq!(board.player(), Color::BLACK);
        assert_eq!(board.ep_square(), Some(Square::new(2, 4)));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = STARTPOS_FEN.parse().unwrap();
        assert_eq!(board.player(), Color::WHITE);
    }
}
