//! Piece and color encodings.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side color, packed so it doubles as an array index and as the low bit of
/// a [`Piece`] byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub(crate) u8);

impl Color {
    pub const BLACK: Color = Color(0);
    pub const WHITE: Color = Color(1);

    /// Both colors in index order (Black=0, White=1).
    pub const BOTH: [Color; 2] = [Color::BLACK, Color::WHITE];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the opposite color.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Color {
        Color(self.0 ^ 1)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::WHITE => write!(f, "White"),
            _ => write!(f, "Black"),
        }
    }
}

/// One-byte piece encoding.
///
/// A board slot is either [`Piece::EMPTY`] or `kind | color`, where every
/// kind is a single bit and the color occupies the low bit. The single-bit
/// kinds let the difference tables express "reachable by any of
/// {bishop, queen}" as one OR-ed byte, tested with one mask operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece(pub(crate) u8);

impl Piece {
    /// Absence of any kind bit; used for "no promotion" and as the zero
    /// value of the difference tables.
    pub(crate) const NONE: Piece = Piece(0);
    /// An unoccupied board slot.
    pub const EMPTY: Piece = Piece(0x80);

    pub const PAWN: Piece = Piece(0x02);
    pub const KNIGHT: Piece = Piece(0x04);
    pub const BISHOP: Piece = Piece(0x08);
    pub const ROOK: Piece = Piece(0x10);
    pub const QUEEN: Piece = Piece(0x20);
    pub const KING: Piece = Piece(0x40);

    const KIND_MASK: u8 = 0x7E;
    const COLOR_ONLY_MASK: u8 = 0x01;
    // Includes the EMPTY bit so empty slots never report a color.
    const COLOR_TEST_MASK: u8 = 0x81;

    /// Attach a color bit to a kind.
    #[inline]
    #[must_use]
    pub const fn colored(self, color: Color) -> Piece {
        Piece(self.0 | color.0)
    }

    /// Strip the color bit, leaving the kind bits.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Piece {
        Piece(self.0 & Self::KIND_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        Color(self.0 & Self::COLOR_ONLY_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// True iff this is an occupied slot of the given color.
    #[inline]
    #[must_use]
    pub const fn has_color(self, color: Color) -> bool {
        self.0 & Self::COLOR_TEST_MASK == color.0
    }

    /// True iff any of the kind bits in `kinds` is present.
    #[inline]
    #[must_use]
    pub const fn is_kind(self, kinds: Piece) -> bool {
        self.0 & kinds.0 != 0
    }

    /// Parse a FEN piece letter; uppercase is White, lowercase Black.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = match c.to_ascii_lowercase() {
            'p' => Piece::PAWN,
            'n' => Piece::KNIGHT,
            'b' => Piece::BISHOP,
            'r' => Piece::ROOK,
            'q' => Piece::QUEEN,
            'k' => Piece::KING,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::WHITE
        } else {
            Color::BLACK
        };
        Some(kind.colored(color))
    }

    /// Lowercase letter of the kind (promotion suffix, FEN base letter).
    #[inline]
    #[must_use]
    pub(crate) const fn kind_char(self) -> char {
        match self.0 & Self::KIND_MASK {
            0x02 => 'p',
            0x04 => 'n',
            0x08 => 'b',
            0x10 => 'r',
            0x20 => 'q',
            0x40 => 'k',
            _ => '.',
        }
    }

    /// FEN letter with case carrying the color; `.` for an empty slot.
    #[must_use]
    pub fn to_fen_char(self) -> char {
        if self.is_empty() {
            return '.';
        }
        let c = self.kind_char();
        if self.has_color(Color::WHITE) {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// Promotion choices in emission order.
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::QUEEN, Piece::ROOK, Piece::BISHOP, Piece::KNIGHT];
