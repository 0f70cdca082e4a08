//! The board flag word: active color and castling rights.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::color::Color;

/// Which side of the board a castling right refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Typed bit set over the board's flag word.
///
/// ```text
/// bit 1: active color (set = white to move)
/// bit 2: white queen-side castling
/// bit 3: white king-side castling
/// bit 4: black king-side castling
/// bit 5: black queen-side castling
/// ```
///
/// Castling bits are stored and serialized but never consumed by move generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardFlags(u32);

impl BoardFlags {
    /// No bits set: black to move, no castling rights.
    pub const NONE: BoardFlags = BoardFlags(0);

    /// White to move when set, black when clear.
    pub const ACTIVE_WHITE: BoardFlags = BoardFlags(1 << 1);
    /// White may castle queenside.
    pub const WHITE_QUEEN_CASTLE: BoardFlags = BoardFlags(1 << 2);
    /// White may castle kingside.
    pub const WHITE_KING_CASTLE: BoardFlags = BoardFlags(1 << 3);
    /// Black may castle kingside.
    pub const BLACK_KING_CASTLE: BoardFlags = BoardFlags(1 << 4);
    /// Black may castle queenside.
    pub const BLACK_QUEEN_CASTLE: BoardFlags = BoardFlags(1 << 5);

    /// All four castling bits.
    pub const ALL_CASTLING: BoardFlags = BoardFlags(0b11_1100);

    /// Every meaningful bit.
    const MASK: u32 = 0b11_1110;

    /// Wrap a raw word, dropping bits that carry no meaning.
    #[inline]
    pub const fn from_bits(bits: u32) -> BoardFlags {
        BoardFlags(bits & Self::MASK)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `true` if every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: BoardFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// `true` if any bit of `other` is set.
    #[inline]
    pub const fn intersects(self, other: BoardFlags) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub fn insert(&mut self, other: BoardFlags) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: BoardFlags) {
        self.0 &= !other.0;
    }

    #[inline]
    pub fn toggle(&mut self, other: BoardFlags) {
        self.0 ^= other.0;
    }

    /// Side to move.
    #[inline]
    pub const fn active_color(self) -> Color {
        if self.contains(Self::ACTIVE_WHITE) {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn set_active_color(&mut self, color: Color) {
        match color {
            Color::White => self.insert(Self::ACTIVE_WHITE),
            Color::Black => self.remove(Self::ACTIVE_WHITE),
        }
    }

    /// Hand the move to the other side.
    #[inline]
    pub fn flip_active_color(&mut self) {
        self.toggle(Self::ACTIVE_WHITE);
    }

    /// Single castling bit for a color and side.
    #[inline]
    pub const fn castle_flag(color: Color, side: CastleSide) -> BoardFlags {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING_CASTLE,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN_CASTLE,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING_CASTLE,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN_CASTLE,
        }
    }

    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::castle_flag(color, side))
    }

    #[inline]
    pub fn set_castle(&mut self, color: Color, side: CastleSide, allowed: bool) {
        let flag = Self::castle_flag(color, side);
        if allowed {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    /// FEN castling field: `K`, `Q`, `k`, `q` for each set right in that order, or `-`.
    pub fn castling_fen(self) -> String {
        if !self.intersects(Self::ALL_CASTLING) {
            return "-".to_string();
        }

        let mut s = String::with_capacity(4);
        for (flag, c) in [
            (Self::WHITE_KING_CASTLE, 'K'),
            (Self::WHITE_QUEEN_CASTLE, 'Q'),
            (Self::BLACK_KING_CASTLE, 'k'),
            (Self::BLACK_QUEEN_CASTLE, 'q'),
        ] {
            if self.contains(flag) {
                s.push(c);
            }
        }
        s
    }
}

impl BitAnd for BoardFlags {
    type Output = BoardFlags;
    #[inline]
    fn bitand(self, rhs: BoardFlags) -> BoardFlags {
        BoardFlags(self.0 & rhs.0)
    }
}

impl BitOr for BoardFlags {
    type Output = BoardFlags;
    #[inline]
    fn bitor(self, rhs: BoardFlags) -> BoardFlags {
        BoardFlags(self.0 | rhs.0)
    }
}

impl Not for BoardFlags {
    type Output = BoardFlags;
    #[inline]
    fn not(self) -> BoardFlags {
        BoardFlags(!self.0 & Self::MASK)
    }
}

impl fmt::Debug for BoardFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardFlags({} {})", self.active_color(), self.castling_fen())
    }
}
