//! Square contents: empty, or a colored piece, packed into one byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

const WHITE_FIRST: u8 = 1;
const WHITE_LAST: u8 = 6;
const BLACK_FIRST: u8 = 7;
const BLACK_LAST: u8 = 12;

/// The contents of one board square.
///
/// Raw values are split into three contiguous ranges:
/// - `0`: empty
/// - `1..=6`: white pawn, king, queen, rook, bishop, knight
/// - `7..=12`: black pieces in the same order
///
/// Color and emptiness are answered by range comparison only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    /// An empty square.
    pub const EMPTY: Piece = Piece(0);

    /// White pawn. Raw value: 1.
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    /// White king. Raw value: 2.
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    /// White queen. Raw value: 3.
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    /// White rook. Raw value: 4.
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    /// White bishop. Raw value: 5.
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    /// White knight. Raw value: 6.
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);

    /// Black pawn. Raw value: 7.
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    /// Black king. Raw value: 8.
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);
    /// Black queen. Raw value: 9.
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    /// Black rook. Raw value: 10.
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    /// Black bishop. Raw value: 11.
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    /// Black knight. Raw value: 12.
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);

    /// Create a colored piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        let base = match color {
            Color::White => WHITE_FIRST,
            Color::Black => BLACK_FIRST,
        };
        Piece(base + kind as u8)
    }

    /// Wrap a raw byte, rejecting values outside `0..=12`.
    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Piece> {
        if raw <= BLACK_LAST { Some(Piece(raw)) } else { None }
    }

    /// Return the raw byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        self.0 >= WHITE_FIRST && self.0 <= WHITE_LAST
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        self.0 >= BLACK_FIRST
    }

    /// Return the color, or `None` for an empty square.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        if self.is_white() {
            Some(Color::White)
        } else if self.is_black() {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Return the kind, or `None` for an empty square.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        if self.is_white() {
            PieceKind::from_index(self.0 - WHITE_FIRST)
        } else if self.is_black() {
            PieceKind::from_index(self.0 - BLACK_FIRST)
        } else {
            None
        }
    }

    /// `true` iff neither piece is empty and both have the same color.
    ///
    /// Two empty squares are not the same color.
    #[inline]
    pub const fn same_color(self, other: Piece) -> bool {
        (self.is_white() && other.is_white()) || (self.is_black() && other.is_black())
    }

    /// `true` iff neither piece is empty and the colors differ.
    #[inline]
    pub const fn is_enemy_of(self, other: Piece) -> bool {
        (self.is_white() && other.is_black()) || (self.is_black() && other.is_white())
    }

    /// FEN letter: uppercase for white, lowercase for black, `None` when empty.
    #[inline]
    pub fn fen_char(self) -> Option<char> {
        let kind = self.kind()?;
        match self.color()? {
            Color::White => Some(kind.fen_char().to_ascii_uppercase()),
            Color::Black => Some(kind.fen_char()),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char().unwrap_or('.'))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color(), self.kind()) {
            (Some(color), Some(kind)) => {
                let prefix = match color {
                    Color::White => 'W',
                    Color::Black => 'B',
                };
                write!(f, "{}{}", prefix, kind.fen_char().to_ascii_uppercase())
            }
            _ => write!(f, "--"),
        }
    }
}
