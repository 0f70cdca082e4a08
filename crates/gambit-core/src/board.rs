//! The board: 64 squares, the flag word, and the two move clocks.

use std::fmt;

use crate::color::Color;
use crate::error::PositionError;
use crate::flags::BoardFlags;
use crate::piece::Piece;
use crate::position::Position;

/// Back rank layout from file A to file H, white pieces.
const WHITE_BACK_RANK: [Piece; 8] = [
    Piece::WHITE_ROOK,
    Piece::WHITE_KNIGHT,
    Piece::WHITE_BISHOP,
    Piece::WHITE_QUEEN,
    Piece::WHITE_KING,
    Piece::WHITE_BISHOP,
    Piece::WHITE_KNIGHT,
    Piece::WHITE_ROOK,
];

const BLACK_BACK_RANK: [Piece; 8] = [
    Piece::BLACK_ROOK,
    Piece::BLACK_KNIGHT,
    Piece::BLACK_BISHOP,
    Piece::BLACK_QUEEN,
    Piece::BLACK_KING,
    Piece::BLACK_BISHOP,
    Piece::BLACK_KNIGHT,
    Piece::BLACK_ROOK,
];

/// Complete board state.
///
/// The board stores whatever it is given: it does not check king counts or
/// material, so illegal setups can be built with [`Board::set_piece`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Square contents, indexed by [`Position::index`].
    pieces: [Piece; Position::COUNT],
    /// Active color and castling rights.
    flags: BoardFlags,
    halfmove_clock: u8,
    fullmove_clock: u8,
}

impl Board {
    /// Return a board in the standard opening layout, white to move.
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.initialize();
        board
    }

    /// Return a board with every square empty, white to move, no castling
    /// rights, and both clocks at zero.
    pub fn empty() -> Board {
        Board {
            pieces: [Piece::EMPTY; Position::COUNT],
            flags: BoardFlags::ACTIVE_WHITE,
            halfmove_clock: 0,
            fullmove_clock: 0,
        }
    }

    /// Reset to the standard opening layout.
    ///
    /// All flags are cleared, then the active color is set to white. Both
    /// clocks are reset to zero.
    pub fn initialize(&mut self) {
        self.pieces = [Piece::EMPTY; Position::COUNT];
        self.pieces[0..8].copy_from_slice(&WHITE_BACK_RANK);
        self.pieces[8..16].fill(Piece::WHITE_PAWN);
        self.pieces[48..56].fill(Piece::BLACK_PAWN);
        self.pieces[56..64].copy_from_slice(&BLACK_BACK_RANK);

        self.flags = BoardFlags::NONE;
        self.flags.set_active_color(Color::White);
        self.halfmove_clock = 0;
        self.fullmove_clock = 0;
    }

    /// Return the contents of an on-board square.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Piece {
        self.pieces[pos.index()]
    }

    /// Checked form of [`Board::piece_at`].
    #[inline]
    pub fn try_piece_at(&self, pos: Position) -> Result<Piece, PositionError> {
        Ok(self.pieces[pos.try_index()?])
    }

    /// Place `piece` on `pos`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Piece) {
        self.pieces[pos.index()] = piece;
    }

    /// All 64 squares in index order.
    #[inline]
    pub fn pieces(&self) -> &[Piece; Position::COUNT] {
        &self.pieces
    }

    /// Iterate over occupied squares in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all()
            .map(|pos| (pos, self.piece_at(pos)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    /// `true` if `piece` may be moved by the side to move.
    ///
    /// An empty square always counts as the active color. Generators rely on
    /// this to treat empty squares as reachable for either side.
    #[inline]
    pub fn is_active_color(&self, piece: Piece) -> bool {
        match piece.color() {
            None => true,
            Some(color) => color == self.active_color(),
        }
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.flags.active_color()
    }

    #[inline]
    pub fn flags(&self) -> BoardFlags {
        self.flags
    }

    #[inline]
    pub fn flags_mut(&mut self) -> &mut BoardFlags {
        &mut self.flags
    }

    #[inline]
    pub fn set_flags(&mut self, flags: BoardFlags) {
        self.flags = flags;
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u8 {
        self.halfmove_clock
    }

    #[inline]
    pub fn set_halfmove_clock(&mut self, clock: u8) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub fn fullmove_clock(&self) -> u8 {
        self.fullmove_clock
    }

    #[inline]
    pub fn set_fullmove_clock(&mut self, clock: u8) {
        self.fullmove_clock = clock;
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (1i8..=8).rev() {
            write!(f, "{rank}  ")?;
            for file in 1i8..=8 {
                let piece = board.piece_at(Position::new(file, rank));
                if file < 8 {
                    write!(f, "{piece} ")?;
                } else {
                    write!(f, "{piece}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E F G H")
    }
}
