//! FEN serialization for [`Board`].

use std::fmt;
use std::io::{Cursor, Write};

use crate::board::Board;
use crate::error::NotationError;
use crate::position::Position;

/// FEN of the board produced by [`Board::new`]: no castling rights, clocks at zero.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 0";

/// Longest FEN the encoder can produce, in bytes.
///
/// 64 piece letters and 7 rank separators, then `" w KQkq - 255 255"`.
pub const MAX_FEN_LEN: usize = 64 + 7 + 2 + 5 + 2 + 4 + 4;

impl Board {
    /// Return the FEN string for this board.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }

    /// Write the FEN string into `buf` and return the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`NotationError::BufferTooSmall`] without writing anything if
    /// `buf` is shorter than [`MAX_FEN_LEN`].
    pub fn write_fen(&self, buf: &mut [u8]) -> Result<usize, NotationError> {
        if buf.len() < MAX_FEN_LEN {
            return Err(NotationError::BufferTooSmall {
                needed: MAX_FEN_LEN,
                capacity: buf.len(),
            });
        }

        let mut cursor = Cursor::new(buf);
        write!(cursor, "{self}").expect("buffer holds MAX_FEN_LEN bytes");
        Ok(cursor.position() as usize)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Piece placement, rank 8 first
        for rank in (1i8..=8).rev() {
            let mut empty_run = 0u8;

            for file in 1i8..=8 {
                match self.piece_at(Position::new(file, rank)).fen_char() {
                    Some(c) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{c}")?;
                    }
                    None => empty_run += 1,
                }
            }

            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }

            if rank > 1 {
                write!(f, "/")?;
            }
        }

        let flags = self.flags();
        write!(f, " {}", flags.active_color())?;
        write!(f, " {}", flags.castling_fen())?;

        // En passant targets are never tracked
        write!(f, " -")?;

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_clock())
    }
}
