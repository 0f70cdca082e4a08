//! Candidate moves and the played-move audit record.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoordError, MoveError};
use crate::position::{Coord, Position};

/// An ordered `(start, end)` pair.
///
/// A move carries no legality guarantee; it is a candidate until
/// [`Board::make_move`](crate::Board::make_move) applies it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    start: Position,
    end: Position,
}

impl Move {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Move {
        Move { start, end }
    }

    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    pub const fn end(self) -> Position {
        self.end
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}->{})", self.start, self.end)
    }
}

impl FromStr for Move {
    type Err = MoveError;

    /// Parse `"B2B3"`, `"b2b3"`, or `"b2-b3"`.
    fn from_str(s: &str) -> Result<Move, MoveError> {
        let compact: String = s.chars().filter(|&c| c != '-').collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(CoordError::InvalidLength {
                found: s.to_string(),
            }
            .into());
        }
        let start: Coord = compact[..2].parse()?;
        let end: Coord = compact[2..].parse()?;
        Ok(Move::new(start.into(), end.into()))
    }
}

/// A played move together with its text notation.
///
/// Nothing in this crate fills these in; a history layer built on top of
/// [`Board::make_move`](crate::Board::make_move) can record them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAudit {
    start: Position,
    end: Position,
    notation: String,
}

impl MoveAudit {
    /// Longest notation an audit record accepts, in bytes.
    pub const MAX_NOTATION_LEN: usize = 9;

    /// Create a record, or `None` if `notation` is longer than
    /// [`MoveAudit::MAX_NOTATION_LEN`].
    pub fn new(mv: Move, notation: &str) -> Option<MoveAudit> {
        if notation.len() > Self::MAX_NOTATION_LEN {
            return None;
        }
        Some(MoveAudit {
            start: mv.start(),
            end: mv.end(),
            notation: notation.to_string(),
        })
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// The move this record describes.
    pub fn to_move(&self) -> Move {
        Move::new(self.start, self.end)
    }
}
