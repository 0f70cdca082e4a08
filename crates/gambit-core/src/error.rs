//! Error types for coordinates, move application, and notation output.

use crate::piece::Piece;
use crate::position::Position;

/// A position was used where an on-board square is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The file or rank lies outside `1..=8`.
    #[error("position (file {file}, rank {rank}) is off the board")]
    OutOfBounds {
        /// One-based file, possibly out of range.
        file: i8,
        /// One-based rank, possibly out of range.
        rank: i8,
    },
}

/// Errors from parsing a human coordinate such as `"E4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    /// The text is not exactly two characters.
    #[error("expected a two-character coordinate, found \"{found}\"")]
    InvalidLength {
        /// The rejected text.
        found: String,
    },
    /// The file letter is not in `A..=H` (either case).
    #[error("invalid file letter: '{character}'")]
    InvalidFile {
        /// The rejected character.
        character: char,
    },
    /// The rank digit is not in `1..=8`.
    #[error("invalid rank digit: '{character}'")]
    InvalidRank {
        /// The rejected character.
        character: char,
    },
}

/// Errors from [`Board::make_move`](crate::board::Board::make_move) and move parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The start or end square is off the board. The caller broke a precondition.
    #[error("move touches off-board position {position:?}")]
    OutOfBounds {
        /// The offending position.
        position: Position,
    },
    /// The piece on the start square belongs to the side not to move.
    #[error("{piece:?} on {position} does not belong to the side to move")]
    NotActiveColor {
        /// The piece that was asked to move.
        piece: Piece,
        /// Where it stands.
        position: Position,
    },
    /// Move text could not be parsed.
    #[error("invalid move text: {source}")]
    Parse {
        /// The coordinate that failed.
        #[from]
        source: CoordError,
    },
}

/// Errors from writing FEN into a caller-supplied buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The buffer cannot hold the longest possible FEN string.
    #[error("notation buffer holds {capacity} bytes, need at least {needed}")]
    BufferTooSmall {
        /// Minimum accepted capacity.
        needed: usize,
        /// Capacity supplied by the caller.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{CoordError, MoveError, NotationError, PositionError};
    use crate::piece::Piece;
    use crate::position::Position;

    #[test]
    fn position_error_display() {
        let err = PositionError::OutOfBounds { file: 9, rank: 0 };
        assert_eq!(format!("{err}"), "position (file 9, rank 0) is off the board");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::NotActiveColor {
            piece: Piece::BLACK_PAWN,
            position: Position::new(1, 7),
        };
        assert_eq!(format!("{err}"), "BP on A7 does not belong to the side to move");
    }

    #[test]
    fn move_error_from_coord_error() {
        let err: MoveError = CoordError::InvalidFile { character: 'z' }.into();
        assert!(matches!(err, MoveError::Parse { .. }));
    }

    #[test]
    fn notation_error_display() {
        let err = NotationError::BufferTooSmall { needed: 88, capacity: 10 };
        assert_eq!(format!("{err}"), "notation buffer holds 10 bytes, need at least 88");
    }
}
