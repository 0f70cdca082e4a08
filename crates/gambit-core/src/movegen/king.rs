//! King move generation: one step in each of the eight directions.

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::sliders::QUEEN_DIRECTIONS;
use super::{MoveList, push_if_open};

/// Generate king candidates from `start`.
///
/// Castling is not generated even when the board's castling flags are set,
/// and destinations are not checked for attacks.
///
/// # Panics
///
/// Panics if `start` does not hold a king.
pub fn king_moves(board: &Board, start: Position) -> MoveList {
    let king = board.piece_at(start);
    assert_eq!(king.kind(), Some(PieceKind::King), "no king on {start}");

    let mut list = MoveList::new();
    for (df, dr) in QUEEN_DIRECTIONS {
        push_if_open(board, king, start, start.offset(df, dr), &mut list);
    }
    list
}
