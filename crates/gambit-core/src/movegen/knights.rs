//! Knight move generation.

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::{MoveList, push_if_open};

/// Knight jumps as `(file, rank)` deltas, in emission order.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (-1, -2),
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
];

/// Generate knight candidates from `start`.
///
/// A jump is kept when it lands on the board on an empty square or an enemy piece.
///
/// # Panics
///
/// Panics if `start` does not hold a knight.
pub fn knight_moves(board: &Board, start: Position) -> MoveList {
    let knight = board.piece_at(start);
    assert_eq!(knight.kind(), Some(PieceKind::Knight), "no knight on {start}");

    let mut list = MoveList::new();
    for (df, dr) in KNIGHT_OFFSETS {
        push_if_open(board, knight, start, start.offset(df, dr), &mut list);
    }
    list
}
