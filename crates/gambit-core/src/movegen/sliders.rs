//! Sliding piece (bishop, rook, queen) move generation by ray walking.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::MoveList;

/// Orthogonal rays: up, down, right, left.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal rays: up-right, down-right, up-left, down-left.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Diagonals first, then orthogonals. Shared with the king's single steps.
pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

/// Generate rook candidates from `start`.
///
/// # Panics
///
/// Panics if `start` does not hold a rook.
pub fn rook_moves(board: &Board, start: Position) -> MoveList {
    walk_rays(board, start, PieceKind::Rook, &ROOK_DIRECTIONS)
}

/// Generate bishop candidates from `start`.
///
/// # Panics
///
/// Panics if `start` does not hold a bishop.
pub fn bishop_moves(board: &Board, start: Position) -> MoveList {
    walk_rays(board, start, PieceKind::Bishop, &BISHOP_DIRECTIONS)
}

/// Generate queen candidates from `start`.
///
/// # Panics
///
/// Panics if `start` does not hold a queen.
pub fn queen_moves(board: &Board, start: Position) -> MoveList {
    walk_rays(board, start, PieceKind::Queen, &QUEEN_DIRECTIONS)
}

/// Walk each ray in turn until the edge or the first occupied square.
///
/// Empty squares are emitted and the walk continues. An enemy piece is emitted
/// and ends the ray. A friendly piece ends the ray without being emitted.
fn walk_rays(board: &Board, start: Position, kind: PieceKind, directions: &[(i8, i8)]) -> MoveList {
    let slider = board.piece_at(start);
    assert_eq!(slider.kind(), Some(kind), "no {kind:?} on {start}");

    let mut list = MoveList::new();
    for &(df, dr) in directions {
        let mut target = start.offset(df, dr);
        while target.in_bounds() {
            let occupant = board.piece_at(target);
            if occupant.is_empty() {
                list.push(Move::new(start, target));
            } else {
                if occupant.is_enemy_of(slider) {
                    list.push(Move::new(start, target));
                }
                break;
            }
            target = target.offset(df, dr);
        }
    }
    list
}
