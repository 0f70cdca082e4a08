//! Pseudo-legal move generation.
//!
//! Generators answer which squares a piece can reach given board geometry and
//! occupancy. They never check whether the mover's king is left in check, and
//! they never produce castling or en passant moves.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

pub use self::king::king_moves;
pub use self::knights::knight_moves;
pub use self::pawns::{black_pawn_moves, white_pawn_moves};
pub use self::sliders::{bishop_moves, queen_moves, rook_moves};

/// Candidate moves in generation order.
///
/// Each generator appends in its own fixed direction order, so the sequence is
/// stable across calls but not sorted by any chess criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Append a move.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Append every move of `other`, keeping its order.
    pub fn extend_from(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Return the moves' end squares in order.
    pub fn destinations(&self) -> Vec<Position> {
        self.moves.iter().map(|mv| mv.end()).collect()
    }

    /// `true` if some move lands on `end`.
    pub fn reaches(&self, end: Position) -> bool {
        self.moves.iter().any(|mv| mv.end() == end)
    }

    /// Consume the list and return the underlying vector.
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Generate candidate moves for the piece on `pos`.
///
/// An empty square yields an empty list. Pawns are routed by color; every
/// other kind shares one generator for both colors.
///
/// # Panics
///
/// Panics if `pos` is off the board.
pub fn generate_moves(board: &Board, pos: Position) -> MoveList {
    let piece = board.piece_at(pos);
    let (Some(kind), Some(color)) = (piece.kind(), piece.color()) else {
        return MoveList::new();
    };

    match (kind, color) {
        (PieceKind::Pawn, Color::White) => white_pawn_moves(board, pos),
        (PieceKind::Pawn, Color::Black) => black_pawn_moves(board, pos),
        (PieceKind::Knight, _) => knight_moves(board, pos),
        (PieceKind::Bishop, _) => bishop_moves(board, pos),
        (PieceKind::Rook, _) => rook_moves(board, pos),
        (PieceKind::Queen, _) => queen_moves(board, pos),
        (PieceKind::King, _) => king_moves(board, pos),
    }
}

/// Generate candidate moves for every piece of the side to move, in square order.
pub fn generate_side_moves(board: &Board) -> MoveList {
    let us = board.active_color();
    let mut list = MoveList::new();
    for (pos, piece) in board.occupied() {
        if piece.color() == Some(us) {
            list.extend_from(generate_moves(board, pos));
        }
    }
    list
}

/// Append `start -> end` when `end` is on the board and not held by a friend of `mover`.
#[inline]
fn push_if_open(board: &Board, mover: Piece, start: Position, end: Position, list: &mut MoveList) {
    if !end.in_bounds() {
        return;
    }
    let target = board.piece_at(end);
    if target.is_empty() || target.is_enemy_of(mover) {
        list.push(Move::new(start, end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_square_yields_nothing() {
        let board = Board::new();
        assert!(generate_moves(&board, Position::new(4, 4)).is_empty());
    }

    #[test]
    fn starting_side_moves() {
        let board = Board::new();
        assert_eq!(generate_side_moves(&board).len(), 20);

        let mut black = board;
        black.flags_mut().flip_active_color();
        let moves = generate_side_moves(&black);
        assert_eq!(moves.len(), 20);
        assert!(moves.as_slice().iter().all(|mv| mv.start().rank() >= 7));
    }

    #[test]
    fn back_rank_blocked_at_start() {
        let board = Board::new();
        for file in [1, 3, 4, 5, 6, 8] {
            let moves = generate_moves(&board, Position::new(file, 1));
            assert!(moves.is_empty(), "file {file} should be blocked");
        }
    }

    #[test]
    fn dispatch_routes_by_kind() {
        let mut board = Board::empty();
        let center = Position::new(4, 4);
        let cases = [
            (Piece::WHITE_KNIGHT, 8),
            (Piece::BLACK_KNIGHT, 8),
            (Piece::WHITE_BISHOP, 13),
            (Piece::BLACK_ROOK, 14),
            (Piece::WHITE_QUEEN, 27),
            (Piece::BLACK_KING, 8),
            (Piece::WHITE_PAWN, 1),
            (Piece::BLACK_PAWN, 1),
        ];
        for (piece, expected) in cases {
            board.set_piece(center, piece);
            assert_eq!(
                generate_moves(&board, center).len(),
                expected,
                "wrong count for {piece:?}"
            );
        }
    }

    #[test]
    fn move_list_helpers() {
        let board = Board::new();
        let moves = generate_moves(&board, Position::new(2, 1));
        assert_eq!(
            moves.destinations(),
            vec![Position::new(1, 3), Position::new(3, 3)]
        );
        assert!(moves.reaches(Position::new(3, 3)));
        assert!(!moves.reaches(Position::new(4, 2)));
        assert_eq!(moves[0].start(), Position::new(2, 1));
        assert_eq!((&moves).into_iter().count(), 2);
        assert_eq!(moves.into_vec().len(), 2);
    }
}
