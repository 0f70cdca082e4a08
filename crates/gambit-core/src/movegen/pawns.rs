//! Pawn move generation, one generator per color.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;

use super::MoveList;

/// Generate white pawn candidates from `start`: advances toward rank 8.
///
/// # Panics
///
/// Panics if `start` does not hold a white pawn.
pub fn white_pawn_moves(board: &Board, start: Position) -> MoveList {
    assert_eq!(board.piece_at(start), Piece::WHITE_PAWN, "no white pawn on {start}");
    pawn_moves(board, start, Color::White)
}

/// Generate black pawn candidates from `start`: advances toward rank 1.
///
/// # Panics
///
/// Panics if `start` does not hold a black pawn.
pub fn black_pawn_moves(board: &Board, start: Position) -> MoveList {
    assert_eq!(board.piece_at(start), Piece::BLACK_PAWN, "no black pawn on {start}");
    pawn_moves(board, start, Color::Black)
}

/// Shared body for both colors.
///
/// Order: single push, double push, capture toward the H file, capture toward
/// the A file. The double push is only considered when the single push square
/// was empty. Diagonals are only offered when an enemy stands there, so no en
/// passant and no promotion piece choice.
fn pawn_moves(board: &Board, start: Position, us: Color) -> MoveList {
    let forward = us.forward();
    let home_rank = match us {
        Color::White => 2,
        Color::Black => 7,
    };

    let mut list = MoveList::new();

    let one_step = start.offset(0, forward);
    if one_step.in_bounds() && board.piece_at(one_step).is_empty() {
        list.push(Move::new(start, one_step));

        if start.rank() == home_rank {
            let two_step = one_step.offset(0, forward);
            if board.piece_at(two_step).is_empty() {
                list.push(Move::new(start, two_step));
            }
        }
    }

    for side in [1, -1] {
        let diagonal = start.offset(side, forward);
        if diagonal.in_bounds() && board.piece_at(diagonal).color() == Some(us.flip()) {
            list.push(Move::new(start, diagonal));
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::{black_pawn_moves, white_pawn_moves};
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::position::Position;

    #[test]
    fn white_home_rank_double_step() {
        let board = Board::new();
        let start = Position::new(2, 2);
        let moves = white_pawn_moves(&board, start);
        assert_eq!(
            moves.destinations(),
            vec![Position::new(2, 3), Position::new(2, 4)]
        );
    }

    #[test]
    fn white_single_step_after_leaving_home() {
        let mut board = Board::new();
        board.set_piece(Position::new(2, 2), Piece::EMPTY);
        board.set_piece(Position::new(2, 3), Piece::WHITE_PAWN);
        let moves = white_pawn_moves(&board, Position::new(2, 3));
        assert_eq!(moves.destinations(), vec![Position::new(2, 4)]);
    }

    #[test]
    fn double_step_gated_behind_single() {
        let mut board = Board::new();
        board.set_piece(Position::new(5, 3), Piece::BLACK_KNIGHT);
        assert!(white_pawn_moves(&board, Position::new(5, 2)).is_empty());

        let mut board = Board::new();
        board.set_piece(Position::new(4, 6), Piece::WHITE_BISHOP);
        assert!(!black_pawn_moves(&board, Position::new(4, 7)).reaches(Position::new(4, 5)));
    }

    #[test]
    fn double_step_blocked_on_far_square() {
        let mut board = Board::new();
        board.set_piece(Position::new(3, 4), Piece::BLACK_PAWN);
        let moves = white_pawn_moves(&board, Position::new(3, 2));
        assert_eq!(moves.destinations(), vec![Position::new(3, 3)]);
    }

    #[test]
    fn white_captures_only_black() {
        let start = Position::new(4, 4);
        let mut board = Board::empty();
        board.set_piece(start, Piece::WHITE_PAWN);
        board.set_piece(Position::new(4, 5), Piece::BLACK_PAWN);
        board.set_piece(Position::new(5, 5), Piece::BLACK_ROOK);
        board.set_piece(Position::new(3, 5), Piece::WHITE_KNIGHT);
        let moves = white_pawn_moves(&board, start);
        assert_eq!(moves.destinations(), vec![Position::new(5, 5)]);
    }

    #[test]
    fn black_mirror() {
        let board = Board::new();
        let moves = black_pawn_moves(&board, Position::new(7, 7));
        assert_eq!(
            moves.destinations(),
            vec![Position::new(7, 6), Position::new(7, 5)]
        );

        let start = Position::new(4, 5);
        let mut board = Board::empty();
        board.set_piece(start, Piece::BLACK_PAWN);
        board.set_piece(Position::new(5, 4), Piece::WHITE_PAWN);
        board.set_piece(Position::new(3, 4), Piece::WHITE_QUEEN);
        let moves = black_pawn_moves(&board, start);
        assert_eq!(
            moves.destinations(),
            vec![Position::new(4, 4), Position::new(5, 4), Position::new(3, 4)]
        );
    }

    #[test]
    fn edge_files_and_last_rank() {
        let mut board = Board::empty();
        board.set_piece(Position::new(8, 8), Piece::WHITE_PAWN);
        assert!(white_pawn_moves(&board, Position::new(8, 8)).is_empty());

        board.set_piece(Position::new(1, 1), Piece::BLACK_PAWN);
        assert!(black_pawn_moves(&board, Position::new(1, 1)).is_empty());

        board.set_piece(Position::new(1, 5), Piece::WHITE_PAWN);
        board.set_piece(Position::new(2, 6), Piece::BLACK_PAWN);
        let moves = white_pawn_moves(&board, Position::new(1, 5));
        assert_eq!(
            moves.destinations(),
            vec![Position::new(1, 6), Position::new(2, 6)]
        );
    }

    #[test]
    #[should_panic(expected = "no white pawn")]
    fn white_generator_rejects_black_pawn() {
        let board = Board::new();
        white_pawn_moves(&board, Position::new(1, 7));
    }
}
