//! Move application.

use tracing::{debug, trace};

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::piece::Piece;

impl Board {
    /// Apply `mv` in place and pass the turn to the other side.
    ///
    /// The end square receives the moving piece, overwriting (and so capturing)
    /// any occupant, and the start square is emptied. The move is not checked
    /// against the generators: any `(start, end)` pair is executed. Castling
    /// rights and clocks are left untouched, and the captured piece is not kept.
    ///
    /// An empty start square counts as the active color, so moving "nothing"
    /// succeeds: the end square is cleared and the turn passes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either square is off the board.
    /// - [`MoveError::NotActiveColor`] if the start piece belongs to the side
    ///   not to move.
    ///
    /// On error the board is unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let (start, end) = (mv.start(), mv.end());
        for position in [start, end] {
            if !position.in_bounds() {
                return Err(MoveError::OutOfBounds { position });
            }
        }

        let piece = self.piece_at(start);
        if !self.is_active_color(piece) {
            debug!(%mv, ?piece, to_move = %self.active_color(), "rejected move out of turn");
            return Err(MoveError::NotActiveColor {
                piece,
                position: start,
            });
        }

        if piece.is_empty() {
            debug!(%mv, "moving from an empty square");
        }

        let captured = self.piece_at(end);
        self.set_piece(start, Piece::EMPTY);
        self.set_piece(end, piece);
        self.flags_mut().flip_active_color();

        trace!(%mv, ?piece, ?captured, "applied move");
        Ok(())
    }
}
