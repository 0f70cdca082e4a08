//! Core chess types on a 64-square mailbox board: positions, pieces,
//! pseudo-legal move generation, move application, and FEN output.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod flags;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;

pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, MoveAudit};
pub use color::Color;
pub use error::{CoordError, MoveError, NotationError, PositionError};
pub use fen::{MAX_FEN_LEN, STARTING_FEN};
pub use flags::{BoardFlags, CastleSide};
pub use movegen::{MoveList, generate_moves, generate_side_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Coord, Position};
