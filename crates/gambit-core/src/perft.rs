//! Counting the pseudo-legal candidate tree.
//!
//! Because generation ignores king safety, counts match standard legal perft
//! tables only at shallow depths where no check can have arisen.

use crate::board::Board;
use crate::movegen::generate_side_moves;

/// Count the leaves of the candidate tree at the given depth.
///
/// Depth 0 returns 1. Depth 1 returns the number of candidates for the side to
/// move without applying them.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_side_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let mut child = *board;
        let applied = child.make_move(*mv);
        debug_assert!(applied.is_ok(), "candidate {mv} rejected: {applied:?}");
        if applied.is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Run [`perft`] with a per-move breakdown, sorted by move text.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_side_moves(board);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|mv| {
            let mut child = *board;
            let count = match child.make_move(*mv) {
                Ok(()) if depth > 1 => perft(&child, depth - 1),
                Ok(()) => 1,
                Err(_) => 0,
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
