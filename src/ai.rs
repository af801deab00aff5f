//! One-ply opponent.
//!
//! Cells are scanned in row-major order. The first empty cell that wins for
//! `ai` or blocks a win for `opponent` is taken on the spot; otherwise the
//! last empty cell scanned is played. This is a weak policy (no minimax, no
//! center or corner preference) and is kept as is so games replay the same.

use tracing::debug;

use crate::{
    board::{Board, Mark, Position},
    outcome::{evaluate, Outcome},
};

fn wins_at(board: &Board, position: Position, mark: Mark) -> bool {
    evaluate(&board.with_mark_at(position, mark)) == Outcome::Won(mark)
}

/// Picks the cell `ai` plays on `board`. Returns `None` only when the board is full.
pub fn choose_move(board: &Board, ai: Mark, opponent: Mark) -> Option<Position> {
    let mut fallback = None;

    for position in board.empty_positions() {
        if wins_at(board, position, ai) {
            debug!(%position, %ai, "taking winning cell");
            return Some(position);
        }
        if wins_at(board, position, opponent) {
            debug!(%position, %ai, "blocking opponent");
            return Some(position);
        }
        fallback = Some(position);
    }

    debug!(position = ?fallback, %ai, "no win or block, using fallback");
    fallback
}
