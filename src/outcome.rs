use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, Mark, Position};

/// Where a board stands. `Tied` is never stored in a cell.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won(Mark),
    Tied,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::InProgress | Outcome::Tied => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{mark} wins!"),
            Outcome::Tied => write!(f, "Game tied"),
        }
    }
}

/// The eight winning lines, in the order they are checked:
/// rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
    // columns
    [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
    // diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

/// Mark filling all three cells of `line`, if any.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Mark> {
    let mark = board[a]?;
    (board[b] == Some(mark) && board[c] == Some(mark)).then_some(mark)
}

/// Recomputes the outcome of `board` from scratch.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = LINES.iter().find_map(|&line| line_owner(board, line)) {
        trace!(%mark, "winning line found");
        return Outcome::Won(mark);
    }

    if board.is_full() {
        Outcome::Tied
    } else {
        Outcome::InProgress
    }
}
