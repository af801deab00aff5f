//! Tests for board evaluation.

mod common;

use common::board;
use tic_tac_toe_engine::{evaluate, outcome::LINES, Board, Mark, Outcome, Position};

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let board = line
                .iter()
                .fold(Board::new(), |board, &position| board.with_mark_at(position, mark));
            assert_eq!(evaluate(&board), Outcome::Won(mark), "line {line:?}");
        }
    }
}

#[test]
fn test_win_with_opponent_marks_elsewhere() {
    let board = board(["OXO", "-X-", "OX-"]);
    assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
}

#[test]
fn test_win_on_full_board_is_not_a_tie() {
    let board = board(["XOX", "OXO", "OXX"]);
    assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
}

#[test]
fn test_full_board_without_line_is_tied() {
    let board = board(["XOX", "XOO", "OXX"]);
    assert_eq!(evaluate(&board), Outcome::Tied);
}

#[test]
fn test_partial_board_without_line_in_progress() {
    let board = board(["XO-", "-X-", "--O"]);
    assert_eq!(evaluate(&board), Outcome::InProgress);
}

#[test]
fn test_evaluate_is_pure() {
    let board = board(["XX-", "OO-", "---"]);
    assert_eq!(evaluate(&board), evaluate(&board));
    let won = board.with_mark_at(Position::TOP_RIGHT, Mark::X);
    assert_eq!(evaluate(&won), Outcome::Won(Mark::X));
    assert_eq!(evaluate(&board), Outcome::InProgress);
}
