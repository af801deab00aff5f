//! Shared helpers for the integration tests.
#![allow(dead_code)]

use tic_tac_toe_engine::{Board, GameState, Mark, Position};
use tracing_subscriber::EnvFilter;

/// Installs a `RUST_LOG`-driven subscriber. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a board from three rows, top to bottom, using `X`, `O` and `-`.
pub fn board(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (row, text) in rows.iter().enumerate() {
        for (column, symbol) in text.chars().enumerate() {
            let mark = match symbol {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => continue,
            };
            let position = Position::new(column as u8, row as u8).unwrap();
            board = board.with_mark_at(position, mark);
        }
    }
    board
}

/// Plays `(column, row)` moves in order through `apply_move`.
pub fn play(mut state: GameState, moves: &[(u8, u8)]) -> GameState {
    for &(column, row) in moves {
        state = state.apply_move(Position::new(column, row).unwrap());
    }
    state
}
