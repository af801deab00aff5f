//! Rules engine for 3x3 tic-tac-toe.
//!
//! Games are immutable [`GameState`] values: each accepted move yields a new
//! state, and illegal moves hand back the input untouched. A game can run
//! against a one-ply automated opponent whose reply is folded into the
//! human's move. [`Session`] adds a scoreboard and the reset signals a
//! front end needs.

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod outcome;
pub mod score;
pub mod session;

pub use ai::choose_move;
pub use board::{Board, Mark, Position};
pub use config::SessionConfig;
pub use error::{ConfigError, MoveError, PositionError};
pub use game::{GameState, FIRST_PLAYER};
pub use outcome::{evaluate, Outcome};
pub use score::Scoreboard;
pub use session::Session;

/// Fresh game: empty board, X to move.
pub fn new_game(automated_opponent: bool) -> GameState {
    GameState::new(automated_opponent)
}

pub fn apply_move(state: GameState, position: Position) -> GameState {
    state.apply_move(position)
}

pub fn record(scoreboard: Scoreboard, outcome: Outcome) -> Scoreboard {
    scoreboard.record(outcome)
}
