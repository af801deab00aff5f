use thiserror::Error;

use crate::board::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("({column}, {row}) is outside the 3x3 board")]
    OutOfRange { column: u8, row: u8 },
    #[error("unrecognized cell name {0:?}, expected a1..c3")]
    Unrecognized(String),
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already complete")]
    GameComplete,
    #[error("cell {0} is already marked")]
    Occupied(Position),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("could not write session config: {0}")]
    Write(#[from] ron::Error),
}
