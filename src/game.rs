use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    ai::choose_move,
    board::{Board, Mark, Position},
    error::MoveError,
    outcome::{evaluate, Outcome},
};

/// The mark that opens every game and, against the automated opponent,
/// the mark the human plays.
pub const FIRST_PLAYER: Mark = Mark::X;

/// Snapshot of one game. Every accepted move produces a new value.
///
/// `outcome` is always `evaluate(&board)`, so a state is complete exactly
/// when its board is won or tied. It is not serialized; loading a state
/// recomputes it from the board.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "SavedGame", into = "SavedGame")]
pub struct GameState {
    board: Board,
    active_player: Mark,
    outcome: Outcome,
    automated_opponent: bool,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct SavedGame {
    board: Board,
    active_player: Mark,
    automated_opponent: bool,
}

impl From<SavedGame> for GameState {
    fn from(saved: SavedGame) -> Self {
        GameState {
            board: saved.board,
            active_player: saved.active_player,
            outcome: evaluate(&saved.board),
            automated_opponent: saved.automated_opponent,
        }
    }
}

impl From<GameState> for SavedGame {
    fn from(state: GameState) -> Self {
        SavedGame {
            board: state.board,
            active_player: state.active_player,
            automated_opponent: state.automated_opponent,
        }
    }
}

impl GameState {
    /// Empty board, X to move.
    pub fn new(automated_opponent: bool) -> Self {
        Self {
            board: Board::new(),
            active_player: FIRST_PLAYER,
            outcome: Outcome::InProgress,
            automated_opponent,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Mark {
        self.active_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    pub fn is_automated_opponent(&self) -> bool {
        self.automated_opponent
    }

    /// Places the active player's mark at `position`, or says why not.
    pub fn try_apply(self, position: Position) -> Result<GameState, MoveError> {
        if self.is_complete() {
            return Err(MoveError::GameComplete);
        }
        if self.board.is_occupied(position) {
            return Err(MoveError::Occupied(position));
        }

        let board = self.board.with_mark_at(position, self.active_player);
        let outcome = evaluate(&board);
        let active_player = if outcome.is_terminal() {
            self.active_player
        } else {
            !self.active_player
        };

        Ok(GameState {
            board,
            active_player,
            outcome,
            ..self
        })
    }

    /// Like [`GameState::try_apply`], but an illegal move returns `self` unchanged.
    pub fn apply(self, position: Position) -> GameState {
        self.try_apply(position).unwrap_or_else(|e| {
            debug!(%position, error = %e, "move ignored");
            self
        })
    }

    /// Applies a human move and, against the automated opponent, its reply.
    ///
    /// The AI never moves on a completed game. After a full round the
    /// human is active again unless the reply ended the game.
    #[instrument(level = "debug", skip(self), fields(player = %self.active_player))]
    pub fn apply_move(self, position: Position) -> GameState {
        let next = self.apply(position);
        if next == self {
            return self;
        }
        if next.is_complete() {
            info!(outcome = %next.outcome, "game complete\n{}", next.board);
            return next;
        }
        if !next.automated_opponent {
            return next;
        }

        let ai = next.active_player;
        let Some(reply) = choose_move(&next.board, ai, !ai) else {
            return next;
        };
        let after = next.apply(reply);
        if after.is_complete() {
            info!(outcome = %after.outcome, "game complete\n{}", after.board);
        }
        after
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(false)
    }
}
