use tracing::info;

use crate::{board::Position, config::SessionConfig, game::GameState, score::Scoreboard};

/// A run of games with a shared scoreboard.
///
/// Feeds moves into the current game, counts each finished game exactly
/// once, and handles the new-game, mode-change and reset-scores signals.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    state: GameState,
    scoreboard: Scoreboard,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: GameState::new(config.automated_opponent),
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn play(&mut self, position: Position) -> &GameState {
        let was_complete = self.state.is_complete();
        self.state = self.state.apply_move(position);

        if !was_complete && self.state.is_complete() {
            self.scoreboard = self.scoreboard.record(self.state.outcome());
            info!(
                outcome = %self.state.outcome(),
                x_wins = self.scoreboard.x_wins(),
                o_wins = self.scoreboard.o_wins(),
                ties = self.scoreboard.ties(),
                "recorded result"
            );
        }
        &self.state
    }

    pub fn new_game(&mut self) {
        self.state = GameState::new(self.config.automated_opponent);
    }

    /// Switches mode and starts over. Scores are kept.
    pub fn set_automated_opponent(&mut self, automated_opponent: bool) {
        info!(automated_opponent, "mode changed");
        self.config.automated_opponent = automated_opponent;
        self.new_game();
    }

    pub fn reset_scores(&mut self) {
        self.scoreboard = Scoreboard::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
