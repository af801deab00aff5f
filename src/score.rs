use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{board::Mark, outcome::Outcome};

/// Completed-game tallies for a session.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished game. Recording `InProgress` changes nothing.
    pub fn record(self, outcome: Outcome) -> Scoreboard {
        match outcome {
            Outcome::Won(Mark::X) => Scoreboard {
                x_wins: self.x_wins + 1,
                ..self
            },
            Outcome::Won(Mark::O) => Scoreboard {
                o_wins: self.o_wins + 1,
                ..self
            },
            Outcome::Tied => Scoreboard {
                ties: self.ties + 1,
                ..self
            },
            Outcome::InProgress => {
                warn!("tried to record a game that is still in progress");
                self
            }
        }
    }

    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}
