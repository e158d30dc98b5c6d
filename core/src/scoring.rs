// SPDX-License-Identifier: MIT OR Apache-2.0

//! Score summaries and recounts

use serde::{Deserialize, Serialize};

use crate::{board::Board, GameState, Outcome, Player, Scores};

/// Score breakdown shown at the end of a game (or mid-game as a standings line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Boxes owned by each player
    pub scores: Scores,
    /// Boxes on the board
    pub total_boxes: u16,
    /// Boxes nobody owns yet
    pub unclaimed: u16,
    /// Player 1 minus Player 2
    pub margin: i32,
    /// Winner or tie, once every box is owned
    pub outcome: Option<Outcome>,
}

impl ScoreSummary {
    /// The player currently ahead, if any
    pub fn leader(&self) -> Option<Player> {
        Outcome::from_scores(&self.scores).winner()
    }

    /// True if the trailing player can no longer catch up
    pub fn is_decided(&self) -> bool {
        self.margin.unsigned_abs() > u32::from(self.unclaimed)
    }
}

/// Summarise the scores of a game
pub fn calculate_final_score(game_state: &GameState) -> ScoreSummary {
    let scores = game_state.scores();
    let total_boxes = game_state.total_boxes() as u16;

    ScoreSummary {
        scores,
        total_boxes,
        unclaimed: total_boxes - scores.total(),
        margin: i32::from(scores.player1) - i32::from(scores.player2),
        outcome: game_state.outcome(),
    }
}

/// Count owned boxes directly from the board
pub fn count_owned(board: &Board) -> Scores {
    let mut scores = Scores::default();
    for owner in board.owners().iter().flatten() {
        scores.increment(*owner);
    }
    scores
}

/// True if the cached scores agree with the box owners on the board
pub fn scores_consistent(game_state: &GameState) -> bool {
    count_owned(game_state.board()) == game_state.scores()
}
