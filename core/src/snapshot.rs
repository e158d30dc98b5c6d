// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only views of a game for renderers and UI controllers

use serde::{Deserialize, Serialize};

use crate::{BoxPos, Edge, GameState, Outcome, Player, Point, Scores};

/// Borrowed, read-only view of a [`GameState`]
#[derive(Debug, Clone, Copy)]
pub struct Status<'a> {
    state: &'a GameState,
}

impl<'a> Status<'a> {
    pub(crate) fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Dots per side
    pub fn size(&self) -> u8 {
        self.state.size()
    }

    /// True if the edge between `p1` and `p2` is claimed
    pub fn has_edge(&self, p1: Point, p2: Point) -> bool {
        self.state.has_edge(p1, p2)
    }

    /// Claimed edges in canonical order
    pub fn edges(&self) -> impl Iterator<Item = &'a Edge> + 'a {
        self.state.board().edges()
    }

    /// Owner of a box, `None` while unclaimed
    pub fn owner(&self, pos: BoxPos) -> Option<Player> {
        self.state.board().owner(pos)
    }

    /// Box owners in row-major order
    pub fn owners(&self) -> &'a [Option<Player>] {
        self.state.board().owners()
    }

    pub fn scores(&self) -> Scores {
        self.state.scores()
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Winner or tie, once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Owned copy of everything in this view
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_size: self.size(),
            edges: self.edges().copied().collect(),
            owners: self.owners().to_vec(),
            scores: self.scores(),
            current_player: self.current_player(),
            game_over: self.is_game_over(),
            outcome: self.outcome(),
        }
    }
}

/// Owned, serializable picture of a game at one moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Dots per side
    pub board_size: u8,
    /// Claimed edges in canonical order
    pub edges: Vec<Edge>,
    /// Box owners in row-major order
    pub owners: Vec<Option<Player>>,
    pub scores: Scores,
    pub current_player: Player,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// Serialize to single-line JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
