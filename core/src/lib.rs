// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dots and Boxes Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Dot, edge and box representation on a square grid
//! - Move validation and box completion detection
//! - Scoring, the extra-turn rule and game termination
//! - Pointer-to-edge mapping helpers for graphical hosts

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod engine;
pub mod input;
pub mod rules;
pub mod scoring;
pub mod snapshot;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::board::Board;
use crate::rules::RuleValidator;

pub use snapshot::{Snapshot, Status};

/// Smallest number of dots per side that still encloses a box
pub const MIN_BOARD_SIZE: u8 = 2;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (always moves first)
    Player1,
    /// Second player
    Player2,
}

impl Player {
    /// Returns the other player
    pub fn opposite(&self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// 1 or 2, as shown to humans
    pub fn number(&self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A dot on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Column
    pub x: u8,
    /// Row
    pub y: u8,
}

impl Point {
    /// Create a new point
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the dot exists on a board with `board_size` dots per side
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.x < board_size && self.y < board_size
    }

    /// True if the two dots differ by exactly one step along exactly one axis
    pub fn is_adjacent(&self, other: &Point) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx + dy == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Direction an edge runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Both endpoints share a row
    Horizontal,
    /// Both endpoints share a column
    Vertical,
}

/// A unit segment between two dots.
///
/// The endpoints are always stored in ascending order, so an edge and its
/// reverse compare, hash and serialize identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(Point, Point)", into = "(Point, Point)")]
pub struct Edge {
    a: Point,
    b: Point,
}

impl Edge {
    /// Canonical edge for the unordered pair `{p1, p2}`. Does not check adjacency.
    pub fn new(p1: Point, p2: Point) -> Self {
        if p1 <= p2 {
            Self { a: p1, b: p2 }
        } else {
            Self { a: p2, b: p1 }
        }
    }

    /// Canonical edge, rejecting pairs that are not neighbouring dots on the board
    pub fn try_new(p1: Point, p2: Point, board_size: u8) -> Result<Self, GameError> {
        if !rules::is_valid_edge(p1, p2, board_size) {
            return Err(GameError::InvalidEdge);
        }
        Ok(Self::new(p1, p2))
    }

    /// The smaller endpoint
    pub fn a(&self) -> Point {
        self.a
    }

    /// The larger endpoint
    pub fn b(&self) -> Point {
        self.b
    }

    pub fn endpoints(&self) -> (Point, Point) {
        (self.a, self.b)
    }

    pub fn orientation(&self) -> Orientation {
        if self.a.y == self.b.y {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl From<(Point, Point)> for Edge {
    fn from((p1, p2): (Point, Point)) -> Self {
        Edge::new(p1, p2)
    }
}

impl From<Edge> for (Point, Point) {
    fn from(edge: Edge) -> Self {
        edge.endpoints()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// A unit cell, addressed by its top-left dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoxPos {
    /// Column of the top-left dot
    pub x: u8,
    /// Row of the top-left dot
    pub y: u8,
}

impl BoxPos {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the box exists on a board with `board_size` dots per side
    pub fn is_valid(&self, board_size: u8) -> bool {
        let boxes_per_side = board_size.saturating_sub(1);
        self.x < boxes_per_side && self.y < boxes_per_side
    }

    /// The four edges enclosing this box: top, right, bottom, left
    pub fn bounding_edges(&self) -> [Edge; 4] {
        rules::bounding_edges(*self)
    }
}

/// Boxes owned by each player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player1: u16,
    pub player2: u16,
}

impl Scores {
    /// Score of the given player
    pub fn get(&self, player: Player) -> u16 {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    /// Total boxes claimed by either player
    pub fn total(&self) -> u16 {
        self.player1 + self.player2
    }

    pub(crate) fn increment(&mut self, player: Player) {
        match player {
            Player::Player1 => self.player1 += 1,
            Player::Player2 => self.player2 += 1,
        }
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player owns more boxes
    Winner(Player),
    /// Both players own the same number of boxes
    Tie,
}

impl Outcome {
    /// Compare scores
    pub fn from_scores(scores: &Scores) -> Self {
        use std::cmp::Ordering;

        match scores.player1.cmp(&scores.player2) {
            Ordering::Greater => Outcome::Winner(Player::Player1),
            Ordering::Less => Outcome::Winner(Player::Player2),
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// The winning player, if any
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins!", player),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Game events emitted during play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An edge was claimed
    EdgeClaimed {
        /// The claimed edge
        edge: Edge,
        /// The player who drew it
        by: Player,
    },
    /// A box received its fourth edge
    BoxCompleted {
        /// The completed box
        pos: BoxPos,
        /// The player who now owns it
        by: Player,
    },
    /// The move completed no box, so the turn moved on
    TurnPassed {
        /// The player now to move
        to: Player,
    },
    /// Every box is owned
    GameFinished {
        /// Final scores
        scores: Scores,
        /// Winner or tie
        outcome: Outcome,
    },
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The board has fewer than two dots per side
    #[error("Invalid board size {0}: need at least 2 dots per side")]
    InvalidSize(u8),

    /// The points are out of bounds or not neighbouring dots
    #[error("Invalid edge: points must be neighbouring dots on the board")]
    InvalidEdge,

    /// Somebody already drew this edge
    #[error("Edge already claimed")]
    EdgeAlreadyClaimed,

    /// All boxes are owned
    #[error("Game is already over")]
    GameAlreadyOver,
}

/// Everything that changed as the result of one accepted move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The edge that was claimed
    pub edge: Edge,
    /// The player who made the move
    pub player: Player,
    /// Boxes completed by this move (at most two)
    pub completed: Vec<BoxPos>,
    /// Scores after the move
    pub scores: Scores,
    /// The player to move next
    pub current_player: Player,
    /// Whether this move ended the game
    pub game_over: bool,
    /// Winner or tie once the game is over
    pub outcome: Option<Outcome>,
}

impl MoveOutcome {
    /// True if the mover keeps the turn
    pub fn extra_turn(&self) -> bool {
        !self.completed.is_empty() && !self.game_over
    }

    /// Expand the outcome into the event sequence a host can replay
    pub fn events(&self) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::EdgeClaimed {
            edge: self.edge,
            by: self.player,
        }];

        events.extend(self.completed.iter().map(|&pos| GameEvent::BoxCompleted {
            pos,
            by: self.player,
        }));

        if self.current_player != self.player {
            events.push(GameEvent::TurnPassed {
                to: self.current_player,
            });
        }

        if let Some(outcome) = self.outcome {
            events.push(GameEvent::GameFinished {
                scores: self.scores,
                outcome,
            });
        }

        events
    }
}

/// Represents the current state of a Dots and Boxes game.
///
/// Created fresh for every game; the only mutation is [`GameState::try_claim_edge`].
/// Restarting means constructing a new value.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Claimed edges and box owners
    board: Board,
    /// The player whose turn it is
    current_player: Player,
    /// Cached box counts per player
    scores: Scores,
    /// Set exactly once, when the last box is claimed
    outcome: Option<Outcome>,
}

impl GameState {
    /// Create a new game with `board_size` dots per side
    pub fn new(board_size: u8) -> Result<Self, GameError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidSize(board_size));
        }

        tracing::debug!(board_size, "new game");
        Ok(Self {
            board: Board::new(board_size),
            current_player: Player::Player1,
            scores: Scores::default(),
            outcome: None,
        })
    }

    /// Dots per side
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// Canonical identity of the unordered pair `{p1, p2}`
    pub fn edge_key(p1: Point, p2: Point) -> Edge {
        Edge::new(p1, p2)
    }

    /// True iff `p1` and `p2` are distinct neighbouring dots on this board
    pub fn is_valid_edge(&self, p1: Point, p2: Point) -> bool {
        rules::is_valid_edge(p1, p2, self.size())
    }

    /// Claim the edge between `p1` and `p2` for the current player.
    ///
    /// Checks, in order: the game is not over, the edge is valid, the edge is
    /// unclaimed. A rejected move leaves the state untouched. Completing one or
    /// two boxes awards them to the mover, who then moves again; otherwise the
    /// turn passes.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn try_claim_edge(&mut self, p1: Point, p2: Point) -> Result<MoveOutcome, GameError> {
        if self.is_game_over() {
            tracing::trace!("rejected: game already over");
            return Err(GameError::GameAlreadyOver);
        }

        let edge = RuleValidator::new(&self.board)
            .check_edge(p1, p2)
            .map_err(|err| {
                tracing::trace!(%err, "rejected");
                err
            })?;

        self.board.insert_edge(edge);
        let player = self.current_player;
        tracing::debug!(%edge, "edge claimed");

        let completed = RuleValidator::new(&self.board).find_completed(edge);
        for &pos in &completed {
            if self.board.set_owner(pos, player) {
                self.scores.increment(player);
                tracing::debug!(box_x = pos.x, box_y = pos.y, %player, "box completed");
            }
        }

        if completed.is_empty() {
            self.current_player = player.opposite();
        }

        if self.board.claimed_boxes() == self.board.total_boxes() {
            let outcome = Outcome::from_scores(&self.scores);
            tracing::info!(
                player1 = self.scores.player1,
                player2 = self.scores.player2,
                %outcome,
                "game over"
            );
            self.outcome = Some(outcome);
        }

        Ok(MoveOutcome {
            edge,
            player,
            completed,
            scores: self.scores,
            current_player: self.current_player,
            game_over: self.is_game_over(),
            outcome: self.outcome,
        })
    }

    /// Claim an already-built edge
    pub fn claim(&mut self, edge: Edge) -> Result<MoveOutcome, GameError> {
        self.try_claim_edge(edge.a(), edge.b())
    }

    /// True iff all four edges of the box at `(bx, by)` are claimed
    pub fn is_box_complete(&self, bx: u8, by: u8) -> bool {
        self.board.is_box_complete(BoxPos::new(bx, by))
    }

    /// Owner of the box at `(bx, by)`, `None` while unclaimed or out of range
    pub fn owner(&self, bx: u8, by: u8) -> Option<Player> {
        self.board.owner(BoxPos::new(bx, by))
    }

    /// True if the edge between `p1` and `p2` is claimed
    pub fn has_edge(&self, p1: Point, p2: Point) -> bool {
        self.board.has_edge(&Edge::new(p1, p2))
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winner or tie once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn claimed_edge_count(&self) -> usize {
        self.board.edge_count()
    }

    pub fn claimed_box_count(&self) -> usize {
        self.board.claimed_boxes()
    }

    pub fn total_boxes(&self) -> usize {
        self.board.total_boxes()
    }

    pub fn total_edges(&self) -> usize {
        rules::edge_count(self.size())
    }

    /// Edges nobody has drawn yet, in row-major order (horizontal first)
    pub fn unclaimed_edges(&self) -> Vec<Edge> {
        rules::all_edges(self.size())
            .into_iter()
            .filter(|edge| !self.board.has_edge(edge))
            .collect()
    }

    /// Read-only view for renderers and UI controllers
    pub fn status(&self) -> Status<'_> {
        Status::new(self)
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }
}
