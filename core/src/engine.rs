// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move sources and a driver that feeds them into a game

use std::collections::VecDeque;

use crate::{GameError, GameState, MoveOutcome, Outcome, Point, Status};

/// Anything that can supply the next edge to draw: a person at a terminal,
/// a pointer on a canvas, a recorded script
pub trait MoveSource {
    /// Get the next move, or `None` when the source has nothing more to offer
    fn next_move(&mut self, status: &Status<'_>) -> Option<(Point, Point)>;
}

/// Plays back a fixed list of moves in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<(Point, Point)>,
}

impl ScriptedMoves {
    pub fn new<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = (Point, Point)>,
    {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _status: &Status<'_>) -> Option<(Point, Point)> {
        self.moves.pop_front()
    }
}

/// What happened while draining a move source
#[derive(Debug, Clone, Default)]
pub struct PlayReport {
    /// Accepted moves in order
    pub accepted: Vec<MoveOutcome>,
    /// Rejected moves with the reason
    pub rejected: Vec<((Point, Point), GameError)>,
    /// Set if the game finished
    pub outcome: Option<Outcome>,
}

/// Feed moves from `source` into `game` until the game ends or the source runs dry.
/// Rejected moves are recorded and skipped.
pub fn play_out(game: &mut GameState, source: &mut dyn MoveSource) -> PlayReport {
    let mut report = PlayReport::default();

    while !game.is_game_over() {
        let Some((p1, p2)) = source.next_move(&game.status()) else {
            break;
        };

        match game.try_claim_edge(p1, p2) {
            Ok(outcome) => report.accepted.push(outcome),
            Err(err) => {
                tracing::debug!(%p1, %p2, %err, "move rejected");
                report.rejected.push(((p1, p2), err));
            }
        }
    }

    report.outcome = game.outcome();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_scripted_single_box() {
        let mut game = GameState::new(2).unwrap();
        let mut source = ScriptedMoves::new([
            (Point::new(0, 0), Point::new(1, 0)),
            (Point::new(1, 0), Point::new(1, 1)),
            (Point::new(0, 1), Point::new(1, 1)),
            (Point::new(0, 0), Point::new(0, 1)),
        ]);

        let report = play_out(&mut game, &mut source);
        assert_eq!(report.accepted.len(), 4);
        assert!(report.rejected.is_empty());
        assert_eq!(report.outcome, Some(Outcome::Winner(Player::Player2)));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_rejections_are_recorded_and_skipped() {
        let mut game = GameState::new(3).unwrap();
        let mut source = ScriptedMoves::new([
            (Point::new(0, 0), Point::new(1, 1)),
            (Point::new(0, 0), Point::new(1, 0)),
            (Point::new(1, 0), Point::new(0, 0)),
        ]);

        let report = play_out(&mut game, &mut source);
        assert_eq!(report.accepted.len(), 1);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].1, GameError::InvalidEdge);
        assert_eq!(report.rejected[1].1, GameError::EdgeAlreadyClaimed);
        assert_eq!(report.outcome, None);
    }

    #[test]
    fn test_stops_at_game_over() {
        let mut game = GameState::new(2).unwrap();
        let mut moves: Vec<_> = crate::rules::all_edges(2)
            .into_iter()
            .map(|edge| edge.endpoints())
            .collect();
        moves.push((Point::new(0, 0), Point::new(1, 0)));
        let mut source = ScriptedMoves::new(moves);

        let report = play_out(&mut game, &mut source);
        assert_eq!(report.accepted.len(), 4);
        assert_eq!(source.remaining(), 1);
        assert!(game.is_game_over());
    }
}
