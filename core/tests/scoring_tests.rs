// SPDX-License-Identifier: MIT OR Apache-2.0

use dots_boxes_core::scoring::{calculate_final_score, scores_consistent};
use dots_boxes_core::{rules, Edge, GameState, Outcome, Player, Point, Scores};

fn edge(x1: u8, y1: u8, x2: u8, y2: u8) -> Edge {
    Edge::new(Point::new(x1, y1), Point::new(x2, y2))
}

fn play(game: &mut GameState, edges: &[Edge]) {
    for e in edges {
        game.claim(*e).unwrap();
        assert!(scores_consistent(game));
    }
}

#[test]
fn test_single_box_winner() {
    let mut game = GameState::new(2).unwrap();
    play(&mut game, &rules::all_edges(2));

    let summary = calculate_final_score(&game);
    assert_eq!(summary.total_boxes, 1);
    assert_eq!(summary.unclaimed, 0);
    assert_eq!(summary.outcome, Some(Outcome::Winner(Player::Player2)));
    assert_eq!(summary.margin, -1);
    assert!(summary.is_decided());
}

#[test]
fn test_sweep_of_all_four_boxes() {
    // 3x3 dots: ten quiet moves, then Player 1 closes two pairs in a row
    let mut game = GameState::new(3).unwrap();
    play(
        &mut game,
        &[
            edge(0, 0, 1, 0), // P1
            edge(1, 0, 2, 0), // P2
            edge(0, 0, 0, 1), // P1
            edge(2, 0, 2, 1), // P2
            edge(1, 0, 1, 1), // P1
            edge(0, 2, 1, 2), // P2
            edge(1, 2, 2, 2), // P1
            edge(0, 1, 0, 2), // P2
            edge(2, 1, 2, 2), // P1
            edge(1, 1, 1, 2), // P2
        ],
    );
    assert_eq!(game.current_player(), Player::Player1);
    assert_eq!(game.scores().total(), 0);

    let first = game.claim(edge(0, 1, 1, 1)).unwrap();
    assert_eq!(first.completed.len(), 2);
    assert_eq!(first.player, Player::Player1);
    assert_eq!(first.scores.player1, 2);
    assert_eq!(first.current_player, Player::Player1);
    assert!(!first.game_over);

    let last = game.claim(edge(1, 1, 2, 1)).unwrap();
    assert_eq!(last.completed.len(), 2);
    assert!(last.game_over);
    assert_eq!(last.scores.player1, 4);
    assert_eq!(last.outcome, Some(Outcome::Winner(Player::Player1)));

    let summary = calculate_final_score(&game);
    assert_eq!(summary.margin, 4);
    assert_eq!(summary.leader(), Some(Player::Player1));
}

#[test]
fn test_even_split_is_a_tie() {
    let mut game = GameState::new(3).unwrap();
    play(
        &mut game,
        &[
            edge(1, 2, 2, 2), // P1
            edge(0, 0, 1, 0), // P2
            edge(2, 0, 2, 1), // P1
            edge(1, 1, 1, 2), // P2
            edge(2, 1, 2, 2), // P1
            edge(1, 0, 2, 0), // P2
            edge(0, 2, 1, 2), // P1
            edge(1, 0, 1, 1), // P2
        ],
    );
    assert_eq!(game.current_player(), Player::Player1);

    // Player 1 closes both right-hand boxes, then must move again
    let r = game.claim(edge(1, 1, 2, 1)).unwrap();
    assert_eq!(r.completed.len(), 2);
    assert_eq!(r.current_player, Player::Player1);

    // A quiet move hands the turn over
    let r = game.claim(edge(0, 0, 0, 1)).unwrap();
    assert!(r.completed.is_empty());
    assert_eq!(r.current_player, Player::Player2);

    // Player 2 takes the last two boxes one at a time
    let r = game.claim(edge(0, 1, 1, 1)).unwrap();
    assert_eq!(r.completed.len(), 1);
    assert_eq!(game.owner(0, 0), Some(Player::Player2));
    assert_eq!(r.current_player, Player::Player2);

    let r = game.claim(edge(0, 1, 0, 2)).unwrap();
    assert_eq!(r.completed.len(), 1);
    assert!(r.game_over);
    assert_eq!(r.outcome, Some(Outcome::Tie));

    let summary = calculate_final_score(&game);
    assert_eq!(summary.scores, Scores { player1: 2, player2: 2 });
    assert_eq!(summary.margin, 0);
    assert_eq!(summary.leader(), None);
    assert!(!summary.is_decided());
}

#[test]
fn test_split_won_by_second_player() {
    let mut game = GameState::new(3).unwrap();
    play(
        &mut game,
        &[
            edge(0, 0, 1, 0),
            edge(1, 0, 2, 0),
            edge(0, 0, 0, 1),
            edge(0, 1, 1, 1),
            edge(2, 0, 2, 1),
            edge(0, 2, 1, 2),
            edge(1, 2, 2, 2),
            edge(0, 1, 0, 2),
            edge(2, 1, 2, 2),
        ],
    );
    assert_eq!(game.current_player(), Player::Player2);

    let r = game.claim(edge(1, 0, 1, 1)).unwrap();
    assert_eq!(r.completed.len(), 1);
    assert_eq!(game.owner(0, 0), Some(Player::Player2));

    let r = game.claim(edge(1, 1, 1, 2)).unwrap();
    assert_eq!(r.completed.len(), 1);
    assert_eq!(game.owner(0, 1), Some(Player::Player2));

    let r = game.claim(edge(1, 1, 2, 1)).unwrap();
    assert_eq!(r.completed.len(), 2);
    assert_eq!(r.outcome, Some(Outcome::Winner(Player::Player2)));
    assert_eq!(game.scores().player2, 4);
}

#[test]
fn test_outcome_display() {
    let scores = Scores {
        player1: 2,
        player2: 2,
    };
    assert_eq!(Outcome::from_scores(&scores), Outcome::Tie);
    assert_eq!(Outcome::Tie.winner(), None);
    assert_eq!(Outcome::Tie.to_string(), "It's a tie!");
    assert_eq!(
        Outcome::Winner(Player::Player1).to_string(),
        "Player 1 wins!"
    );
}
