// Integration tests across the rules crate and the terminal host
// Run with: cargo test --test integration_tests

use std::io::Cursor;

use dots_boxes_cli::{CliConfig, Flow, Session};
use dots_boxes_core::input::BoardLayout;
use dots_boxes_core::{rules, GameState, Snapshot};

#[test]
fn test_full_game_by_pointer() {
    // Drive an entire 4x4 game through pixel clicks at every edge midpoint
    let layout = BoardLayout::default();
    let mut game = GameState::new(4).unwrap();

    for edge in rules::all_edges(4) {
        let (x, y) = layout.edge_midpoint(edge);
        let target = layout.hover_edge(&game, x, y).expect("unclaimed edge under pointer");
        assert_eq!(target, edge);
        game.claim(target).unwrap();
        assert_eq!(layout.hover_edge(&game, x, y), None);
    }

    assert!(game.is_game_over());
    assert_eq!(game.claimed_box_count(), 9);
    assert_eq!(usize::from(game.scores().total()), 9);
}

#[test]
fn test_session_click_commands_match_core() {
    let layout = BoardLayout::default();
    let config = CliConfig {
        board_size: 2,
        ..CliConfig::default()
    };
    let mut session = Session::new(config).unwrap();
    let mut output = Vec::new();

    for edge in rules::all_edges(2) {
        let (x, y) = layout.edge_midpoint(edge);
        let flow = session
            .handle_line(&format!("click {} {}", x, y), &mut output)
            .unwrap();
        assert_eq!(flow, Flow::Continue);
    }

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("*** Player 2 wins! ***"));
    assert!(session.game().is_game_over());
}

#[test]
fn test_json_snapshots_track_the_game() {
    let config = CliConfig {
        board_size: 3,
        json: true,
        ..CliConfig::default()
    };
    let mut session = Session::new(config).unwrap();
    let mut output = Vec::new();
    session
        .run(Cursor::new("0,0 1,0\n1,0 1,1\n"), &mut output)
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    let snapshots: Vec<Snapshot> = text
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // Initial board plus one per move
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[0].edges.len(), 0);
    assert_eq!(snapshots[1].edges.len(), 1);
    assert_eq!(snapshots[2].edges.len(), 2);
    assert_eq!(snapshots[2], session.game().status().snapshot());
}
