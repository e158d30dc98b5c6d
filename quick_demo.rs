//! Quick Dots and Boxes Demo - plays a scripted game on a 3x3 board
//!
//! Prints every move, the board after each one, and a JSON score summary at
//! the end. Set `RUST_LOG=debug` to see the rule engine's logging on stderr.

use dots_boxes_cli::render::{render_board, render_scoreboard};
use dots_boxes_cli::CliConfig;
use dots_boxes_core::engine::{play_out, ScriptedMoves};
use dots_boxes_core::scoring::calculate_final_score;
use dots_boxes_core::{GameState, Point};
use tracing_subscriber::EnvFilter;

fn p(x: u8, y: u8) -> Point {
    Point::new(x, y)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig {
        board_size: 3,
        ..CliConfig::default()
    };
    let mut game = GameState::new(config.board_size)?;

    // The second move is a deliberate mistake and gets rejected
    let mut script = ScriptedMoves::new([
        (p(1, 2), p(2, 2)),
        (p(0, 0), p(1, 1)),
        (p(0, 0), p(1, 0)),
        (p(2, 0), p(2, 1)),
        (p(1, 1), p(1, 2)),
        (p(2, 1), p(2, 2)),
        (p(1, 0), p(2, 0)),
        (p(0, 2), p(1, 2)),
        (p(1, 0), p(1, 1)),
        (p(1, 1), p(2, 1)),
        (p(0, 0), p(0, 1)),
        (p(0, 1), p(1, 1)),
        (p(0, 1), p(0, 2)),
    ]);

    println!("Dots and Boxes demo");
    println!("===================\n");

    let report = play_out(&mut game, &mut script);

    for ((p1, p2), err) in &report.rejected {
        println!("Rejected {}-{}: {}", p1, p2, err);
    }

    for (turn, outcome) in report.accepted.iter().enumerate() {
        print!("{:2}. {} draws {}", turn + 1, outcome.player, outcome.edge);
        if !outcome.completed.is_empty() {
            print!(" and completes {} box(es)", outcome.completed.len());
        }
        println!();
    }

    println!();
    print!("{}", render_board(&game));
    println!();
    print!("{}", render_scoreboard(&game, &config));

    let summary = calculate_final_score(&game);
    println!("\n{}", serde_json::to_string_pretty(&summary)?);

    tracing::info!(moves = report.accepted.len(), rejected = report.rejected.len(), "demo finished");
    Ok(())
}
