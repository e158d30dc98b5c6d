// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use dots_boxes_core::{BoxPos, GameState, Outcome, Player, Point};

use crate::config::CliConfig;

/// Render the game board as ASCII art
///
/// ```text
///     0   1   2
///  0  +---+   +
///     | 1 |
///  1  +---+   +
///
///  2  +   +   +
/// ```
pub fn render_board(game_state: &GameState) -> String {
    let size = game_state.size();
    let status = game_state.status();
    let mut output = String::new();

    // Column labels
    let mut header = String::from("    ");
    for col in 0..size {
        header.push_str(&format!("{:<4}", col));
    }
    push_line(&mut output, &header);

    for row in 0..size {
        // Dots and horizontal edges
        let mut line = format!("{:2}  ", row);
        for col in 0..size {
            line.push('+');
            if col + 1 < size {
                let drawn = status.has_edge(Point::new(col, row), Point::new(col + 1, row));
                line.push_str(if drawn { "---" } else { "   " });
            }
        }
        push_line(&mut output, &line);

        if row + 1 == size {
            break;
        }

        // Vertical edges and box owners
        let mut line = String::from("    ");
        for col in 0..size {
            let drawn = status.has_edge(Point::new(col, row), Point::new(col, row + 1));
            line.push(if drawn { '|' } else { ' ' });
            if col + 1 < size {
                line.push_str(&owner_cell(status.owner(BoxPos::new(col, row))));
            }
        }
        push_line(&mut output, &line);
    }

    output
}

/// Scores plus either the turn line or the final banner
pub fn render_scoreboard(game_state: &GameState, config: &CliConfig) -> String {
    let scores = game_state.scores();
    let mut output = format!(
        "{}: {}  |  {}: {}\n",
        config.player_name(Player::Player1),
        scores.player1,
        config.player_name(Player::Player2),
        scores.player2,
    );

    match game_state.outcome() {
        Some(outcome) => {
            output.push_str(&banner(outcome, config));
            output.push('\n');
        }
        None => {
            output.push_str(&format!(
                "{}'s turn\n",
                config.player_name(game_state.current_player())
            ));
        }
    }

    output
}

/// Winner announcement using the configured names
pub fn banner(outcome: Outcome, config: &CliConfig) -> String {
    match outcome {
        Outcome::Winner(player) => format!("*** {} wins! ***", config.player_name(player)),
        Outcome::Tie => "*** It's a tie! ***".to_string(),
    }
}

fn owner_cell(owner: Option<Player>) -> String {
    match owner {
        Some(player) => format!(" {} ", player.number()),
        None => "   ".to_string(),
    }
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line.trim_end());
    output.push('\n');
}
