// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of the text commands typed at the prompt

use anyhow::{anyhow, Result};
use dots_boxes_core::Point;

/// One line of player input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Draw the edge between two dots
    Claim(Point, Point),
    /// Draw the edge nearest to a pointer position in canvas pixels
    Click(f32, f32),
    /// Throw the game away and start over at the same size
    Restart,
    /// Start over with a different number of dots per side
    Size(u8),
    /// Print the command list
    Help,
    /// Leave the session
    Quit,
}

pub const HELP: &str = "\
Commands:
  x1,y1 x2,y2   draw the edge between two neighbouring dots (e.g. '0,0 1,0')
  click X Y     draw the edge nearest to pixel (X, Y) on the canvas
  restart       start a new game on the same board
  size N        start a new game with N dots per side
  help          show this list
  quit          leave";

/// Parse a command from a line of input
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim().to_lowercase();
    let mut words = input.split_whitespace();

    match words.next() {
        None => Err(anyhow!("Empty input. Type 'help' for commands.")),
        Some("restart") | Some("new") => Ok(Command::Restart),
        Some("help") | Some("?") => Ok(Command::Help),
        Some("quit") | Some("exit") => Ok(Command::Quit),
        Some("size") => {
            let size = words
                .next()
                .and_then(|word| word.parse::<u8>().ok())
                .ok_or_else(|| anyhow!("Usage: size N"))?;
            Ok(Command::Size(size))
        }
        Some("click") => {
            let coords: Vec<f32> = words.filter_map(|word| word.parse().ok()).collect();
            match coords.as_slice() {
                [x, y] => Ok(Command::Click(*x, *y)),
                _ => Err(anyhow!("Usage: click X Y")),
            }
        }
        Some(_) => parse_edge(&input),
    }
}

/// Parse `x1,y1 x2,y2`, `x1 y1 x2 y2` or `x1,y1-x2,y2`
fn parse_edge(input: &str) -> Result<Command> {
    let numbers = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| anyhow!("Invalid move format. Examples: '0,0 1,0', '2 1 2 2'."))?;

    match numbers.as_slice() {
        [x1, y1, x2, y2] => Ok(Command::Claim(Point::new(*x1, *y1), Point::new(*x2, *y2))),
        _ => Err(anyhow!("A move needs exactly four numbers: x1,y1 x2,y2")),
    }
}
