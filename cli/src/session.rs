// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive session: owns the current game and turns typed commands into moves

use std::io::{BufRead, Write};

use anyhow::Result;
use dots_boxes_core::{GameEvent, GameState, MoveOutcome, Point};
use tracing::{debug, info, warn};

use crate::command::{parse_command, Command, HELP};
use crate::config::{validate_size, CliConfig};
use crate::render;

/// Whether the session loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A terminal session. Holds exactly one game at a time and replaces it
/// wholesale on restart or size change.
pub struct Session {
    config: CliConfig,
    game: GameState,
}

impl Session {
    /// Create a session with a fresh game at the configured size
    pub fn new(config: CliConfig) -> Result<Self> {
        config.validate()?;
        let game = GameState::new(config.board_size)?;
        Ok(Self { config, game })
    }

    /// The game currently being played
    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Read commands until EOF or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "Dots and Boxes. Type 'help' for commands.")?;
        self.print_game(&mut output)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if self.handle_line(&line, &mut output)? == Flow::Quit {
                break;
            }
            output.flush()?;
        }

        info!("session ended");
        Ok(())
    }

    /// Process one line of input, writing any response to `output`
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "command");

        match command {
            Command::Claim(p1, p2) => self.submit(p1, p2, output)?,
            Command::Click(x, y) => {
                let layout = self.config.layout;
                match layout.hover_edge(&self.game, x, y) {
                    Some(edge) => self.submit(edge.a(), edge.b(), output)?,
                    None => writeln!(output, "Nothing to draw at ({}, {}).", x, y)?,
                }
            }
            Command::Restart => {
                let size = self.game.size();
                self.new_game(size, output)?;
            }
            Command::Size(size) => match validate_size(size) {
                Ok(size) => self.new_game(size, output)?,
                Err(err) => writeln!(output, "{}", err)?,
            },
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {
                writeln!(output, "Bye.")?;
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Forward a move to the game and report what happened
    fn submit<W: Write>(&mut self, p1: Point, p2: Point, output: &mut W) -> Result<()> {
        match self.game.try_claim_edge(p1, p2) {
            Ok(outcome) => {
                self.report(&outcome, output)?;
                self.print_game(output)?;
                if outcome.game_over {
                    writeln!(output, "Type 'restart' to play again or 'quit' to exit.")?;
                }
            }
            Err(err) => {
                warn!(%p1, %p2, %err, "move rejected");
                writeln!(output, "Invalid move: {}", err)?;
            }
        }
        Ok(())
    }

    fn report<W: Write>(&self, outcome: &MoveOutcome, output: &mut W) -> Result<()> {
        for event in outcome.events() {
            match event {
                GameEvent::EdgeClaimed { edge, by } => {
                    writeln!(output, "{} drew {}", self.config.player_name(by), edge)?;
                }
                GameEvent::BoxCompleted { pos, by } => {
                    writeln!(
                        output,
                        "{} completed box ({}, {})",
                        self.config.player_name(by),
                        pos.x,
                        pos.y
                    )?;
                }
                GameEvent::TurnPassed { .. } | GameEvent::GameFinished { .. } => {
                    // Shown by the scoreboard
                }
            }
        }
        Ok(())
    }

    fn new_game<W: Write>(&mut self, size: u8, output: &mut W) -> Result<()> {
        self.game = GameState::new(size)?;
        info!(size, "new game");
        writeln!(output, "New game on a {}x{} board.", size, size)?;
        self.print_game(output)
    }

    fn print_game<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output)?;
        write!(output, "{}", render::render_board(&self.game))?;
        writeln!(output)?;
        write!(output, "{}", render::render_scoreboard(&self.game, &self.config))?;

        if self.config.show_hints && !self.game.is_game_over() {
            let left = self.game.total_edges() - self.game.claimed_edge_count();
            writeln!(output, "{} edges left", left)?;
        }

        if self.config.json {
            writeln!(output, "{}", self.game.status().snapshot().to_json()?)?;
        }

        Ok(())
    }
}
