// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI configuration: defaults, JSON file, command-line overrides

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use dots_boxes_core::input::BoardLayout;
use dots_boxes_core::{Player, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// Dots per side when nothing else is configured
pub const DEFAULT_BOARD_SIZE: u8 = 4;

/// Largest board the terminal renderer lays out sensibly
pub const MAX_BOARD_SIZE: u8 = 16;

/// Complete configuration for a terminal session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Dots per side for new games
    pub board_size: u8,
    /// Display names for Player 1 and Player 2
    pub player_names: [String; 2],
    /// Print the number of edges left after each move
    pub show_hints: bool,
    /// Print a JSON snapshot after each move
    pub json: bool,
    /// Canvas geometry used to map `click` coordinates to edges
    pub layout: BoardLayout,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            show_hints: false,
            json: false,
            layout: BoardLayout::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Reject values a session cannot start with
    pub fn validate(&self) -> Result<()> {
        validate_size(self.board_size)?;

        if self.layout.box_size <= 0.0 {
            return Err(anyhow!("layout.box_size must be positive"));
        }

        Ok(())
    }

    /// Display name of a player
    pub fn player_name(&self, player: Player) -> &str {
        let name = &self.player_names[usize::from(player.number() - 1)];
        if name.trim().is_empty() {
            match player {
                Player::Player1 => "Player 1",
                Player::Player2 => "Player 2",
            }
        } else {
            name
        }
    }
}

/// Check a requested board size against what the terminal host supports
pub fn validate_size(size: u8) -> Result<u8> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(anyhow!(
            "Invalid board size {}. Must be between {} and {}.",
            size,
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        ));
    }
    Ok(size)
}
