// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dots and Boxes CLI - play a two-player game in the terminal
//!
//! Both players share one keyboard. The board and scores go to stdout,
//! logs go to stderr.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dots_boxes_cli::config::{validate_size, CliConfig};
use dots_boxes_cli::Session;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "dots-boxes",
    about = "Two-player Dots and Boxes in the terminal",
    version
)]
struct Args {
    /// Dots per side (2-16)
    #[clap(short, long)]
    size: Option<u8>,

    /// JSON config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Name shown for Player 1
    #[clap(long)]
    player1: Option<String>,

    /// Name shown for Player 2
    #[clap(long)]
    player2: Option<String>,

    /// Print the number of edges left after each move
    #[clap(long)]
    hints: bool,

    /// Print a JSON snapshot of the game after each move
    #[clap(long)]
    json: bool,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    fn into_config(self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load_from_file(path)?,
            None => CliConfig::default(),
        };

        if let Some(size) = self.size {
            config.board_size = validate_size(size)?;
        }
        if let Some(name) = self.player1 {
            config.player_names[0] = name;
        }
        if let Some(name) = self.player2 {
            config.player_names[1] = name;
        }
        config.show_hints |= self.hints;
        config.json |= self.json;

        Ok(config)
    }
}

/// Logs go to stderr so they never interleave with the board on stdout
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = args.into_config()?;
    tracing::debug!(?config, "starting session");

    let mut session = Session::new(config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "dots-boxes",
            "--size",
            "6",
            "--player2",
            "Grace",
            "--hints",
        ]);
        let config = args.into_config().unwrap();

        assert_eq!(config.board_size, 6);
        assert_eq!(config.player_names[0], "Player 1");
        assert_eq!(config.player_names[1], "Grace");
        assert!(config.show_hints);
        assert!(!config.json);
    }

    #[test]
    fn test_out_of_range_size_flag() {
        let args = Args::parse_from(["dots-boxes", "--size", "20"]);
        assert!(args.into_config().is_err());
    }
}
