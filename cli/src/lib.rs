// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal host for Dots and Boxes: rendering, command parsing, configuration
//! and the interactive session loop.

#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use config::CliConfig;
pub use session::{Flow, Session};
