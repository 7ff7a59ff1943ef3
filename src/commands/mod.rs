//! Command implementations for fancy-writer.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod interpolate;
mod render;

use crate::cli::Command;
use fancy_writer::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Interpolate(args) => interpolate::cmd_interpolate(args),
    }
}
