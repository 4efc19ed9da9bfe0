//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! scrivano binary.

mod commands;
mod generate;

pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
