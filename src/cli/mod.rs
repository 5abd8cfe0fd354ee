//! Command-line interface for bugforge.
//!
//! Provides the `debug` command for running a debugging request from the
//! terminal.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli, Commands};
