//! Subcommand handlers for the `aurex` binary.

pub mod completions;
pub mod config;
pub mod simulate;
pub mod studio;
