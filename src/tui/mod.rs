//! Terminal styling shared by the CLI commands.
//!
//! The studio itself draws with raw ANSI sequences; this module only covers
//! coloured CLI output.

pub mod theme;

pub use theme::{current_theme, Theme};
