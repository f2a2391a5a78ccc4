//! AUREX Studio
//!
//! Terminal mockup of an AI video-dubbing editor. Playback is simulated:
//! a progress percentage advanced by a timer over a nominal clip duration.
//!
//! - [`studio`]: the simulated transport, its timer, and the terminal studio
//! - [`config`]: TOML configuration
//! - [`tui`]: colored CLI output

pub mod config;
pub mod studio;
pub mod tui;

pub use config::{Config, ConfigError};
pub use studio::{PlaybackSimulator, Transport};
