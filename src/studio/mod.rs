//! AUREX studio: the simulated dubbing editor.
//!
//! Nothing here decodes media. The studio shows a clip that "plays" by
//! advancing a percentage on a timer, scaled against a nominal duration.
//!
//! # Architecture
//!
//! - `simulator`: `PlaybackSimulator`, the play/pause/seek/advance state machine
//! - `ticker`: scoped repeating timer (cancelled on drop)
//! - `transport`: owns the simulator and holds a ticker exactly while playing
//! - `state`: UI state and row layout of the terminal front end
//! - `input/`: keyboard and mouse handling
//! - `render/`: video area, timeline lanes, progress bar, status bar, help
//! - `native`: interactive terminal loop
//! - `headless`: timer-driven run without a terminal
//!
//! # Usage
//!
//! ```
//! use aurex::studio::PlaybackSimulator;
//!
//! let mut sim = PlaybackSimulator::new(180);
//! sim.seek(0.25);
//! sim.toggle();
//! sim.advance(10.0);
//! assert_eq!(sim.progress_percent(), 35.0);
//! assert_eq!(sim.readout(), "01:03 / 03:00");
//! ```

pub mod dubbing;
pub mod headless;
pub(crate) mod input;
mod native;
pub mod render;
pub mod simulator;
pub mod state;
pub mod ticker;
pub mod transport;

pub use dubbing::{CaptionStyle, Language};
pub use headless::{simulate, SimulateOptions, SimulationEnd, SimulationReport};
pub use native::{run_studio, StudioOutcome};
pub use simulator::{PlaybackSimulator, PlaybackSnapshot, TransportState};
pub use state::{InputResult, StudioLayout, StudioState};
pub use ticker::{Tick, Ticker};
pub use transport::{Transport, TransportTiming};
