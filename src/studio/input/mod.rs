//! Input handling for the studio.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use anyhow::Result;
use crossterm::event::Event;

use crate::studio::state::{InputResult, StudioState};
use crate::studio::transport::Transport;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `state` - Studio UI state
/// * `transport` - Transport to drive
/// * `jump_percent` - Percentage points moved by the jump keys
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event(
    event: Event,
    state: &mut StudioState,
    transport: &mut Transport,
    jump_percent: f64,
) -> Result<InputResult> {
    match event {
        Event::Key(key) => handle_key_event(key, state, transport, jump_percent),
        Event::Mouse(mouse) => Ok(handle_mouse_event(mouse, state, transport)),
        Event::Resize(new_cols, new_rows) => {
            state.handle_resize(new_cols, new_rows);
            Ok(InputResult::Continue)
        }
        _ => Ok(InputResult::Continue), // Ignore focus events, paste, etc.
    }
}
