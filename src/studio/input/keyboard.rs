//! Keyboard input handling for the studio.
//!
//! Maps shortcuts to transport operations and UI toggles.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::studio::state::{InputResult, StudioState};
use crate::studio::transport::Transport;

/// Handle a keyboard event.
///
/// # Arguments
/// * `key` - The key event
/// * `state` - Studio UI state
/// * `transport` - Transport to drive
/// * `jump_percent` - Percentage points moved by the jump keys
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut StudioState,
    transport: &mut Transport,
    jump_percent: f64,
) -> Result<InputResult> {
    // Some terminals report releases too; only act on presses
    if key.kind == KeyEventKind::Release {
        return Ok(InputResult::Continue);
    }

    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return Ok(InputResult::Continue);
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return Ok(InputResult::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(InputResult::Quit)
        }

        // === View ===
        KeyCode::Char('?') => state.toggle_help(),
        KeyCode::Char('f') => state.toggle_fullscreen(),
        KeyCode::Char('l') => state.cycle_language(),
        KeyCode::Char('t') => state.cycle_caption_style(),

        // === Transport ===
        KeyCode::Char(' ') => {
            transport.toggle()?;
            state.needs_render = true;
        }
        KeyCode::Home => {
            transport.seek(0.0);
            state.needs_render = true;
        }
        KeyCode::End => {
            transport.seek(1.0);
            state.needs_render = true;
        }
        KeyCode::Left | KeyCode::Char(',') | KeyCode::Char('<') => {
            transport.jump(-jump_percent);
            state.needs_render = true;
        }
        KeyCode::Right | KeyCode::Char('.') | KeyCode::Char('>') => {
            transport.jump(jump_percent);
            state.needs_render = true;
        }

        _ => {}
    }

    Ok(InputResult::Continue)
}
