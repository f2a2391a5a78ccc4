//! Terminal front end of the studio.
//!
//! Runs the event loop on the calling thread: queued ticks are applied to
//! the transport, then terminal events are polled with a short timeout, and
//! the frame is redrawn whenever something changed.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::Config;
use crate::studio::input::handle_event;
use crate::studio::render::render_frame;
use crate::studio::state::{InputResult, StudioState};
use crate::studio::transport::Transport;

/// How long to wait for terminal input before checking for ticks again.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Summary of a finished studio session.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioOutcome {
    /// Progress when the user left
    pub progress_percent: f64,
    /// `MM:SS` position when the user left
    pub position: String,
}

/// Puts the terminal into studio mode and restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
            .context("Failed to set up terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive studio until the user quits.
pub fn run_studio(config: &Config) -> Result<StudioOutcome> {
    config.studio.validate()?;

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut state = StudioState::new(cols, rows, config.dubbing.default_language);
    state.caption_style = config.dubbing.caption_style;
    let mut transport = Transport::from_config(&config.studio);
    let jump_percent = config.studio.jump_percent;

    tracing::info!(
        duration = config.studio.nominal_duration_secs,
        language = %state.language,
        caption_style = %state.caption_style,
        "opening studio"
    );

    let guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    loop {
        if transport.drain_ticks() {
            state.needs_render = true;
        }

        if event::poll(EVENT_POLL_TIMEOUT)? {
            let ev = event::read()?;
            if handle_event(ev, &mut state, &mut transport, jump_percent)? == InputResult::Quit {
                break;
            }
        }

        if state.needs_render {
            render_frame(&mut stdout, transport.simulator(), &state)?;
            state.needs_render = false;
        }
    }

    // Stop the timer before handing the terminal back
    transport.pause()?;
    stdout.flush()?;
    drop(guard);

    let sim = transport.simulator();
    Ok(StudioOutcome {
        progress_percent: sim.progress_percent(),
        position: sim.formatted_time(),
    })
}
