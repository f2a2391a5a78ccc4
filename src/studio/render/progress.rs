//! Progress bar rendering for the studio.
//!
//! Displays the simulated playhead and the `MM:SS / MM:SS` readout.

use std::io::Write;

use anyhow::Result;

use crate::studio::simulator::{PlaybackSimulator, PROGRESS_MAX};

/// Column where the progress bar starts (after one padding column).
pub const PROGRESS_BAR_START: u16 = 1;

/// Columns reserved for padding and the time readout (" 00:00 / 03:00 ").
const READOUT_RESERVED: usize = 16;

/// Format a duration in seconds to MM:SS format.
///
/// Fractional seconds are truncated, never rounded.
///
/// # Arguments
/// * `seconds` - Duration in seconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Width of the progress bar for a terminal of `term_cols` columns.
pub fn progress_bar_width(term_cols: u16) -> usize {
    (term_cols as usize).saturating_sub(READOUT_RESERVED)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `progress_percent` - Current progress (0-100, clamped)
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(bar_width: usize, progress_percent: f64) -> (Vec<char>, usize) {
    let progress = (progress_percent / PROGRESS_MAX).clamp(0.0, 1.0);
    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress bar with the time readout.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `sim` - Playback simulator to display
pub fn render_progress_bar(
    out: &mut impl Write,
    width: u16,
    row: u16,
    sim: &PlaybackSimulator,
) -> Result<()> {
    let bar_width = progress_bar_width(width);
    let (bar, filled) = build_progress_bar_chars(bar_width, sim.progress_percent());
    let time_display = format!(" {}", sim.readout());

    // ANSI color codes
    const INDIGO: &str = "\x1b[38;5;99m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1)); // Move cursor
    output.push_str("\x1b[48;5;236m "); // Dark gray background + padding

    output.push_str(INDIGO);
    for (i, &c) in bar.iter().enumerate() {
        if i == filled {
            output.push_str(WHITE);
            output.push(c);
            output.push_str(DARK_GREY);
        } else {
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    // Fill remaining width
    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    output.push_str(&" ".repeat(remaining));

    output.push_str("\x1b[0m"); // Reset
    write!(out, "{}", output)?;

    Ok(())
}
