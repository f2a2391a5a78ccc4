//! Status bar rendering for the studio.
//!
//! Displays transport state, the dub language and caption style, mode indicators and
//! keyboard shortcuts.

use std::io::Write;

use anyhow::Result;

use crate::studio::simulator::PlaybackSimulator;
use crate::studio::state::StudioState;

/// Glyph for the current transport state: play while paused, pause while playing.
pub fn transport_glyph(playing: bool) -> &'static str {
    if playing {
        "⏸"
    } else {
        "▶"
    }
}

/// Render a separator line.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
pub fn render_separator_line(out: &mut impl Write, width: u16, row: u16) -> Result<()> {
    // Build line as string to minimize syscalls
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1)); // Move + dark gray
    output.push_str(&"─".repeat(width as usize));
    output.push_str("\x1b[0m"); // Reset
    write!(out, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `sim` - Transport to describe
/// * `state` - Studio UI state (language, caption style, fullscreen)
pub fn render_status_bar(
    out: &mut impl Write,
    width: u16,
    row: u16,
    sim: &PlaybackSimulator,
    state: &StudioState,
) -> Result<()> {
    // ANSI color codes
    const WHITE: &str = "\x1b[97m";
    const MAGENTA: &str = "\x1b[35m";
    const DARK_GREY: &str = "\x1b[90m";
    const YELLOW: &str = "\x1b[33m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0; // Track visible width manually

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    output.push_str(transport_glyph(sim.is_playing()));
    output.push_str("  ");
    visible_len += 5; // padding + icon (2) + 2 spaces

    output.push_str(YELLOW);
    let lang = format!("{} ", state.language.code());
    visible_len += lang.len();
    output.push_str(&lang);

    output.push_str(WHITE);
    let style = format!("{} ", state.caption_style.name());
    visible_len += style.len();
    output.push_str(&style);

    if state.fullscreen {
        output.push_str(MAGENTA);
        output.push_str("[FS] ");
        visible_len += 5;
    }

    let hints: [(&str, &str); 7] = [
        ("space", if sim.is_playing() { ":pause " } else { ":play " }),
        ("</>", ":jump "),
        ("l", ":lang "),
        ("t", ":style "),
        ("f", ":full "),
        ("?", ":hlp "),
        ("q", ":quit"),
    ];

    output.push_str(DARK_GREY);
    output.push_str("│ ");
    visible_len += 2;
    for (key, action) in hints {
        output.push_str(CYAN);
        output.push_str(key);
        output.push_str(DARK_GREY);
        output.push_str(action);
        visible_len += key.len() + action.len();
    }

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    output.push_str(&" ".repeat(padding));

    output.push_str(RESET);
    write!(out, "{}", output)?;

    Ok(())
}
