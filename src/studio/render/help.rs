//! Help overlay rendering for the studio.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║           AUREX Studio Controls           ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space      Play / Pause                ║",
    "  ║    <-/->      Jump back / forward         ║",
    "  ║    ,/.        Jump back / forward         ║",
    "  ║    Home/End   Go to start / end           ║",
    "  ║    Click      Seek on progress or lanes   ║",
    "  ║                                           ║",
    "  ║  Dubbing                                  ║",
    "  ║    l          Next caption language       ║",
    "  ║    t          Next caption style          ║",
    "  ║                                           ║",
    "  ║  View                                     ║",
    "  ║    f          Toggle fullscreen           ║",
    "  ║    ?          Show this help              ║",
    "  ║    q/Esc      Quit studio                 ║",
    "  ║                                           ║",
    "  ║         Press any key to close            ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 47;

/// Calculate the starting row for centering the help box.
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Render the help overlay.
///
/// Clears the screen and draws a centered help box with all shortcuts.
pub fn render_help(out: &mut impl Write, width: u16, height: u16) -> Result<()> {
    let start_row = calc_help_start_row(height);
    let col = calc_help_start_col(width);

    queue!(out, Clear(ClearType::All))?;

    for (i, line) in HELP_LINES.iter().enumerate() {
        let row = start_row + i as u16;
        queue!(
            out,
            MoveTo(col, row),
            SetForegroundColor(Color::Magenta),
            Print(line),
            ResetColor,
        )?;
    }

    Ok(())
}
