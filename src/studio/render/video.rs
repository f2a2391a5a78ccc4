//! Video area rendering for the studio.
//!
//! There is no decoded picture; the area shows a title strip and the dubbed
//! caption centred in the frame in the selected caption style, brighter
//! while playing.

use std::io::Write;

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::studio::dubbing::CaptionStyle;
use crate::studio::state::StudioState;

/// Title shown in the top row of the video area.
pub const VIDEO_TITLE: &str = "AUREX Studio · Editor";

/// Calculate the column that centres `text` in a line of `term_width` columns.
pub fn centered_col(term_width: u16, text: &str) -> u16 {
    ((term_width as usize).saturating_sub(text.width()) / 2) as u16
}

/// Row of the caption within a video area of `video_rows` rows.
pub fn caption_row(video_rows: u16) -> u16 {
    video_rows / 2
}

/// SGR sequence for a caption in `style`; paused captions drop the bright colors.
pub fn caption_sgr(style: CaptionStyle, playing: bool) -> &'static str {
    match (style, playing) {
        (CaptionStyle::Modern, true) => "\x1b[1;97;45m",
        (CaptionStyle::Modern, false) => "\x1b[37;45m",
        (CaptionStyle::Neon, true) => "\x1b[1;3;4;94m",
        (CaptionStyle::Neon, false) => "\x1b[3;4;34m",
        (CaptionStyle::Bold, true) => "\x1b[1;97m",
        (CaptionStyle::Bold, false) => "\x1b[1;37m",
        (CaptionStyle::Elegant, true) => "\x1b[3;97m",
        (CaptionStyle::Elegant, false) => "\x1b[3;37m",
    }
}

/// Render the video area (rows `0..video_rows`).
pub fn render_video_area(
    out: &mut impl Write,
    state: &StudioState,
    video_rows: u16,
    playing: bool,
) -> Result<()> {
    const TITLE: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(state.term_cols as usize * 2);
    for row in 0..video_rows {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1)); // Move + clear line
    }

    if video_rows > 0 && !state.fullscreen {
        output.push_str(&format!("\x1b[1;2H{}{}{}", TITLE, VIDEO_TITLE, RESET));
    }

    if video_rows > 2 {
        let caption = state.caption_style.apply(state.language.caption());
        let col = centered_col(state.term_cols, &caption);
        let row = caption_row(video_rows);
        output.push_str(&format!(
            "\x1b[{};{}H{}{}{}",
            row + 1,
            col + 1,
            caption_sgr(state.caption_style, playing),
            caption,
            RESET
        ));
    }

    write!(out, "{}", output)?;
    Ok(())
}
