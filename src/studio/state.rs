//! Studio UI state.
//!
//! Holds everything the terminal front end needs besides the transport:
//! terminal geometry, overlays, the dub language and the render flag.
//! Also computes the row layout shared by rendering and mouse handling.

use crate::studio::dubbing::{CaptionStyle, Language};
use crate::studio::render::TIMELINE_LANES;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the studio
    Quit,
}

/// Row positions of every studio region for the current terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudioLayout {
    /// Number of rows of the video area (starting at row 0)
    pub video_rows: u16,
    /// First timeline lane row, `None` when lanes are hidden
    pub timeline_row: Option<u16>,
    pub separator_row: u16,
    pub progress_row: u16,
    pub status_row: u16,
}

/// UI state of the studio front end.
#[derive(Debug)]
pub struct StudioState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Fullscreen hides the timeline lanes and gives the rows to the video
    pub fullscreen: bool,
    /// Language of the dubbed caption
    pub language: Language,
    /// Text style of the caption overlay
    pub caption_style: CaptionStyle,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl StudioState {
    /// Number of chrome lines at the bottom (separator + progress + status bar)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16, language: Language) -> Self {
        Self {
            term_cols,
            term_rows,
            show_help: false,
            fullscreen: false,
            language,
            caption_style: CaptionStyle::default(),
            needs_render: true,
        }
    }

    /// Compute the row layout for the current size and mode.
    ///
    /// Lanes are hidden in fullscreen and when the terminal is too short to
    /// keep at least one video row above them.
    pub fn layout(&self) -> StudioLayout {
        let status_row = self.term_rows.saturating_sub(1);
        let progress_row = self.term_rows.saturating_sub(2);
        let separator_row = self.term_rows.saturating_sub(3);

        let above_chrome = self.term_rows.saturating_sub(Self::STATUS_LINES);
        let lane_rows = TIMELINE_LANES.len() as u16;

        let (video_rows, timeline_row) = if !self.fullscreen && above_chrome > lane_rows {
            let first_lane = above_chrome - lane_rows;
            (first_lane, Some(first_lane))
        } else {
            (above_chrome, None)
        };

        StudioLayout {
            video_rows,
            timeline_row,
            separator_row,
            progress_row,
            status_row,
        }
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Toggle fullscreen video.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.needs_render = true;
    }

    /// Switch the caption to the next dub language.
    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
        tracing::debug!(language = %self.language, "dub language changed");
        self.needs_render = true;
    }

    pub fn cycle_caption_style(&mut self) {
        self.caption_style = self.caption_style.next();
        tracing::debug!(style = %self.caption_style, "caption style changed");
        self.needs_render = true;
    }
}
