//! Rendering components for the studio.
//!
//! This module contains all the UI rendering functions for the studio,
//! including the video area, timeline lanes, progress bar, status bar and
//! help overlay.

mod help;
mod progress;
mod status;
mod timeline;
mod video;

use std::io::Write;

use anyhow::Result;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{
    build_progress_bar_chars, format_duration, progress_bar_width, render_progress_bar,
    PROGRESS_BAR_START,
};
pub use status::{render_separator_line, render_status_bar, transport_glyph};
pub use timeline::{
    build_lane_chars, lane_track_width, playhead_column, render_timeline, TimelineLane,
    LANE_TRACK_START, TIMELINE_LANES,
};
pub use video::{caption_row, caption_sgr, centered_col, render_video_area, VIDEO_TITLE};

use crate::studio::simulator::PlaybackSimulator;
use crate::studio::state::StudioState;

/// Render a full studio frame.
///
/// Draws the help overlay instead of the studio while it is visible.
pub fn render_frame(out: &mut impl Write, sim: &PlaybackSimulator, state: &StudioState) -> Result<()> {
    if state.show_help {
        render_help(out, state.term_cols, state.term_rows)?;
        out.flush()?;
        return Ok(());
    }

    let layout = state.layout();
    let width = state.term_cols;

    render_video_area(out, state, layout.video_rows, sim.is_playing())?;
    if let Some(row) = layout.timeline_row {
        render_timeline(out, width, row, sim.progress_percent())?;
    }
    render_separator_line(out, width, layout.separator_row)?;
    render_progress_bar(out, width, layout.progress_row, sim)?;
    render_status_bar(out, width, layout.status_row, sim, state)?;

    out.flush()?;
    Ok(())
}
