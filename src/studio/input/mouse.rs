//! Mouse input handling for the studio.
//!
//! Clicking or dragging on the progress bar or on a timeline lane seeks to
//! the matching fraction of the clip.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::studio::render::{
    lane_track_width, progress_bar_width, LANE_TRACK_START, PROGRESS_BAR_START, TIMELINE_LANES,
};
use crate::studio::state::{InputResult, StudioState};
use crate::studio::transport::Transport;

/// Fraction of a track of `track_width` columns starting at `track_start`
/// that `column` points at.
///
/// Columns left of the track map to 0.0 and columns past its end to 1.0, so
/// a drag that overshoots either end still reaches it. `None` only when the
/// track has no width.
pub fn track_fraction(column: u16, track_start: u16, track_width: usize) -> Option<f64> {
    if track_width == 0 {
        return None;
    }
    let offset = (column.saturating_sub(track_start) as usize).min(track_width);
    Some(offset as f64 / track_width as f64)
}

/// Seek fraction for a pointer at (`column`, `row`), if it is over a scrub target.
pub fn seek_fraction_at(state: &StudioState, column: u16, row: u16) -> Option<f64> {
    let layout = state.layout();

    if row == layout.progress_row {
        return track_fraction(column, PROGRESS_BAR_START, progress_bar_width(state.term_cols));
    }

    if let Some(first_lane) = layout.timeline_row {
        let lanes = TIMELINE_LANES.len() as u16;
        if row >= first_lane && row < first_lane + lanes {
            return track_fraction(column, LANE_TRACK_START, lane_track_width(state.term_cols));
        }
    }

    None
}

/// Handle a mouse event.
///
/// Left press and left drag over the progress bar or a lane seek there.
/// Play state is left as it was.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &mut StudioState,
    transport: &mut Transport,
) -> InputResult {
    if state.show_help {
        return InputResult::Continue;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(fraction) = seek_fraction_at(state, mouse.column, mouse.row) {
                transport.seek(fraction);
                state.needs_render = true;
            }
        }
        _ => {}
    }

    InputResult::Continue
}
