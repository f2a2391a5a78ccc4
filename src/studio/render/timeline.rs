//! Timeline lanes rendering for the studio.
//!
//! Draws the fixed Video / Dubbing / Captions lanes with a shared playhead
//! column that follows the transport progress.

use std::io::Write;

use anyhow::Result;

use crate::studio::simulator::PROGRESS_MAX;

/// One lane of the mock timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineLane {
    pub label: &'static str,
    /// Fraction of the track covered by the lane's clip (0.0-1.0)
    pub coverage: f64,
    /// Audio lanes draw a waveform instead of a solid clip
    pub is_audio: bool,
}

/// Lanes shown under the video area, top to bottom.
pub const TIMELINE_LANES: &[TimelineLane] = &[
    TimelineLane {
        label: "Video v1",
        coverage: 0.70,
        is_audio: false,
    },
    TimelineLane {
        label: "Dubbing",
        coverage: 0.90,
        is_audio: true,
    },
    TimelineLane {
        label: "Captions",
        coverage: 0.50,
        is_audio: false,
    },
];

/// Column where lane tracks start (after the label gutter).
pub const LANE_TRACK_START: u16 = 12;

/// Waveform glyphs cycled across audio clips.
const WAVEFORM: &[char] = &['▂', '▅', '▃', '▇', '▄', '▆', '▂', '▇'];

/// Width of a lane track for a terminal of `term_cols` columns.
pub fn lane_track_width(term_cols: u16) -> usize {
    (term_cols as usize).saturating_sub(LANE_TRACK_START as usize + 1)
}

/// Build the characters of a single lane track.
///
/// # Arguments
/// * `track_width` - Width of the track in characters
/// * `lane` - Lane to draw
/// * `progress_percent` - Current progress (0-100), drawn as the playhead
pub fn build_lane_chars(track_width: usize, lane: &TimelineLane, progress_percent: f64) -> Vec<char> {
    let clip_len = (track_width as f64 * lane.coverage.clamp(0.0, 1.0)) as usize;

    let mut track: Vec<char> = (0..track_width)
        .map(|i| {
            if i >= clip_len {
                ' '
            } else if lane.is_audio {
                WAVEFORM[i % WAVEFORM.len()]
            } else {
                '█'
            }
        })
        .collect();

    if let Some(col) = playhead_column(track_width, progress_percent) {
        track[col] = '│';
    }

    track
}

/// Column of the playhead within a track, if the track has any width.
pub fn playhead_column(track_width: usize, progress_percent: f64) -> Option<usize> {
    if track_width == 0 {
        return None;
    }
    let progress = (progress_percent / PROGRESS_MAX).clamp(0.0, 1.0);
    Some(((track_width as f64 * progress) as usize).min(track_width - 1))
}

/// Render all timeline lanes starting at `first_row`.
pub fn render_timeline(
    out: &mut impl Write,
    width: u16,
    first_row: u16,
    progress_percent: f64,
) -> Result<()> {
    const LABEL: &str = "\x1b[90m";
    const CLIP: &str = "\x1b[38;5;189m";
    const AUDIO: &str = "\x1b[38;5;99m";
    const RESET: &str = "\x1b[0m";

    let track_width = lane_track_width(width);

    for (i, lane) in TIMELINE_LANES.iter().enumerate() {
        let row = first_row + i as u16;
        let track = build_lane_chars(track_width, lane, progress_percent);

        let mut output = String::with_capacity(width as usize * 4);
        output.push_str(&format!("\x1b[{};1H", row + 1));
        output.push_str(LABEL);
        output.push_str(&format!(
            " {:<width$}",
            lane.label,
            width = LANE_TRACK_START as usize - 1
        ));
        output.push_str(if lane.is_audio { AUDIO } else { CLIP });
        output.extend(track.iter());
        output.push_str(RESET);
        output.push_str("\x1b[K"); // Clear to end of line
        write!(out, "{}", output)?;
    }

    Ok(())
}
