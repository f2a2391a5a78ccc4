//! Simulated playback transport.
//!
//! The studio never decodes media. "Playback" is a percentage that a timer
//! nudges forward, scaled against a fixed nominal duration for display.

use serde::Serialize;

use crate::studio::render::format_duration;

/// Upper bound of the progress scale.
pub const PROGRESS_MAX: f64 = 100.0;

/// Default nominal duration of the simulated clip, in seconds.
pub const DEFAULT_NOMINAL_DURATION_SECS: u64 = 180;

/// Progress is snapped to this many steps per percentage point after
/// every advance, so accumulated decimal steps land on decimal values.
const QUANTUM_PER_PERCENT: f64 = 1_000_000.0;

/// Play/pause state of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportState {
    Paused,
    Playing,
}

/// Scrubbable, auto-advancing progress indicator over a nominal duration.
///
/// Invariant: `0 <= progress_percent <= 100` after every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSimulator {
    progress_percent: f64,
    playing: bool,
    nominal_duration_secs: u64,
}

impl Default for PlaybackSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_NOMINAL_DURATION_SECS)
    }
}

impl PlaybackSimulator {
    /// Create a paused simulator at 0%.
    pub fn new(nominal_duration_secs: u64) -> Self {
        Self {
            progress_percent: 0.0,
            playing: false,
            nominal_duration_secs,
        }
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn nominal_duration_secs(&self) -> u64 {
        self.nominal_duration_secs
    }

    pub fn state(&self) -> TransportState {
        if self.playing {
            TransportState::Playing
        } else {
            TransportState::Paused
        }
    }

    /// Flip between playing and paused.
    ///
    /// Progress is left alone, so resuming at 100% stays at 100% and the
    /// next [`advance`](Self::advance) stops playback again.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
        tracing::debug!(
            state = ?self.state(),
            progress = self.progress_percent,
            "transport toggled"
        );
    }

    /// Move progress forward by `step_percent` while playing.
    ///
    /// Does nothing while paused or for non-positive steps. Reaching 100%
    /// stops playback. Returns true if playback auto-stopped on this call.
    pub fn advance(&mut self, step_percent: f64) -> bool {
        if !self.playing {
            return false;
        }

        if step_percent > 0.0 {
            let next = (self.progress_percent + step_percent).min(PROGRESS_MAX);
            self.progress_percent = quantize(next).max(self.progress_percent);
        }

        if self.progress_percent >= PROGRESS_MAX {
            self.progress_percent = PROGRESS_MAX;
            self.playing = false;
            tracing::debug!("playback reached the end, auto-stopped");
            return true;
        }
        false
    }

    /// Jump to `fraction` of the clip (0.0 = start, 1.0 = end).
    ///
    /// Out-of-range fractions are clamped; NaN seeks to the start. The
    /// play/pause state is not touched.
    pub fn seek(&mut self, fraction: f64) {
        let target = fraction * PROGRESS_MAX;
        self.progress_percent = if target.is_nan() {
            0.0
        } else {
            target.clamp(0.0, PROGRESS_MAX)
        };
        tracing::debug!(progress = self.progress_percent, "seek");
    }

    /// Simulated position in seconds (fractional).
    pub fn elapsed_secs(&self) -> f64 {
        self.progress_percent * self.nominal_duration_secs as f64 / PROGRESS_MAX
    }

    /// Current position as `MM:SS`, seconds truncated.
    pub fn formatted_time(&self) -> String {
        format_duration(self.elapsed_secs())
    }

    /// Nominal duration as `MM:SS`.
    pub fn formatted_duration(&self) -> String {
        format_duration(self.nominal_duration_secs as f64)
    }

    /// `MM:SS / MM:SS` readout.
    pub fn readout(&self) -> String {
        format!("{} / {}", self.formatted_time(), self.formatted_duration())
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            progress_percent: self.progress_percent,
            state: self.state(),
            elapsed: self.formatted_time(),
            total: self.formatted_duration(),
        }
    }
}

fn quantize(percent: f64) -> f64 {
    (percent * QUANTUM_PER_PERCENT).round() / QUANTUM_PER_PERCENT
}

/// Read-only, serializable view of a [`PlaybackSimulator`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSnapshot {
    pub progress_percent: f64,
    pub state: TransportState,
    pub elapsed: String,
    pub total: String,
}
