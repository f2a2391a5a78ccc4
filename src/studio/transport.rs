//! Transport: the simulator plus the timer that drives it.
//!
//! The [`Transport`] is the single owner of a [`PlaybackSimulator`]. It holds
//! a [`Ticker`] exactly while the simulator is playing: one is acquired on
//! every entry into `Playing` and dropped on every exit, whether from an
//! explicit pause, the automatic stop at 100%, or the transport itself being
//! dropped. Ticks are consumed on the owner's thread, so the simulator is
//! never shared.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::StudioConfig;
use crate::studio::simulator::{PlaybackSimulator, PROGRESS_MAX};
use crate::studio::ticker::{Tick, Ticker};

type StartTimer = fn(Duration, u64, Sender<Tick>) -> std::io::Result<Ticker>;

/// Timing parameters of a [`Transport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportTiming {
    /// Time between ticks
    pub tick_interval: Duration,
    /// Percentage points added per tick
    pub step_percent: f64,
}

impl Default for TransportTiming {
    /// 0.1% every 50ms.
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            step_percent: 0.1,
        }
    }
}

impl From<&StudioConfig> for TransportTiming {
    fn from(config: &StudioConfig) -> Self {
        Self {
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            step_percent: config.step_percent,
        }
    }
}

/// Owner of the simulated playback and its repeating timer.
#[derive(Debug)]
pub struct Transport {
    sim: PlaybackSimulator,
    timing: TransportTiming,
    ticker: Option<Ticker>,
    generation: u64,
    tick_tx: Sender<Tick>,
    tick_rx: Receiver<Tick>,
    start_timer: StartTimer,
}

impl Transport {
    pub fn new(sim: PlaybackSimulator, timing: TransportTiming) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel();
        Self {
            sim,
            timing,
            ticker: None,
            generation: 0,
            tick_tx,
            tick_rx,
            start_timer: Ticker::start,
        }
    }

    /// Build a paused transport from the `[studio]` config section.
    pub fn from_config(config: &StudioConfig) -> Self {
        Self::new(
            PlaybackSimulator::new(config.nominal_duration_secs),
            TransportTiming::from(config),
        )
    }

    pub fn simulator(&self) -> &PlaybackSimulator {
        &self.sim
    }

    pub fn timing(&self) -> TransportTiming {
        self.timing
    }

    /// Whether a repeating timer is currently held.
    pub fn has_timer(&self) -> bool {
        self.ticker.is_some()
    }

    /// Flip play/pause, acquiring or releasing the timer to match.
    ///
    /// If the timer cannot be started the simulator stays paused.
    pub fn toggle(&mut self) -> Result<()> {
        self.sim.toggle();
        if let Err(err) = self.sync_timer() {
            self.sim.toggle();
            return Err(err);
        }
        Ok(())
    }

    /// Start playback if paused.
    pub fn play(&mut self) -> Result<()> {
        if !self.sim.is_playing() {
            self.toggle()?;
        }
        Ok(())
    }

    /// Pause playback if playing.
    pub fn pause(&mut self) -> Result<()> {
        if self.sim.is_playing() {
            self.toggle()?;
        }
        Ok(())
    }

    /// Seek to `fraction` of the clip; play state and timer are untouched.
    pub fn seek(&mut self, fraction: f64) {
        self.sim.seek(fraction);
    }

    /// Jump by `delta_percent` percentage points relative to the playhead.
    pub fn jump(&mut self, delta_percent: f64) {
        let target = self.sim.progress_percent() + delta_percent;
        self.sim.seek(target / PROGRESS_MAX);
    }

    /// Apply one tick.
    ///
    /// Ticks from a released timer and ticks while paused are ignored.
    /// Returns true if the simulator changed.
    pub fn handle_tick(&mut self, tick: Tick) -> bool {
        if !self.sim.is_playing() || tick.generation != self.generation || self.ticker.is_none() {
            tracing::trace!(generation = tick.generation, "ignoring stale tick");
            return false;
        }

        let stopped = self.sim.advance(self.timing.step_percent);
        if stopped {
            self.release_timer();
        }
        true
    }

    /// Apply every tick already queued. Returns true if anything changed.
    pub fn drain_ticks(&mut self) -> bool {
        let mut changed = false;
        while let Ok(tick) = self.tick_rx.try_recv() {
            changed |= self.handle_tick(tick);
        }
        changed
    }

    /// Wait up to `timeout` for the next tick and apply it.
    ///
    /// Returns `Ok(None)` on timeout, otherwise whether the tick changed
    /// the simulator.
    pub fn wait_tick(&mut self, timeout: Duration) -> Result<Option<bool>> {
        match self.tick_rx.recv_timeout(timeout) {
            Ok(tick) => Ok(Some(self.handle_tick(tick))),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            // The transport holds a sender itself, so this cannot happen while it lives
            Err(RecvTimeoutError::Disconnected) => anyhow::bail!("tick channel closed"),
        }
    }

    fn sync_timer(&mut self) -> Result<()> {
        match (self.sim.is_playing(), self.ticker.is_some()) {
            (true, false) => self.acquire_timer(),
            (false, true) => {
                self.release_timer();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn acquire_timer(&mut self) -> Result<()> {
        self.generation += 1;
        let ticker = (self.start_timer)(self.timing.tick_interval, self.generation, self.tick_tx.clone())
            .context("Failed to start playback timer")?;
        tracing::debug!(generation = self.generation, "playback timer acquired");
        self.ticker = Some(ticker);
        Ok(())
    }

    fn release_timer(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            tracing::debug!(generation = ticker.generation(), "playback timer released");
        }
    }
}
