//! Headless playback simulation.
//!
//! Drives a [`Transport`] with its real timer but no terminal, reporting a
//! readout every time the displayed position changes. Useful for scripting
//! and for observing the transport outside the studio.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;

use crate::studio::simulator::PlaybackSnapshot;
use crate::studio::transport::Transport;

/// How often the loop checks the interrupt flag while waiting for ticks.
const INTERRUPT_CHECK: Duration = Duration::from_millis(100);

/// Options for [`simulate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulateOptions {
    /// Seek to this fraction before starting
    pub start_fraction: Option<f64>,
    /// Stop after this many applied ticks (None = run to the end)
    pub max_ticks: Option<u64>,
    /// Emit JSON lines instead of text
    pub json: bool,
}

/// Why a simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEnd {
    /// Playback reached 100% and auto-stopped
    Completed,
    /// The tick limit was hit
    TickLimit,
    /// The interrupt flag was raised
    Interrupted,
}

/// Summary returned by [`simulate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub end: SimulationEnd,
    pub ticks: u64,
    pub last: PlaybackSnapshot,
}

/// Play `transport` until it completes, hits the tick limit, or `interrupt`
/// is raised, writing a readout line to `out` whenever `MM:SS` changes.
pub fn simulate(
    transport: &mut Transport,
    options: &SimulateOptions,
    interrupt: &AtomicBool,
    out: &mut impl Write,
) -> Result<SimulationReport> {
    if let Some(fraction) = options.start_fraction {
        transport.seek(fraction);
    }

    let mut last_shown = transport.simulator().formatted_time();
    emit(out, transport, options.json)?;

    transport.play()?;
    tracing::debug!(
        progress = transport.simulator().progress_percent(),
        "headless simulation started"
    );

    let mut ticks = 0u64;
    let end = loop {
        if interrupt.load(Ordering::SeqCst) {
            break SimulationEnd::Interrupted;
        }
        if !transport.simulator().is_playing() {
            break SimulationEnd::Completed;
        }
        if options.max_ticks.is_some_and(|max| ticks >= max) {
            break SimulationEnd::TickLimit;
        }

        if let Some(true) = transport.wait_tick(INTERRUPT_CHECK)? {
            ticks += 1;
            let shown = transport.simulator().formatted_time();
            if shown != last_shown {
                emit(out, transport, options.json)?;
                last_shown = shown;
            }
        }
    };

    transport.pause()?;
    if end != SimulationEnd::Completed || last_shown != transport.simulator().formatted_time() {
        emit(out, transport, options.json)?;
    }

    tracing::debug!(?end, ticks, "headless simulation finished");
    Ok(SimulationReport {
        end,
        ticks,
        last: transport.simulator().snapshot(),
    })
}

fn emit(out: &mut impl Write, transport: &Transport, json: bool) -> Result<()> {
    let sim = transport.simulator();
    if json {
        serde_json::to_writer(&mut *out, &sim.snapshot())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{} {:>6.2}%", sim.readout(), sim.progress_percent())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::simulator::{PlaybackSimulator, TransportState};
    use crate::studio::transport::TransportTiming;

    fn fast(duration: u64, step: f64) -> Transport {
        Transport::new(
            PlaybackSimulator::new(duration),
            TransportTiming {
                tick_interval: Duration::from_millis(1),
                step_percent: step,
            },
        )
    }

    #[test]
    fn runs_to_completion_and_stops() {
        let mut transport = fast(180, 10.0);
        let options = SimulateOptions {
            start_fraction: Some(0.5),
            ..Default::default()
        };
        let mut out = Vec::new();
        let report = simulate(&mut transport, &options, &AtomicBool::new(false), &mut out).unwrap();

        assert_eq!(report.end, SimulationEnd::Completed);
        assert_eq!(report.ticks, 5);
        assert_eq!(report.last.state, TransportState::Paused);
        assert_eq!(report.last.progress_percent, 100.0);
        assert!(!transport.has_timer());

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"01:30 / 03:00  50.00%"));
        assert_eq!(lines.last(), Some(&"03:00 / 03:00 100.00%"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn tick_limit_stops_early() {
        let mut transport = fast(180, 0.1);
        let options = SimulateOptions {
            max_ticks: Some(3),
            ..Default::default()
        };
        let mut out = Vec::new();
        let report = simulate(&mut transport, &options, &AtomicBool::new(false), &mut out).unwrap();

        assert_eq!(report.end, SimulationEnd::TickLimit);
        assert_eq!(report.ticks, 3);
        assert!((report.last.progress_percent - 0.3).abs() < 1e-9);
        assert!(!transport.simulator().is_playing());
        assert!(!transport.has_timer());
    }

    #[test]
    fn interrupt_flag_stops_immediately() {
        let mut transport = fast(180, 0.1);
        let mut out = Vec::new();
        let report = simulate(
            &mut transport,
            &SimulateOptions::default(),
            &AtomicBool::new(true),
            &mut out,
        )
        .unwrap();

        assert_eq!(report.end, SimulationEnd::Interrupted);
        assert_eq!(report.ticks, 0);
        assert!(!transport.has_timer());
    }

    #[test]
    fn json_lines_are_snapshots() {
        let mut transport = fast(180, 50.0);
        let options = SimulateOptions {
            json: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        simulate(&mut transport, &options, &AtomicBool::new(false), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["elapsed"], "00:00");
        assert_eq!(lines[1]["elapsed"], "01:30");
        assert_eq!(lines[2]["elapsed"], "03:00");
        assert_eq!(lines[2]["state"], "paused");
    }
}
