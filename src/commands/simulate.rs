//! Simulate command handler

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use aurex::studio::{simulate, SimulateOptions, SimulationEnd, Transport};
use aurex::tui::current_theme;
use aurex::Config;

/// Command line overrides for a headless run.
#[derive(Debug, Default)]
pub struct Overrides {
    pub from: Option<f64>,
    pub max_ticks: Option<u64>,
    pub tick_ms: Option<u64>,
    pub step: Option<f64>,
    pub duration: Option<u64>,
    pub json: bool,
}

/// Play the simulated clip headlessly and print readouts to stdout.
pub fn handle(overrides: Overrides) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(ms) = overrides.tick_ms {
        config.studio.tick_interval_ms = ms;
    }
    if let Some(step) = overrides.step {
        config.studio.step_percent = step;
    }
    if let Some(secs) = overrides.duration {
        config.studio.nominal_duration_secs = secs;
    }
    config.studio.validate()?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    let mut transport = Transport::from_config(&config.studio);
    let options = SimulateOptions {
        start_fraction: overrides.from,
        max_ticks: overrides.max_ticks,
        json: overrides.json,
    };

    let mut stdout = io::stdout().lock();
    let report = simulate(&mut transport, &options, &interrupted, &mut stdout)?;

    if !overrides.json {
        let theme = current_theme();
        let summary = match report.end {
            SimulationEnd::Completed => format!("Playback finished after {} ticks", report.ticks),
            SimulationEnd::TickLimit => format!("Stopped after {} ticks", report.ticks),
            SimulationEnd::Interrupted => format!("Interrupted after {} ticks", report.ticks),
        };
        eprintln!("{}", theme.secondary_text(&summary));
    }

    Ok(())
}
