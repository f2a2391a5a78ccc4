//! Integration tests for the public simulator and transport API.

use std::time::Duration;

use aurex::studio::{PlaybackSimulator, TransportState, TransportTiming};
use aurex::{Config, Transport};

// ============================================================================
// Simulator Properties
// ============================================================================

#[test]
fn seek_is_clamped_for_any_fraction() {
    let fractions = [-1e9, -1.0, -0.5, 0.0, 0.1, 0.333, 0.5, 0.999, 1.0, 2.0, 1e9];
    for fraction in fractions {
        for start_playing in [false, true] {
            let mut sim = PlaybackSimulator::new(180);
            if start_playing {
                sim.toggle();
            }
            sim.seek(fraction);

            let expected = (fraction * 100.0).clamp(0.0, 100.0);
            assert_eq!(sim.progress_percent(), expected);
            assert_eq!(sim.is_playing(), start_playing);
        }
    }
}

#[test]
fn ninety_real_seconds_of_source_cadence() {
    let mut sim = PlaybackSimulator::new(180);
    sim.toggle();

    // 45 real seconds at 0.1% per 50ms
    for _ in 0..900 {
        sim.advance(0.1);
    }
    assert_eq!(sim.progress_percent(), 90.0);
    assert_eq!(sim.state(), TransportState::Playing);
    assert_eq!(sim.formatted_time(), "02:42");

    for _ in 0..100 {
        sim.advance(0.1);
    }
    assert_eq!(sim.progress_percent(), 100.0);
    assert_eq!(sim.state(), TransportState::Paused);
    assert_eq!(sim.readout(), "03:00 / 03:00");
}

#[test]
fn end_of_stream_toggle_is_a_noop() {
    let mut sim = PlaybackSimulator::new(180);
    sim.seek(1.0);
    sim.toggle();
    assert!(sim.is_playing());

    for _ in 0..3 {
        sim.advance(0.1);
        assert_eq!(sim.progress_percent(), 100.0);
        assert!(!sim.is_playing());
    }
}

#[test]
fn seeking_back_from_end_allows_resuming() {
    let mut sim = PlaybackSimulator::new(180);
    sim.seek(1.0);
    sim.seek(0.5);
    sim.toggle();
    sim.advance(0.1);
    assert!(sim.is_playing());
    assert!(sim.progress_percent() > 50.0);
}

// ============================================================================
// Transport Timer Lifecycle
// ============================================================================

#[test]
fn transport_from_config_uses_studio_section() {
    let mut config = Config::default();
    config.studio.nominal_duration_secs = 60;
    config.studio.tick_interval_ms = 1;
    config.studio.step_percent = 25.0;

    let mut transport = Transport::from_config(&config.studio);
    assert_eq!(transport.simulator().nominal_duration_secs(), 60);
    assert_eq!(transport.timing().step_percent, 25.0);

    transport.toggle().unwrap();
    while transport.simulator().is_playing() {
        transport.wait_tick(Duration::from_secs(5)).unwrap();
    }

    assert_eq!(transport.simulator().progress_percent(), 100.0);
    assert_eq!(transport.simulator().formatted_time(), "01:00");
    assert!(!transport.has_timer());
}

#[test]
fn pause_releases_timer_and_freezes_progress() {
    let mut transport = Transport::new(
        PlaybackSimulator::new(180),
        TransportTiming {
            tick_interval: Duration::from_millis(1),
            step_percent: 0.1,
        },
    );

    transport.toggle().unwrap();
    transport.wait_tick(Duration::from_secs(5)).unwrap();
    transport.toggle().unwrap();
    assert!(!transport.has_timer());

    let frozen = transport.simulator().progress_percent();
    std::thread::sleep(Duration::from_millis(20));
    transport.drain_ticks();
    assert_eq!(transport.simulator().progress_percent(), frozen);
}

#[test]
fn dropping_transport_while_playing_stops_timer() {
    let mut transport = Transport::new(
        PlaybackSimulator::new(180),
        TransportTiming {
            tick_interval: Duration::from_millis(1),
            step_percent: 0.1,
        },
    );
    transport.toggle().unwrap();
    assert!(transport.has_timer());

    // Dropping joins the timer thread; this must return promptly
    drop(transport);
}
