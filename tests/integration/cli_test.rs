//! Integration tests for the `aurex` command line.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::TestEnv;

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("aurex")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("studio"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn simulate_help_documents_options() {
    let env = TestEnv::new();
    let out = env.run(&["simulate", "--help"]);

    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("--from <FRACTION>"));
    assert!(out.stdout.contains("--max-ticks <N>"));
    assert!(out.stdout.contains("--json"));
}

#[test]
fn unknown_language_is_usage_error() {
    let env = TestEnv::new();
    let out = env.run(&["studio", "--language", "fr"]);

    assert_eq!(out.exit_code, 2);
    assert!(out.stderr.contains("Unknown language"));
}

#[test]
fn unknown_caption_style_is_usage_error() {
    let env = TestEnv::new();
    let out = env.run(&["studio", "--caption-style", "comic"]);

    assert_eq!(out.exit_code, 2);
    assert!(out.stderr.contains("Unknown caption style"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let env = TestEnv::new();
    let out = env.run(&["config", "path"]);

    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout.trim(), env.config_path().display().to_string());
}

#[test]
fn config_show_without_file_prints_defaults() {
    let env = TestEnv::new();
    let out = env.run(&["config", "show"]);

    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("nominal_duration_secs = 180"));
    assert!(out.stdout.contains("tick_interval_ms = 50"));
    assert!(out.stdout.contains("default_language = \"ES\""));
    assert!(out.stdout.contains("caption_style = \"modern\""));
    assert!(!env.config_path().exists());
}

#[test]
fn config_init_writes_file_once() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert_eq!(first.exit_code, 0);
    assert!(env.config_path().exists());
    assert_eq!(
        first.stdout.trim(),
        format!("Wrote default config to {}", env.config_path().display())
    );

    let second = env.run(&["config", "init"]);
    assert_eq!(second.exit_code, 1);
    assert!(second.stderr.contains("already exists"));

    let forced = env.run(&["config", "init", "--force"]);
    assert_eq!(forced.exit_code, 0);
}

#[test]
fn config_show_reflects_file() {
    let env = TestEnv::new();
    env.write_config("[studio]\nnominal_duration_secs = 240\n\n[dubbing]\ndefault_language = \"JP\"\n");

    let out = env.run(&["config", "show"]);
    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("nominal_duration_secs = 240"));
    assert!(out.stdout.contains("default_language = \"JP\""));
}

#[test]
fn broken_config_fails_with_path() {
    let env = TestEnv::new();
    env.write_config("[studio\n");

    let out = env.run(&["simulate"]);
    assert_eq!(out.exit_code, 1);
    assert!(out.stderr.contains("Invalid config file"));
    assert!(out.stderr.contains("config.toml"));
}

// ============================================================================
// Simulate Tests
// ============================================================================

#[test]
fn simulate_prints_readout_per_second_change() {
    let env = TestEnv::new();
    let out = env.run(&["simulate", "--from", "0.5", "--step", "10", "--tick-ms", "1"]);

    assert_eq!(out.exit_code, 0, "stderr: {}", out.stderr);
    insta::assert_snapshot!(out.stdout.trim_end(), @r"
    01:30 / 03:00  50.00%
    01:48 / 03:00  60.00%
    02:06 / 03:00  70.00%
    02:24 / 03:00  80.00%
    02:42 / 03:00  90.00%
    03:00 / 03:00 100.00%
    ");
    assert!(out.stderr.contains("Playback finished after 5 ticks"));
}

#[test]
fn simulate_json_ends_paused_at_hundred() {
    let env = TestEnv::new();
    let out = env.run(&["simulate", "--from", "0.99", "--tick-ms", "1", "--json"]);

    assert_eq!(out.exit_code, 0, "stderr: {}", out.stderr);
    let last = out.stdout.lines().last().expect("at least one line");
    let snapshot: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(snapshot["progress_percent"], 100.0);
    assert_eq!(snapshot["state"], "paused");
    assert_eq!(snapshot["elapsed"], "03:00");
    assert_eq!(snapshot["total"], "03:00");
}

#[test]
fn simulate_clamps_out_of_range_start() {
    let env = TestEnv::new();
    let out = env.run(&["simulate", "--from", "-2", "--max-ticks", "0", "--json"]);

    assert_eq!(out.exit_code, 0, "stderr: {}", out.stderr);
    let first = out.stdout.lines().next().expect("at least one line");
    let snapshot: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(snapshot["progress_percent"], 0.0);
}

#[test]
fn simulate_tick_limit_respects_duration_override() {
    let env = TestEnv::new();
    let out = env.run(&[
        "simulate",
        "--duration",
        "60",
        "--from",
        "0.5",
        "--max-ticks",
        "2",
        "--tick-ms",
        "1",
    ]);

    assert_eq!(out.exit_code, 0, "stderr: {}", out.stderr);
    assert!(out.stdout.starts_with("00:30 / 01:00"));
    assert!(out.stderr.contains("Stopped after 2 ticks"));
}

#[test]
fn simulate_rejects_invalid_step() {
    let env = TestEnv::new();
    let out = env.run(&["simulate", "--step", "0"]);

    assert_eq!(out.exit_code, 1);
    assert!(out.stderr.contains("studio.step_percent"));
}

#[test]
fn completions_mention_binary() {
    let env = TestEnv::new();
    let out = env.run(&["completions", "bash"]);

    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("aurex"));
}
