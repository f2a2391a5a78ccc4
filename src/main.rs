//! `aurex` command line entry point.

mod commands;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::filter::LevelFilter;

use aurex::studio::{CaptionStyle, Language};
use aurex::tui::current_theme;

/// Git commit the binary was built from (absent in release builds).
const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "release",
};

/// Build date emitted by build.rs.
const BUILD_DATE: &str = match option_env!("AUREX_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

#[derive(Debug, Parser)]
#[command(
    name = "aurex",
    version,
    about = "AUREX Studio - simulated AI dubbing editor in your terminal",
    long_about = "AUREX Studio - simulated AI dubbing editor in your terminal.\n\n\
        Nothing is decoded or dubbed: playback is a progress bar advanced by a timer \
        over a nominal clip duration."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the interactive studio editor
    Studio(StudioArgs),
    /// Play the simulated clip without a terminal UI and print readouts
    Simulate(SimulateArgs),
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
struct StudioArgs {
    /// Nominal clip duration in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    duration: Option<u64>,
    /// Caption language: ES, JP, DE or EN (overrides config)
    #[arg(long, value_name = "LANG")]
    language: Option<Language>,
    /// Caption style: modern, neon, bold or elegant (overrides config)
    #[arg(long, value_name = "STYLE")]
    caption_style: Option<CaptionStyle>,
}

#[derive(Debug, Args)]
struct SimulateArgs {
    /// Seek to this fraction of the clip before playing (0.0-1.0, clamped)
    #[arg(long, value_name = "FRACTION", allow_negative_numbers = true)]
    from: Option<f64>,
    /// Stop after this many timer ticks
    #[arg(long, value_name = "N")]
    max_ticks: Option<u64>,
    /// Timer interval in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,
    /// Percentage points per tick (overrides config)
    #[arg(long, value_name = "PERCENT")]
    step: Option<f64>,
    /// Nominal clip duration in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    duration: Option<u64>,
    /// Print JSON lines instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Map `-v` occurrences to a log level.
fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    // Log lines would tear through the studio's alternate screen
    let level = match cli.command {
        Commands::Studio(_) => LevelFilter::ERROR,
        _ => level_for(cli.verbose),
    };
    init_logging(level);
    tracing::debug!(git_sha = GIT_SHA, build_date = BUILD_DATE, "starting aurex");

    let result = match cli.command {
        Commands::Studio(args) => commands::studio::handle(commands::studio::Overrides {
            duration: args.duration,
            language: args.language,
            caption_style: args.caption_style,
        }),
        Commands::Simulate(args) => commands::simulate::handle(commands::simulate::Overrides {
            from: args.from,
            max_ticks: args.max_ticks,
            tick_ms: args.tick_ms,
            step: args.step,
            duration: args.duration,
            json: args.json,
        }),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Config(ConfigCommands::Init { force }) => commands::config::handle_init(force),
        Commands::Completions { shell } => {
            commands::completions::handle::<Cli>(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let theme = current_theme();
            eprintln!("{} {:#}", theme.error_text("Error:"), err);
            ExitCode::FAILURE
        }
    }
}
