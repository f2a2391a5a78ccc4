//! Config subcommands handler

use anyhow::{bail, Result};

use aurex::tui::current_theme;
use aurex::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print the path of the config file (whether or not it exists).
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a config file with default values.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;

    if config_path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let path = Config::default().save()?;
    println!(
        "{} {}",
        theme.success_text("Wrote default config to"),
        theme.accent_text(&path.display().to_string())
    );
    Ok(())
}
