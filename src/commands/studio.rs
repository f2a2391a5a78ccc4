//! Studio command handler

use anyhow::Result;

use aurex::studio::{run_studio, CaptionStyle, Language};
use aurex::tui::current_theme;
use aurex::Config;

/// Command line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub duration: Option<u64>,
    pub language: Option<Language>,
    pub caption_style: Option<CaptionStyle>,
}

/// Open the interactive studio, applying command line overrides to the config.
pub fn handle(overrides: Overrides) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(secs) = overrides.duration {
        config.studio.nominal_duration_secs = secs;
    }
    if let Some(lang) = overrides.language {
        config.dubbing.default_language = lang;
    }
    if let Some(style) = overrides.caption_style {
        config.dubbing.caption_style = style;
    }

    let outcome = run_studio(&config)?;

    let theme = current_theme();
    println!(
        "{} {} {}",
        theme.secondary_text("Left the studio at"),
        theme.accent_text(&outcome.position),
        theme.secondary_text(&format!("({:.1}%)", outcome.progress_percent))
    );
    Ok(())
}
