//! Dubbing target languages, their caption lines and caption text styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target language of the simulated dub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    Es,
    Jp,
    De,
    En,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Es, Language::Jp, Language::De, Language::En];

    /// Two-letter code shown in the status bar.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "ES",
            Self::Jp => "JP",
            Self::De => "DE",
            Self::En => "EN",
        }
    }

    /// Caption line overlaid on the video area.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Es => "Sube de nivel con el doblaje de AUREX AI 🚀",
            Self::Jp => "AUREX AIダビングでコンテンツをレベルアップ 🚀",
            Self::De => "Verbessern Sie Ihre Inhalte mit AUREX AI Dubbing 🚀",
            Self::En => "Level up your content with AUREX AI Dubbing 🚀",
        }
    }

    /// Next language in the ES → JP → DE → EN cycle.
    pub fn next(&self) -> Self {
        match self {
            Self::Es => Self::Jp,
            Self::Jp => Self::De,
            Self::De => Self::En,
            Self::En => Self::Es,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language '{0}' (expected one of: ES, JP, DE, EN)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Text style preset of the caption overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionStyle {
    /// Bold caption on an indigo plate
    #[default]
    Modern,
    /// Glowing italic underline
    Neon,
    /// Heavy uppercase
    Bold,
    /// Slender italic
    Elegant,
}

impl CaptionStyle {
    pub const ALL: [CaptionStyle; 4] = [
        CaptionStyle::Modern,
        CaptionStyle::Neon,
        CaptionStyle::Bold,
        CaptionStyle::Elegant,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Neon => "neon",
            Self::Bold => "bold",
            Self::Elegant => "elegant",
        }
    }

    /// Next style in the modern → neon → bold → elegant cycle.
    pub fn next(&self) -> Self {
        match self {
            Self::Modern => Self::Neon,
            Self::Neon => Self::Bold,
            Self::Bold => Self::Elegant,
            Self::Elegant => Self::Modern,
        }
    }

    /// Caption text as this style displays it.
    pub fn apply(&self, caption: &str) -> String {
        match self {
            Self::Modern => format!(" {} ", caption),
            Self::Bold => caption.to_uppercase(),
            Self::Neon | Self::Elegant => caption.to_string(),
        }
    }
}

impl fmt::Display for CaptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown caption style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown caption style '{0}' (expected one of: modern, neon, bold, elegant)")]
pub struct UnknownCaptionStyle(pub String);

impl FromStr for CaptionStyle {
    type Err = UnknownCaptionStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCaptionStyle(s.to_string()))
    }
}
