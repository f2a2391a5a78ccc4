//! Configuration management for AUREX.
//!
//! Settings live in a TOML file at `<config_dir>/aurex/config.toml`
//! (overridable with `AUREX_CONFIG`). A missing file means defaults, and
//! every field has a default so partial files are fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::studio::dubbing::{CaptionStyle, Language};
use crate::studio::simulator::DEFAULT_NOMINAL_DURATION_SECS;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "AUREX_CONFIG";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub studio: StudioConfig,
    pub dubbing: DubbingConfig,
}

/// `[studio]` section: the simulated transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Nominal clip length the progress bar is scaled against (seconds)
    pub nominal_duration_secs: u64,
    /// Timer interval while playing (milliseconds)
    pub tick_interval_ms: u64,
    /// Percentage points added per tick
    pub step_percent: f64,
    /// Percentage points moved by jump back/forward
    pub jump_percent: f64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            nominal_duration_secs: DEFAULT_NOMINAL_DURATION_SECS,
            tick_interval_ms: 50,
            step_percent: 0.1,
            jump_percent: 5.0,
        }
    }
}

impl StudioConfig {
    /// Reject values the transport cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nominal_duration_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "studio.nominal_duration_secs",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "studio.tick_interval_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if !(self.step_percent > 0.0 && self.step_percent <= 100.0) {
            return Err(ConfigError::Invalid {
                field: "studio.step_percent",
                reason: format!("must be in (0, 100], got {}", self.step_percent),
            });
        }
        if !(self.jump_percent > 0.0 && self.jump_percent <= 100.0) {
            return Err(ConfigError::Invalid {
                field: "studio.jump_percent",
                reason: format!("must be in (0, 100], got {}", self.jump_percent),
            });
        }
        Ok(())
    }
}

/// `[dubbing]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DubbingConfig {
    /// Caption language the studio opens with
    pub default_language: Language,
    /// Caption text style the studio opens with
    pub caption_style: CaptionStyle,
}

impl Config {
    /// Path of the config file, honoring `AUREX_CONFIG`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("aurex").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the config from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.studio.validate()?;
        Ok(config)
    }

    /// Render the config as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to the default location, creating parent directories.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_studio_mockup() {
        let config = Config::default();
        assert_eq!(config.studio.nominal_duration_secs, 180);
        assert_eq!(config.studio.tick_interval_ms, 50);
        assert_eq!(config.studio.step_percent, 0.1);
        assert_eq!(config.studio.jump_percent, 5.0);
        assert_eq!(config.dubbing.default_language, Language::Es);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml("[studio]\nnominal_duration_secs = 90\n").unwrap();
        assert_eq!(config.studio.nominal_duration_secs, 90);
        assert_eq!(config.studio.tick_interval_ms, 50);
        assert_eq!(config.dubbing.default_language, Language::Es);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn language_parses_from_code() {
        let config = Config::from_toml("[dubbing]\ndefault_language = \"JP\"\n").unwrap();
        assert_eq!(config.dubbing.default_language, Language::Jp);
    }

    #[test]
    fn caption_style_parses_from_name() {
        let config = Config::from_toml("[dubbing]\ncaption_style = \"neon\"\n").unwrap();
        assert_eq!(config.dubbing.caption_style, CaptionStyle::Neon);
        assert_eq!(Config::default().dubbing.caption_style, CaptionStyle::Modern);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = Config::from_toml("[studio]\ntick_interval_ms = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "studio.tick_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let err = Config::from_toml("[studio]\nstep_percent = -0.1\n").unwrap_err();
        assert!(err.to_string().contains("studio.step_percent"));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::from_toml("[studio\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.studio.nominal_duration_secs = 240;
        config.dubbing.default_language = Language::De;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "studio = 5").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
