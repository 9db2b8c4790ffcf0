//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`$XDG_CONFIG_HOME/tracefmt/config.toml` or `~/.config/tracefmt/config.toml`)
//! 3. Built-in defaults

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode, ElapsedColumn};
use crate::error::TracefmtError;
use crate::level::Level;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Minimum level to display; entries below this are suppressed.
    pub min_level: Option<Level>,
    /// Fixed layout width. `None` means detect from the terminal.
    pub width: Option<usize>,
    /// Optional elapsed-time column.
    pub elapsed: Option<ElapsedColumn>,
    /// Per-level color name overrides.
    pub level_colors: HashMap<Level, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Always,
            min_level: None,
            width: None,
            elapsed: None,
            level_colors: HashMap::new(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, TracefmtError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            tracing::debug!(path = %config_path.display(), "loaded config file");
            config.apply_file_config(file_config)?;
        } else if cli.config.is_some() {
            return Err(TracefmtError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        if cli.level.is_some() {
            config.min_level = cli.level;
        }
        if let Some(width) = cli.width {
            config.width = Some(usize::from(width));
        }
        if cli.elapsed.is_some() {
            config.elapsed = cli.elapsed;
        }

        Ok(config)
    }

    /// Custom color name configured for `level`, if any.
    pub fn level_color(&self, level: Level) -> Option<&str> {
        self.level_colors.get(&level).map(String::as_str)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/tracefmt/config.toml` or `~/.config/tracefmt/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("tracefmt").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("tracefmt")
                .join("config.toml")
        } else {
            PathBuf::from(".config/tracefmt/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), TracefmtError> {
        if let Some(color) = file.color {
            self.color_mode = color;
        }

        if let Some(level) = file.level {
            let parsed = Level::from_str_loose(&level)
                .ok_or_else(|| {
                    TracefmtError::Config(format!(
                        "unknown level '{level}', expected one of {}",
                        Level::names()
                    ))
                })?;
            self.min_level = Some(parsed);
        }

        if let Some(width) = file.width {
            if width == 0 {
                return Err(TracefmtError::Config("width must be at least 1".into()));
            }
            self.width = Some(width);
        }

        if file.elapsed.is_some() {
            self.elapsed = file.elapsed;
        }

        for (key, color) in file.colors.unwrap_or_default() {
            let level = Level::from_str_loose(&key).ok_or_else(|| {
                TracefmtError::Config(format!("unknown level '{key}' in [colors]"))
            })?;
            self.level_colors.insert(level, color);
        }

        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    color: Option<ColorMode>,
    level: Option<String>,
    width: Option<usize>,
    elapsed: Option<ElapsedColumn>,
    colors: Option<HashMap<String, String>>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, TracefmtError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TracefmtError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
