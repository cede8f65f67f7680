//! Configuration file handling for ascii-banner.
//!
//! Loads configuration from `~/.config/ascii-banner/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::banner::DEFAULT_BORDER_CHAR;
use crate::color::Color;
use crate::compositor::WAVE_LENGTH;
use crate::terminal::MAX_AMPLITUDE;

/// Configuration file structure for ascii-banner.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub color: ColorConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
    #[serde(default = "default_sweep_pause_ms")]
    pub sweep_pause_ms: u64,
    #[serde(default = "default_intro_delay_ms")]
    pub intro_delay_ms: u64,
    #[serde(default = "default_wave_length")]
    pub wave_length: f64,
    #[serde(default = "default_max_amplitude")]
    pub max_amplitude: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: default_frame_delay_ms(),
            sweep_pause_ms: default_sweep_pause_ms(),
            intro_delay_ms: default_intro_delay_ms(),
            wave_length: default_wave_length(),
            max_amplitude: default_max_amplitude(),
        }
    }
}

impl AnimationConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn sweep_pause(&self) -> Duration {
        Duration::from_millis(self.sweep_pause_ms)
    }

    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BannerConfig {
    #[serde(default = "default_border_char")]
    pub border_char: char,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            border_char: default_border_char(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ColorConfig {
    /// Color used when the color prompt is left empty
    #[serde(default)]
    pub default: Option<Color>,
}

fn default_frame_delay_ms() -> u64 {
    50
}

fn default_sweep_pause_ms() -> u64 {
    300
}

fn default_intro_delay_ms() -> u64 {
    1000
}

fn default_wave_length() -> f64 {
    WAVE_LENGTH
}

fn default_max_amplitude() -> usize {
    MAX_AMPLITUDE
}

fn default_border_char() -> char {
    DEFAULT_BORDER_CHAR
}

/// Commented config written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# ascii-banner configuration

[animation]
# Delay between scroll frames
frame_delay_ms = 50
# Pause after the text has scrolled off screen
sweep_pause_ms = 300
# Pause after the "Press Ctrl+C" hint
intro_delay_ms = 1000
# Columns per radian of the sine wave (larger = gentler wave)
wave_length = 8.0
# Largest vertical swing in rows
max_amplitude = 6

[banner]
# Fill character for the static banner border
border_char = "*"

[color]
# Color used when the prompt is left empty:
# black, red, green, yellow, blue, magenta, cyan, white
# default = "cyan"
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed or is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        config.validate(&path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let wave_length = self.animation.wave_length;
        if !wave_length.is_finite() || wave_length <= 0.0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: format!("wave_length must be a positive number, got {}", wave_length),
            });
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid config file '{}': {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-banner").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-banner/config.toml")
        })
}
