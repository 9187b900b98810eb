//! Game Configuration
//!
//! Display mode and round timing, passed explicitly into the decoder and
//! into frame capture. Loaded from environment variables by the binary.

use std::env;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::{FPS, ROUND_FRAME_NUMBER, ROUND_TIME_MS};
use crate::input::history::DEFAULT_HISTORY_CAPACITY;

/// What agents are allowed to observe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Full visual data.
    #[default]
    Visual,
    /// Audio rendered for training; positional data hidden, HP kept.
    AudioTrain,
    /// Playing by audio only; positional data and HP hidden.
    AudioPlay,
}

impl DisplayMode {
    /// True for both audio-only modes.
    #[inline]
    pub fn is_audio_only(self) -> bool {
        matches!(self, DisplayMode::AudioTrain | DisplayMode::AudioPlay)
    }

    /// Audio samples are captured only in audio-only modes.
    #[inline]
    pub fn renders_audio(self) -> bool {
        self.is_audio_only()
    }

    /// Redaction also zeroes hit points.
    #[inline]
    pub fn hides_hp(self) -> bool {
        self == DisplayMode::AudioPlay
    }
}

impl FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual" => Ok(DisplayMode::Visual),
            "audio_train" => Ok(DisplayMode::AudioTrain),
            "audio_play" => Ok(DisplayMode::AudioPlay),
            other => Err(ConfigError::InvalidDisplayMode(other.to_string())),
        }
    }
}

/// Simulation-wide settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display mode for agent-facing snapshots
    pub mode: DisplayMode,
    /// Training mode: round time never runs out
    pub unlimited_time: bool,
    /// Simulation frames per second
    pub fps: u32,
    /// Frames in one round
    pub round_frames: u32,
    /// Round length in milliseconds
    pub round_time_ms: u32,
    /// Key frames retained per input history
    pub history_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Visual,
            unlimited_time: false,
            fps: FPS,
            round_frames: ROUND_FRAME_NUMBER,
            round_time_ms: ROUND_TIME_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Default configuration with the given display mode.
    pub fn with_mode(mode: DisplayMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their defaults; malformed values are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(mode) = env::var("FIGHT_DISPLAY_MODE") {
            config.mode = mode.parse()?;
        }

        if let Ok(training) = env::var("FIGHT_TRAINING_MODE") {
            config.unlimited_time = parse_bool(&training)
                .ok_or(ConfigError::Invalid("FIGHT_TRAINING_MODE"))?;
        }

        if let Ok(capacity) = env::var("FIGHT_HISTORY_CAPACITY") {
            let capacity: usize = capacity
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("FIGHT_HISTORY_CAPACITY"))?;
            if capacity == 0 {
                return Err(ConfigError::Invalid("FIGHT_HISTORY_CAPACITY"));
            }
            config.history_capacity = capacity;
        }

        Ok(config)
    }
}

/// Log filter directive for the binary (`FIGHT_LOG_LEVEL`, default `info`).
pub fn log_level_from_env() -> String {
    env::var("FIGHT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Unknown display mode name.
    #[error("Invalid display mode: {0}")]
    InvalidDisplayMode(String),

    /// Environment variable present but unparseable.
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
