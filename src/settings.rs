//! Game settings
//!
//! Arena and entity dimensions, colours and an optional fixed seed.
//! Persisted as JSON in LocalStorage on the web and in a file natively.

use std::fmt;
use std::path::Path;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a settings document was rejected
#[derive(Debug)]
pub enum SettingsError {
    /// Not valid JSON, or fields of the wrong type
    Parse(serde_json::Error),
    /// Parsed, but a value is out of range
    Invalid(&'static str),
    /// Settings file could not be read or written
    Io(std::io::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "malformed settings: {}", e),
            SettingsError::Invalid(what) => write!(f, "invalid settings: {}", what),
            SettingsError::Io(e) => write!(f, "settings file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
            SettingsError::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

/// Game settings; every field falls back to its default when omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per frame
    pub paddle_speed: f32,
    /// Distance from each side wall
    pub paddle_inset: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Pixels per frame
    pub ball_speed: f32,

    // === Colours (CSS) ===
    pub background_color: String,
    pub foreground_color: String,

    /// Fixed seed for the launch heading; random per session when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            background_color: BACKGROUND_COLOR.to_string(),
            foreground_color: FOREGROUND_COLOR.to_string(),

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers and strings; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check that the layout is playable
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            (self.arena_width, "arena_width must be positive"),
            (self.arena_height, "arena_height must be positive"),
            (self.paddle_width, "paddle_width must be positive"),
            (self.paddle_height, "paddle_height must be positive"),
            (self.paddle_speed, "paddle_speed must be positive"),
            (self.ball_radius, "ball_radius must be positive"),
            (self.ball_speed, "ball_speed must be positive"),
        ];
        for (value, what) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(what));
            }
        }

        if !(self.paddle_inset.is_finite() && self.paddle_inset >= 0.0) {
            return Err(SettingsError::Invalid("paddle_inset must not be negative"));
        }
        if self.paddle_height > self.arena_height {
            return Err(SettingsError::Invalid("paddle taller than arena"));
        }
        if 2.0 * (self.paddle_inset + self.paddle_width) > self.arena_width {
            return Err(SettingsError::Invalid("paddles do not fit side by side"));
        }
        if 2.0 * self.ball_radius >= self.arena_height.min(self.arena_width) {
            return Err(SettingsError::Invalid("ball larger than arena"));
        }
        Ok(())
    }

    /// Read and validate a JSON settings file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write these settings as JSON
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json())?;
        Ok(())
    }

    /// LocalStorage key; also the native file stem
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
            log::info!("Settings saved");
        }
    }

    /// Settings file in the working directory (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> PathBuf {
        PathBuf::from(format!("{}.json", Self::STORAGE_KEY))
    }

    /// Load settings from the default file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        let path = Self::default_path();
        match self.save_to(&path) {
            Ok(()) => log::info!("Settings saved to {}", path.display()),
            Err(e) => log::warn!("Could not save settings: {}", e),
        }
    }
}
