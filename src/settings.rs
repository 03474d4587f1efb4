//! Display and runtime settings
//!
//! Loaded once at startup. Difficulty progression is fixed and lives in
//! `consts`, not here.

use serde::{Deserialize, Serialize};

use crate::consts::PLAY_AREA_HEIGHT;

/// Game settings. Every field has a default, so partial JSON is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play area height in pixels (width follows the canvas)
    pub play_area_height: f32,

    // === Visuals ===
    pub background: String,
    pub star_count: u32,
    pub star_size: f32,
    pub star_color: String,
    /// Outline and crosshair color for targets
    pub target_stroke: String,
    pub target_stroke_width: f32,
    pub crosshair_half_length: f32,
    pub crosshair_width: f32,

    // === Runtime ===
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Fixed run seed; a fresh one is drawn per run when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_area_height: PLAY_AREA_HEIGHT,

            background: "#1a1a2e".to_string(),
            star_count: 50,
            star_size: 2.0,
            star_color: "white".to_string(),
            target_stroke: "white".to_string(),
            target_stroke_width: 3.0,
            crosshair_half_length: 10.0,
            crosshair_width: 2.0,

            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Configured log level (Info if unrecognized)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Parse `json`, logging and falling back to defaults on error
    fn from_json_or_default(json: &str, source: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", source);
                settings
            }
            Err(err) => {
                log::warn!("Invalid settings in {}: {}", source, err);
                Self::default()
            }
        }
    }

    /// LocalStorage key (read only)
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "target_rush_settings";

    /// Environment variable naming a JSON settings file (native only)
    pub const ENV_VAR: &'static str = "TARGET_RUSH_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        match json {
            Some(json) => Self::from_json_or_default(&json, "LocalStorage"),
            None => Self::default(),
        }
    }

    /// Load settings from the file named by `TARGET_RUSH_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json_or_default(&json, &path),
            Err(err) => {
                log::warn!("Could not read settings file {}: {}", path, err);
                Self::default()
            }
        }
    }
}
