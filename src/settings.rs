//! Game settings and preferences
//!
//! Persisted separately from high scores in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{CONFIDENCE_THRESHOLD, STARTING_LIVES};
use crate::platform::storage;
use crate::sim::GameConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Lives at the start of every session
    pub starting_lives: u32,
    /// Let the autopilot steer (demo mode)
    pub autopilot: bool,

    // === Gesture control ===
    /// Classifier confidence needed to assert a direction (0.0 - 1.0)
    pub confidence_threshold: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    /// Pause when the tab is hidden or the window loses focus
    pub pause_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            autopilot: false,

            confidence_threshold: CONFIDENCE_THRESHOLD,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            pause_on_blur: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "flappy_tongue_settings";

    /// Clamp values edited by hand or saved by an older build
    pub fn sanitized(mut self) -> Self {
        self.starting_lives = self.starting_lives.clamp(1, 99);
        self.confidence_threshold = clamp_unit(self.confidence_threshold, CONFIDENCE_THRESHOLD);
        self.master_volume = clamp_unit(self.master_volume, 0.8);
        self.sfx_volume = clamp_unit(self.sfx_volume, 1.0);
        self
    }

    /// Session configuration for these settings
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            lives: self.starting_lives.max(1),
            ..Default::default()
        }
    }

    /// Effective sound effect volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Load settings from LocalStorage, falling back to defaults
    pub fn load() -> Self {
        match storage::load_json::<Settings>(Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings.sanitized()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if storage::save_json(Self::STORAGE_KEY, self) {
            log::info!("Settings saved");
        }
    }
}

fn clamp_unit(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game() {
        let settings = Settings::default();
        assert_eq!(settings.game_config(), GameConfig::default());
        assert_eq!(settings.confidence_threshold, 0.8);
    }

    #[test]
    fn test_sanitized() {
        let settings = Settings {
            starting_lives: 0,
            confidence_threshold: f32::NAN,
            master_volume: 3.0,
            sfx_volume: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.starting_lives, 1);
        assert_eq!(settings.confidence_threshold, CONFIDENCE_THRESHOLD);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"starting_lives": 5}"#).unwrap();
        assert_eq!(settings.starting_lives, 5);
        assert!(settings.pause_on_blur);
        assert_eq!(settings.game_config().lives, 5);
    }

    #[test]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }
}
