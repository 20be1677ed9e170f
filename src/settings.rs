//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web build; process defaults elsewhere.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BALL_SPEED;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vertical speed assigned to newly spawned balls (px/frame).
    /// Matches the external speed control: [1, 10] in steps of 0.5.
    pub ball_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_speed: DEFAULT_BALL_SPEED,
        }
    }
}

impl Settings {
    /// Snap a raw slider value onto the control's scale: [1, 10], step 0.5
    pub fn snap_speed(raw: f32) -> f32 {
        ((raw * 2.0).round() / 2.0).clamp(1.0, 10.0)
    }

    /// Set the ball speed, snapping to the control's scale
    pub fn set_ball_speed(&mut self, raw: f32) {
        self.ball_speed = Self::snap_speed(raw);
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "dodgeball_court_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return Self {
                        ball_speed: Self::snap_speed(settings.ball_speed),
                    };
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
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
