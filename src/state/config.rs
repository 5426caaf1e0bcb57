use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const MIN_UI_SCALE: f32 = 0.75;
pub const MAX_UI_SCALE: f32 = 2.0;

/// Default margin for panel content (in virtual units, scaled by ui_scale)
pub const DEFAULT_PANEL_MARGIN: f32 = 12.0;

pub fn default_ui_scale() -> f32 {
    1.0
}

pub fn default_window_size() -> (f32, f32) {
    (1280.0, 900.0)
}

/// App preferences stored on disk. Shirt choices are never written here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui_scale: default_ui_scale(),
            window_size: default_window_size(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(|appdata| {
                PathBuf::from(appdata)
                    .join("ShirtCustomizer")
                    .join("config.json")
            })
        }
        #[cfg(not(target_os = "windows"))]
        {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("shirt-customizer")
                    .join("config.json")
            })
        }
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .map(|json| Self::from_json(&json))
            .unwrap_or_default()
    }

    /// Parse config JSON, falling back to defaults when it is unusable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<AppConfig>(json) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                bevy::log::warn!("Ignoring unreadable config: {}", e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if !self.ui_scale.is_finite() {
            self.ui_scale = default_ui_scale();
        }
        self.ui_scale = self.ui_scale.clamp(MIN_UI_SCALE, MAX_UI_SCALE);
        if !(self.window_size.0 > 0.0 && self.window_size.1 > 0.0) {
            self.window_size = default_window_size();
        }
        self
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            // Create parent directories if needed
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            match serde_json::to_string_pretty(self) {
                Ok(json) => {
                    if let Err(e) = fs::write(&path, json) {
                        bevy::log::warn!("Failed to save config to {}: {}", path.display(), e);
                    }
                }
                Err(e) => bevy::log::warn!("Failed to serialize config: {}", e),
            }
        }
    }

    /// Step the UI scale by `delta`, returning whether it changed
    pub fn adjust_ui_scale(&mut self, delta: f32) -> bool {
        let scaled = (self.ui_scale + delta).clamp(MIN_UI_SCALE, MAX_UI_SCALE);
        let changed = scaled != self.ui_scale;
        self.ui_scale = scaled;
        changed
    }

    pub fn reset_ui_scale(&mut self) -> bool {
        let changed = self.ui_scale != default_ui_scale();
        self.ui_scale = default_ui_scale();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_config_falls_back() {
        assert_eq!(AppConfig::from_json("{ not json"), AppConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{ "ui_scale": 1.5 }"#);
        assert_eq!(config.ui_scale, 1.5);
        assert_eq!(config.window_size, default_window_size());
    }

    #[test]
    fn test_out_of_range_values_sanitized() {
        let config = AppConfig::from_json(r#"{ "ui_scale": 9.0, "window_size": [0.0, -3.0] }"#);
        assert_eq!(config.ui_scale, MAX_UI_SCALE);
        assert_eq!(config.window_size, default_window_size());
    }

    #[test]
    fn test_ui_scale_steps_are_bounded() {
        let mut config = AppConfig::default();
        assert!(config.adjust_ui_scale(0.25));
        assert_eq!(config.ui_scale, 1.25);
        for _ in 0..10 {
            config.adjust_ui_scale(0.25);
        }
        assert_eq!(config.ui_scale, MAX_UI_SCALE);
        assert!(!config.adjust_ui_scale(0.25));
        assert!(config.reset_ui_scale());
        assert!(!config.reset_ui_scale());
    }
}
