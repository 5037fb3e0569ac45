//! Configuration persistence
//!
//! Stores user preferences in `~/.config/labelfast/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Layout direction for the correction area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
    /// Pick per sentence from its script
    #[default]
    Auto,
}

impl std::str::FromStr for TextDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ltr" => Ok(TextDirection::Ltr),
            "rtl" => Ok(TextDirection::Rtl),
            "auto" => Ok(TextDirection::Auto),
            other => Err(format!("unknown direction '{}' (expected ltr, rtl or auto)", other)),
        }
    }
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme id (e.g. "default-light", "default-dark")
    pub theme: String,
    /// TTF/OTF font used for all text; must cover the sentences' script
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    pub window_width: u32,
    pub window_height: u32,
    pub direction: TextDirection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "default-light".to_string(),
            font_path: None,
            font_size: 20.0,
            window_width: 960,
            window_height: 640,
            direction: TextDirection::Auto,
        }
    }
}

impl AppConfig {
    /// Load config from the user config dir, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; missing or invalid files give defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<AppConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<PathBuf, String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace out-of-range numbers with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(6.0..=128.0).contains(&self.font_size) {
            tracing::warn!("font_size {} out of range, using {}", self.font_size, defaults.font_size);
            self.font_size = defaults.font_size;
        }
        if self.window_width == 0 || self.window_height == 0 {
            tracing::warn!("Window size must be non-zero, using defaults");
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("theme: default-dark\ndirection: rtl\n").unwrap();
        assert_eq!(config.theme, "default-dark");
        assert_eq!(config.direction, TextDirection::Rtl);
        assert_eq!(config.font_size, AppConfig::default().font_size);
        assert_eq!(config.font_path, None);
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("RTL".parse::<TextDirection>(), Ok(TextDirection::Rtl));
        assert_eq!("auto".parse::<TextDirection>(), Ok(TextDirection::Auto));
        assert!("up".parse::<TextDirection>().is_err());
    }

    #[test]
    fn test_sanitize_bad_numbers() {
        let config = AppConfig {
            font_size: 0.0,
            window_width: 0,
            ..AppConfig::default()
        }
        .sanitized();
        assert_eq!(config, AppConfig::default());
    }
}
