//! Configuration management for chime.
//!
//! Configuration is loaded from multiple sources with precedence:
//! 1. Environment variables (CHIME_*)
//! 2. Config file (~/.config/chime/config.toml)
//! 3. Default values

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Host API settings
    #[serde(default)]
    pub host: HostConfig,

    /// Init check settings
    #[serde(default)]
    pub init_check: InitCheckConfig,

    /// Celebration settings
    #[serde(default)]
    pub celebration: CelebrationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Base URL for the host API
    #[serde(default = "default_host_url")]
    pub url: String,
}

/// Where init-check notifications are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyRoute {
    /// In-band toast via the host TUI
    #[default]
    Toast,
    /// OS-level desktop notification
    Desktop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitCheckConfig {
    /// Marker file checked in the project root
    #[serde(default = "default_marker_filename")]
    pub marker_filename: String,

    /// Delivery route for the notification
    #[serde(default)]
    pub route: NotifyRoute,

    /// Toast display duration in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// macOS notification sound
    #[serde(default = "default_sound")]
    pub sound: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrationConfig {
    /// URL scheme fired when a top-level session goes idle
    #[serde(default = "default_celebration_url")]
    pub url: String,
}

fn default_host_url() -> String {
    "http://127.0.0.1:4096".to_string()
}

fn default_marker_filename() -> String {
    "AGENTS.md".to_string()
}

fn default_toast_duration_ms() -> u64 {
    5000
}

fn default_sound() -> String {
    "Sosumi".to_string()
}

fn default_celebration_url() -> String {
    "raycast://confetti".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            url: default_host_url(),
        }
    }
}

impl Default for InitCheckConfig {
    fn default() -> Self {
        Self {
            marker_filename: default_marker_filename(),
            route: NotifyRoute::default(),
            toast_duration_ms: default_toast_duration_ms(),
            sound: default_sound(),
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            url: default_celebration_url(),
        }
    }
}

impl NotifierConfig {
    /// Load configuration with standard precedence.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Default config file path (~/.config/chime/config.toml).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("chime").join("config.toml"))
    }

    /// Apply CHIME_* environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("CHIME_HOST_URL") {
            self.host.url = url;
        }
        if let Ok(marker) = std::env::var("CHIME_MARKER_FILE") {
            self.init_check.marker_filename = marker;
        }
        if let Ok(url) = std::env::var("CHIME_CELEBRATION_URL") {
            self.celebration.url = url;
        }
        if let Ok(route) = std::env::var("CHIME_NOTIFY_ROUTE") {
            match route.as_str() {
                "toast" => self.init_check.route = NotifyRoute::Toast,
                "desktop" => self.init_check.route = NotifyRoute::Desktop,
                other => debug!("Ignoring unknown CHIME_NOTIFY_ROUTE: {}", other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NotifierConfig::default();
        assert_eq!(config.init_check.marker_filename, "AGENTS.md");
        assert_eq!(config.init_check.route, NotifyRoute::Toast);
        assert_eq!(config.init_check.toast_duration_ms, 5000);
        assert_eq!(config.celebration.url, "raycast://confetti");
        assert_eq!(config.host.url, "http://127.0.0.1:4096");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[init_check]
route = "desktop"
sound = "Glass"

[celebration]
url = "raycast://confetti?emojis=🎉"
"#,
        )
        .unwrap();

        let config = NotifierConfig::load_from(&path).unwrap();
        assert_eq!(config.init_check.route, NotifyRoute::Desktop);
        assert_eq!(config.init_check.sound, "Glass");
        // Unset sections and fields fall back to defaults.
        assert_eq!(config.init_check.marker_filename, "AGENTS.md");
        assert_eq!(config.celebration.url, "raycast://confetti?emojis=🎉");
        assert_eq!(config.host.url, "http://127.0.0.1:4096");
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(
            NotifierConfig::load_from(&path),
            Err(Error::InvalidConfig(_))
        ));
    }
}
