//! Application configuration
//!
//! Loaded from `config.toml` in the user's config directory
//! (`~/.config/megaphone/config.toml` on Linux) or from the path in
//! `MEGAPHONE_CONFIG`. A missing file means defaults.

use crate::{MegaphoneError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "MEGAPHONE_CONFIG";

/// Longest a notice may stay on screen, in seconds
pub const MAX_NOTIFICATION_SECS: f32 = 60.0;

const DEFAULT_NOTIFICATION_SECS: f32 = 2.0;

/// Window geometry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 640.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MegaphoneConfig {
    pub window: WindowConfig,

    /// How long validation notices stay on screen, in seconds
    pub notification_secs: f32,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for MegaphoneConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            notification_secs: DEFAULT_NOTIFICATION_SECS,
            log_filter: "megaphone=debug,info".to_string(),
        }
    }
}

impl MegaphoneConfig {
    /// Load from the default location, falling back to defaults when absent
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// `MEGAPHONE_CONFIG` if set, else `<config dir>/megaphone/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("megaphone").join("config.toml")))
    }

    /// Load and validate a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MegaphoneError::IOError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_toml(&content).map_err(|e| {
            MegaphoneError::ConfigError(format!("{}: {}", path.display(), e))
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| MegaphoneError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the window size
    pub fn with_window_size(mut self, width: f32, height: f32) -> Self {
        self.window = WindowConfig { width, height };
        self
    }

    /// Set how long notices stay on screen
    ///
    /// Not validated here; [`notification_duration`](Self::notification_duration)
    /// caps it at [`MAX_NOTIFICATION_SECS`] and falls back to the default when
    /// it is not a positive, representable duration.
    pub fn with_notification_secs(mut self, secs: f32) -> Self {
        self.notification_secs = secs;
        self
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.notification_secs)
            .ok()
            .filter(|d| !d.is_zero())
            .map(|d| d.min(Duration::from_secs_f32(MAX_NOTIFICATION_SECS)))
            .unwrap_or(Duration::from_secs_f32(DEFAULT_NOTIFICATION_SECS))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(MegaphoneError::ConfigError(format!(
                "Window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        if !(self.notification_secs > 0.0 && self.notification_secs <= MAX_NOTIFICATION_SECS) {
            return Err(MegaphoneError::ConfigError(format!(
                "notification_secs must be in (0, {}], got {}",
                MAX_NOTIFICATION_SECS, self.notification_secs
            )));
        }

        Ok(())
    }
}
