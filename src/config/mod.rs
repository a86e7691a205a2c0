// SPDX-License-Identifier: MPL-2.0
//! This module handles the cache configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use frame_cache::config::{self, Config};
//! use frame_cache::{FrameCache, RgbaFrame};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.frame_cache_mb = Some(256);
//!
//! // Build a cache from it
//! let cache: FrameCache<RgbaFrame> = FrameCache::from_config(&config);
//! assert_eq!(cache.max_bytes(), 256 * 1024 * 1024);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::cache::{ByteBudget, EventLogCapacity, FrameCacheMb};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "frame_cache";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Frame cache budget in megabytes; 0 disables eviction.
    #[serde(default)]
    pub frame_cache_mb: Option<u32>,
    /// Number of cache events to keep; absent disables the event log.
    #[serde(default)]
    pub event_log_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_cache_mb: Some(DEFAULT_FRAME_CACHE_MB),
            event_log_capacity: None,
        }
    }
}

impl Config {
    /// Returns the configured cache size, clamped to the valid range.
    #[must_use]
    pub fn frame_cache_size(&self) -> FrameCacheMb {
        FrameCacheMb::new(self.frame_cache_mb.unwrap_or(DEFAULT_FRAME_CACHE_MB))
    }

    /// Returns the configured cache size as a byte budget.
    #[must_use]
    pub fn byte_budget(&self) -> ByteBudget {
        self.frame_cache_size().into()
    }

    /// Returns the event log capacity, or `None` if the log is disabled.
    #[must_use]
    pub fn event_log(&self) -> Option<EventLogCapacity> {
        self.event_log_capacity.map(EventLogCapacity::new)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "invalid cache settings, using defaults"
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::BYTES_PER_MB;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            frame_cache_mb: Some(128),
            event_log_capacity: Some(500),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn missing_fields_fall_back_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write empty toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.frame_cache_mb, None);
        assert_eq!(loaded.frame_cache_size().value(), DEFAULT_FRAME_CACHE_MB);
        assert!(loaded.event_log().is_none());
    }

    #[test]
    fn default_config_budgets_default_size() {
        let config = Config::default();
        assert_eq!(
            config.byte_budget().value(),
            DEFAULT_FRAME_CACHE_MB as usize * BYTES_PER_MB
        );
    }

    #[test]
    fn zero_megabytes_means_unbounded() {
        let config = Config {
            frame_cache_mb: Some(0),
            event_log_capacity: None,
        };
        assert!(config.byte_budget().is_unbounded());
    }

    #[test]
    fn oversized_values_are_clamped() {
        let config = Config {
            frame_cache_mb: Some(u32::MAX),
            event_log_capacity: Some(usize::MAX),
        };
        assert_eq!(config.frame_cache_size().value(), MAX_FRAME_CACHE_MB);
        assert_eq!(
            config.event_log().map(EventLogCapacity::value),
            Some(MAX_EVENT_LOG_CAPACITY)
        );
    }
}
