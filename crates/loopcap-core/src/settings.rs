//! Persistent storage for duplicate-removal settings
//!
//! Uses JSON file storage in ~/.config/loopcap/dedup.json. The
//! comparison code never reads this store; callers load settings once
//! and pass the configuration into each call explicitly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{DedupConfig, DedupPolicy};
use crate::error::{Error, Result};

/// User-facing duplicate-removal settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DedupSettings {
    /// Whether duplicate removal runs at all; off by default
    pub enabled: bool,
    /// Comparison configuration
    pub config: DedupConfig,
    /// Keep and delay-adjustment policy
    pub policy: DedupPolicy,
}

impl DedupSettings {
    /// Copy with the configuration clamped to its documented ranges
    pub fn clamped(mut self) -> Self {
        self.config = self.config.clamped();
        self
    }
}

/// Settings store with JSON file persistence
pub struct SettingsStore {
    /// Path to the settings file
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store at the default per-user location
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(Self::default_path()?))
    }

    /// Create a store at a specific path
    pub fn with_path(path: PathBuf) -> Self {
        SettingsStore { path }
    }

    /// Get the default settings path (~/.config/loopcap/dedup.json)
    fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(Error::NoConfigDir)?;
        Ok(config_dir.join("loopcap").join("dedup.json"))
    }

    /// Load settings from disk
    ///
    /// A missing file yields the defaults; a corrupt file is reported
    /// and also yields the defaults. Loaded values are clamped to their
    /// documented ranges, so a hand-edited file cannot push the
    /// threshold outside [0,1] or the strides below 1.
    pub fn load(&self) -> DedupSettings {
        if !self.path.exists() {
            debug!("No existing settings at {:?}, using defaults", self.path);
            return DedupSettings::default();
        }
        let settings = match std::fs::read_to_string(&self.path)
            .map_err(Error::from)
            .and_then(|contents| serde_json::from_str(&contents).map_err(Error::from))
        {
            Ok(settings) => {
                info!("Loaded dedup settings from {:?}", self.path);
                settings
            }
            Err(e) => {
                warn!("Failed to load dedup settings, using defaults: {}", e);
                DedupSettings::default()
            }
        };
        settings.clamped()
    }

    /// Save settings to disk, creating the parent directory if needed
    pub fn save(&self, settings: &DedupSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json)?;
        debug!("Saved dedup settings to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DelayAdjust, KeepMode};
    use crate::pixel::ChannelMask;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("dedup.json"));

        let settings = DedupSettings {
            enabled: true,
            config: DedupConfig::default()
                .with_threshold(0.95)
                .with_sample_steps(3, 4)
                .with_tolerance(2)
                .with_channel_mask(ChannelMask::RGBA)
                .with_early_out(false),
            policy: DedupPolicy::new()
                .with_keep_mode(KeepMode::Last)
                .with_delay_adjust(DelayAdjust::Average),
        };
        store.save(&settings).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), DedupSettings::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dedup.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = SettingsStore::with_path(path);
        assert_eq!(store.load(), DedupSettings::default());
    }

    #[test]
    fn test_load_clamps_out_of_range_values() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("dedup.json"));

        let settings = DedupSettings {
            enabled: true,
            config: DedupConfig::default()
                .with_threshold(1.5)
                .with_sample_steps(0, -10)
                .with_tolerance(-5),
            policy: DedupPolicy::default(),
        };
        store.save(&settings).unwrap();

        let loaded = store.load();
        assert!(loaded.enabled);
        assert_eq!(loaded.config.similarity_threshold, 1.0);
        assert_eq!(loaded.config.sample_step_x, 1);
        assert_eq!(loaded.config.sample_step_y, 1);
        assert_eq!(loaded.config.per_channel_tolerance, 0);
    }
}
