//! ConfigService: the `load`/`save` façade over the settings use cases.
//!
//! The controller only cares whether a load or save worked, so the façade
//! returns `bool` and logs the reason on failure.  Callers that need the
//! reason use [`ConfigService::load_settings`] / [`ConfigService::save_settings`].

use repeater_core::{RepeaterSettings, SettingsRegistry};
use tracing::{error, warn};

use super::load_settings::{load_settings, LoadError, LoadReport};
use super::save_settings::{save_settings, SaveError, SaveReport};
use crate::infrastructure::storage::SettingsFs;

/// Loads and saves settings files on one filesystem.
pub struct ConfigService<F: SettingsFs> {
    fs: F,
    registry: SettingsRegistry,
}

impl<F: SettingsFs> ConfigService<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            registry: SettingsRegistry::new(),
        }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn registry(&self) -> &SettingsRegistry {
        &self.registry
    }

    /// Loads `filename` onto `settings`.  Returns `false` if the file is
    /// missing, rejected by the gate, or cannot be read.
    pub fn load(&self, filename: &str, settings: &mut RepeaterSettings) -> bool {
        match self.load_settings(filename, settings) {
            Ok(_) => true,
            Err(e @ LoadError::NotFound { .. }) => {
                warn!("{e}");
                false
            }
            Err(e) if e.is_wrong_identity() => {
                error!("wrong identity file, not loading: {e}");
                false
            }
            Err(e) => {
                error!("{e}");
                false
            }
        }
    }

    /// Saves `settings` to `filename`.  Returns `false` if the file cannot be
    /// opened or written.
    pub fn save(&self, filename: &str, settings: &RepeaterSettings) -> bool {
        match self.save_settings(filename, settings) {
            Ok(_) => true,
            Err(e) => {
                error!("{e}");
                false
            }
        }
    }

    pub fn load_settings(
        &self,
        filename: &str,
        settings: &mut RepeaterSettings,
    ) -> Result<LoadReport, LoadError> {
        load_settings(&self.fs, &self.registry, filename, settings)
    }

    pub fn save_settings(
        &self,
        filename: &str,
        settings: &RepeaterSettings,
    ) -> Result<SaveReport, SaveError> {
        save_settings(&self.fs, &self.registry, filename, settings)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
