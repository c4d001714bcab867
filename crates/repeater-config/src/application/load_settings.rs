//! LoadSettingsUseCase: gate, read and apply one settings file.
//!
//! ```text
//! exists? ──no──► NotFound
//!   │yes
//! FileGate(path, current callsign) ──deny──► Unauthorized
//!   │allow
//! open ──fail──► Open
//!   │
//! IniReader ─► SettingsRegistry::apply (per pair) ──read error──► Read
//! ```
//!
//! The gate runs before the file is opened, so a rejected file is never read.
//! Pairs are applied as they are read; a read error part-way through leaves
//! the pairs before it applied.

use repeater_core::{
    Admission, FileGate, GateError, IniReader, RepeaterSettings, SettingsRegistry,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::storage::SettingsFs;

/// Error type for settings load operations.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The filename is not allowed for the configured callsign.
    #[error("refusing to load {path}: {source}")]
    Unauthorized {
        path: String,
        #[source]
        source: GateError,
    },

    #[error("failed to open file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Returns `true` for the "file belongs to another callsign" rejection.
    pub fn is_wrong_identity(&self) -> bool {
        matches!(
            self,
            LoadError::Unauthorized {
                source: GateError::WrongIdentity { .. },
                ..
            }
        )
    }
}

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub path: String,
    pub admission: Admission,
    /// Pairs that matched a setting.
    pub applied: usize,
    /// Pairs with an unrecognized key.
    pub ignored: usize,
}

/// Loads `path` from `fs` onto `settings`.
///
/// The gate is evaluated against `settings.callsign` as it is before the load.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist,
/// [`LoadError::Unauthorized`] if the gate rejects the name, and
/// [`LoadError::Open`] / [`LoadError::Read`] for I/O failures.
pub fn load_settings<F>(
    fs: &F,
    registry: &SettingsRegistry,
    path: &str,
    settings: &mut RepeaterSettings,
) -> Result<LoadReport, LoadError>
where
    F: SettingsFs + ?Sized,
{
    if !fs.exists(path) {
        return Err(LoadError::NotFound {
            path: path.to_string(),
        });
    }

    let admission =
        FileGate::accept(path, &settings.callsign).map_err(|source| LoadError::Unauthorized {
            path: path.to_string(),
            source,
        })?;
    debug!(?admission, "settings file admitted: {path}");

    let stream = fs.open_read(path).map_err(|source| LoadError::Open {
        path: path.to_string(),
        source,
    })?;

    info!("Applying settings from: {path}");
    let mut report = LoadReport {
        path: path.to_string(),
        admission,
        applied: 0,
        ignored: 0,
    };
    let mut entries = IniReader::new(stream);
    for entry in entries.by_ref() {
        let entry = entry.map_err(|source| LoadError::Read {
            path: path.to_string(),
            source,
        })?;
        if registry.apply(settings, &entry.key, &entry.value).is_set() {
            report.applied += 1;
        } else {
            report.ignored += 1;
        }
    }

    info!(
        "loaded {path}: {} lines, {} settings applied, {} unknown keys ignored",
        entries.lines_read(),
        report.applied,
        report.ignored
    );
    Ok(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
