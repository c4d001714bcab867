//! SaveSettingsUseCase: write the canonical settings file.
//!
//! The destination is truncated on open and written line by line.  A failure
//! part-way through leaves whatever was already written; nothing is staged or
//! renamed.

use repeater_core::{write_lines, RepeaterSettings, SettingsRegistry};
use thiserror::Error;
use tracing::info;

use crate::infrastructure::storage::SettingsFs;

/// Error type for settings save operations.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to open file for writing {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing failed after the file was opened; it may be truncated.
    #[error("failed writing {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Summary of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: String,
    /// Physical lines written, including the section headers.
    pub lines: usize,
}

/// Writes `settings` to `path` on `fs` in canonical order.
///
/// No filename gate is applied: the caller picks the destination.
///
/// # Errors
///
/// Returns [`SaveError::Open`] if the destination cannot be created and
/// [`SaveError::Write`] if writing fails afterwards.
pub fn save_settings<F>(
    fs: &F,
    registry: &SettingsRegistry,
    path: &str,
    settings: &RepeaterSettings,
) -> Result<SaveReport, SaveError>
where
    F: SettingsFs + ?Sized,
{
    let mut stream = fs.open_write(path).map_err(|source| SaveError::Open {
        path: path.to_string(),
        source,
    })?;

    info!("Saving settings to: {path}");
    let lines = write_lines(&mut stream, registry.serialize(settings)).map_err(|source| {
        SaveError::Write {
            path: path.to_string(),
            source,
        }
    })?;

    Ok(SaveReport {
        path: path.to_string(),
        lines,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
