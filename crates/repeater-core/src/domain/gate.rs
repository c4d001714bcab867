//! Filename admission for settings files.
//!
//! A settings file can rewrite the callsign and every other setting, so the
//! loader only accepts a file whose name ties it to this device:
//!
//! 1. The two bootstrap names, `YO3HJV.ini` and `ESP32_Repeater.ini`, are
//!    always accepted.  They are what a fresh device is provisioned with.
//! 2. Any other file must be named `<callsign>.ini`, where the callsign is the
//!    one currently configured, with filesystem-unsafe characters replaced by
//!    `_` (so `YO3HJV/P` expects `YO3HJV_P.ini`).
//! 3. With no callsign configured, everything else is rejected.
//!
//! Uploads are staged as `<name>.tmp` before being renamed, so one trailing
//! `.tmp` is ignored when matching.  The open itself still targets the path as
//! given.
//!
//! ```rust
//! use repeater_core::{Admission, FileGate, GateError};
//!
//! assert_eq!(FileGate::accept("/YO3HJV.ini", ""), Ok(Admission::DefaultFile));
//! assert_eq!(FileGate::accept("/W1AW.ini", "W1AW"), Ok(Admission::IdentityFile));
//! assert!(matches!(
//!     FileGate::accept("/W1AW.ini", "YO3HJV"),
//!     Err(GateError::NameMismatch { .. })
//! ));
//! ```

use thiserror::Error;
use tracing::debug;

/// Primary bootstrap filename, accepted regardless of identity.
pub const DEFAULT_FILENAME: &str = "YO3HJV.ini";

/// Legacy bootstrap filename, accepted regardless of identity.
pub const LEGACY_DEFAULT_FILENAME: &str = "ESP32_Repeater.ini";

/// Older per-device default name.  Loading it while a callsign is set is
/// reported as a wrong-identity file.
pub const LEGACY_DEVICE_FILENAME: &str = "YO3HJV_ESP_Repeater.ini";

/// Extension of every settings file.
pub const INI_EXTENSION: &str = ".ini";

/// Suffix of a staged upload, ignored when matching.
pub const TMP_SUFFIX: &str = ".tmp";

/// Characters replaced by `_` when a callsign becomes a filename.
const UNSAFE_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Why a file was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The primary bootstrap file (`YO3HJV.ini`).
    DefaultFile,
    /// The legacy bootstrap file (`ESP32_Repeater.ini`).
    LegacyDefaultFile,
    /// The file named after the configured callsign.
    IdentityFile,
}

/// Why a file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// A callsign is configured but the file is the old per-device default,
    /// which would overwrite it with another station's settings.
    #[error("wrong identity file: callsign is {identity}, expected {expected}")]
    WrongIdentity { identity: String, expected: String },

    /// The file name matches neither a bootstrap name nor the callsign.
    #[error("file does not match expected format: {file}")]
    NameMismatch { file: String },
}

/// A filename under evaluation.
///
/// Holds the raw path plus the two derived names the gate compares.  Never
/// persisted; build one per decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile<'a> {
    /// The path exactly as requested.
    pub path: &'a str,
    /// Text after the last `/`, or the whole path if there is none.
    pub basename: &'a str,
    /// `basename` with one trailing `.tmp` removed.  Only used for matching.
    pub match_name: &'a str,
}

impl<'a> CandidateFile<'a> {
    /// Splits `path` into the names the gate matches on.
    pub fn new(path: &'a str) -> Self {
        let basename = path.rsplit_once('/').map_or(path, |(_, name)| name);
        let match_name = basename.strip_suffix(TMP_SUFFIX).unwrap_or(basename);
        Self {
            path,
            basename,
            match_name,
        }
    }

    /// Returns `true` if the candidate carried a staging `.tmp` suffix.
    pub fn is_staged(&self) -> bool {
        self.match_name.len() != self.basename.len()
    }
}

/// Decides which files may be applied to the settings record.
///
/// Stateless: the decision depends only on the candidate's normalized
/// basename and the identity passed in.
pub struct FileGate;

impl FileGate {
    /// Decides whether `path` may be loaded while `identity` is the configured
    /// callsign.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::WrongIdentity`] when a callsign is set and the file
    /// is the old per-device default, and [`GateError::NameMismatch`] for any
    /// other rejected name.
    pub fn accept(path: &str, identity: &str) -> Result<Admission, GateError> {
        let candidate = CandidateFile::new(path);
        if candidate.is_staged() {
            debug!(
                "ignoring staging suffix for matching: {}",
                candidate.match_name
            );
        }
        let decision = Self::decide(&candidate, identity);
        debug!(path, identity, ?decision, "settings file gate decision");
        decision
    }

    fn decide(candidate: &CandidateFile<'_>, identity: &str) -> Result<Admission, GateError> {
        let name = candidate.match_name;

        if name == DEFAULT_FILENAME {
            return Ok(Admission::DefaultFile);
        }
        if name == LEGACY_DEFAULT_FILENAME {
            return Ok(Admission::LegacyDefaultFile);
        }

        if let Some(expected) = expected_filename(identity) {
            if name == expected {
                return Ok(Admission::IdentityFile);
            }
            // Only the old per-device name gets the identity diagnostic.
            if name == LEGACY_DEVICE_FILENAME {
                return Err(GateError::WrongIdentity {
                    identity: identity.to_string(),
                    expected,
                });
            }
        }

        Err(GateError::NameMismatch {
            file: name.to_string(),
        })
    }

    /// Convenience wrapper returning only the allow/deny bit.
    pub fn is_allowed(path: &str, identity: &str) -> bool {
        Self::accept(path, identity).is_ok()
    }
}

/// Replaces each of `/ \ : * ? " < > |` in `identity` with `_`.
pub fn sanitize_identity(identity: &str) -> String {
    identity
        .chars()
        .map(|c| {
            if UNSAFE_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Returns the settings filename for `identity`, or `None` when no identity
/// is configured.
pub fn expected_filename(identity: &str) -> Option<String> {
    if identity.is_empty() {
        None
    } else {
        Some(format!("{}{INI_EXTENSION}", sanitize_identity(identity)))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
