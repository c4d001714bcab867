//! # repeater-core
//!
//! Shared library for the repeater controller's INI configuration files.
//!
//! This crate does no filesystem access of its own.  It works on
//! [`std::io::BufRead`] and [`std::io::Write`] so the same code runs against
//! the device flash, a desktop directory, or an in-memory buffer in tests.
//!
//! # Architecture overview
//!
//! A settings file is a flat list of `key=value` lines.  Loading one goes
//! through three stages, each in its own module:
//!
//! - **`domain`** – The [`RepeaterSettings`] record that holds every tunable
//!   value, and the [`FileGate`] that decides whether a filename is allowed to
//!   overwrite it.  A file named after a different callsign is rejected before
//!   it is ever opened.
//!
//! - **`ini`** – The line reader that turns a text stream into
//!   [`IniEntry`] pairs (skipping comments and blank lines), and the matching
//!   line writer.
//!
//! - **`registry`** – The table of every recognized key: its aliases, value
//!   kind, and which field of [`RepeaterSettings`] it reads and writes.  Both
//!   applying a loaded file and serializing the current settings walk this one
//!   table, so the two directions cannot drift apart.

pub mod domain;
pub mod ini;
pub mod registry;

// Re-export the most-used types at the crate root so callers can write
// `repeater_core::FileGate` instead of `repeater_core::domain::gate::FileGate`.
pub use domain::gate::{Admission, CandidateFile, FileGate, GateError};
pub use domain::settings::RepeaterSettings;
pub use ini::reader::{parse_str, IniEntry, IniReader};
pub use ini::writer::write_lines;
pub use registry::{Applied, Section, SettingRecord, SettingsRegistry, ValueKind};
