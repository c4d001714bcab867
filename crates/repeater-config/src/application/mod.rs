//! Application layer use cases for the settings tool.
//!
//! Use cases in this layer orchestrate `repeater_core` (gate, reader,
//! registry) over a [`SettingsFs`](crate::infrastructure::storage::SettingsFs)
//! and contain no direct filesystem calls.
//!
//! # Sub-modules
//!
//! - **`load_settings`** – Gate a filename, read the file and apply every
//!   recognized pair onto a settings record.
//! - **`save_settings`** – Write the canonical file for a settings record.
//! - **`service`** – [`ConfigService`], the `load`/`save` → `bool` façade the
//!   rest of the firmware calls.

pub mod load_settings;
pub mod save_settings;
pub mod service;

pub use load_settings::{load_settings, LoadError, LoadReport};
pub use save_settings::{save_settings, SaveError, SaveReport};
pub use service::ConfigService;
