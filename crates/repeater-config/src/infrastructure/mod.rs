//! Infrastructure layer for the settings tool.
//!
//! Contains the filesystem adapters the load and save use cases run on.
//!
//! **Dependency rule**: this layer may depend on `repeater_core`, but MUST NOT
//! import from `application`.

pub mod storage;
