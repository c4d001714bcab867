//! Domain entities for the repeater configuration.
//!
//! Pure data and rules with no I/O: the settings record itself and the
//! filename gate that protects it.  Everything here can be unit-tested
//! without a filesystem.

/// The record holding every configurable value of the controller.
pub mod settings;

/// Identity-based filename admission.
///
/// See [`gate::FileGate`] for the main type.
pub mod gate;
