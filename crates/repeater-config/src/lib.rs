//! repeater-config library entry point.
//!
//! Re-exports the application and infrastructure layers so that integration
//! tests in `tests/` and the `repeater-config` binary share one module tree.

pub mod application;
pub mod infrastructure;
