//! Storage infrastructure: the filesystem the settings files live on.
//!
//! The load and save use cases only need three things from a filesystem:
//! "does this file exist", "give me a reader" and "give me a truncating
//! writer".  [`SettingsFs`] captures exactly that, so the same use-case code
//! runs against:
//!
//! - [`disk::DiskFs`] – a directory on the host, standing in for the device
//!   flash (device paths like `/YO3HJV.ini` resolve under its root).
//! - [`memory::MemoryFs`] – an in-memory map, for tests and dry runs.
//!
//! Streams are closed by dropping them, which also covers every early-return
//! path in the callers.

use std::io::{self, BufRead, Write};

pub mod disk;
pub mod memory;

pub use disk::DiskFs;
pub use memory::MemoryFs;

/// Filesystem capability consumed by the load and save use cases.
///
/// Paths are device-style strings (`/W1AW.ini`), not host paths.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsFs {
    /// Returns `true` if a file exists at `path`.
    fn exists(&self, path: &str) -> bool;
    /// Opens `path` for reading.
    fn open_read(&self, path: &str) -> io::Result<Box<dyn BufRead>>;
    /// Creates or truncates `path` and opens it for writing.
    fn open_write(&self, path: &str) -> io::Result<Box<dyn Write>>;
}

impl<T: SettingsFs + ?Sized> SettingsFs for &T {
    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }

    fn open_read(&self, path: &str) -> io::Result<Box<dyn BufRead>> {
        (**self).open_read(path)
    }

    fn open_write(&self, path: &str) -> io::Result<Box<dyn Write>> {
        (**self).open_write(path)
    }
}
