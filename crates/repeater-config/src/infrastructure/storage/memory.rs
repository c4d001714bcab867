//! In-memory settings filesystem.
//!
//! Lets tests and dry runs exercise the load and save paths without touching
//! disk.  Two switches simulate the device flash misbehaving:
//!
//! - [`MemoryFs::read_only`] makes every `open_write` fail, like a flash
//!   partition mounted read-only.
//! - [`MemoryFs::with_capacity_limit`] makes writes fail once a file reaches a
//!   byte limit, leaving the truncated content behind, like a full partition.

use std::collections::HashMap;
use std::io::{self, BufRead, Cursor, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use super::SettingsFs;

type FileMap = HashMap<String, Vec<u8>>;

/// [`SettingsFs`] over a shared in-memory map.
///
/// Clones share the same files, so a test can keep one handle for inspection
/// while the use case owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<FileMap>>,
    read_only: bool,
    capacity_limit: Option<usize>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every `open_write`.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Fails writes that would grow a file beyond `bytes`.
    pub fn with_capacity_limit(mut self, bytes: usize) -> Self {
        self.capacity_limit = Some(bytes);
        self
    }

    /// Stores `contents` at `path`, replacing any previous file.
    pub fn insert(&self, path: &str, contents: impl Into<Vec<u8>>) {
        if let Ok(mut files) = lock(&self.files) {
            files.insert(normalize(path), contents.into());
        }
    }

    /// Returns the file at `path` as text, if it exists.
    pub fn contents(&self, path: &str) -> Option<String> {
        let files = lock(&self.files).ok()?;
        files
            .get(&normalize(path))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl SettingsFs for MemoryFs {
    fn exists(&self, path: &str) -> bool {
        lock(&self.files)
            .map(|files| files.contains_key(&normalize(path)))
            .unwrap_or(false)
    }

    fn open_read(&self, path: &str) -> io::Result<Box<dyn BufRead>> {
        let files = lock(&self.files)?;
        let bytes = files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })?;
        Ok(Box::new(Cursor::new(bytes)))
    }

    fn open_write(&self, path: &str) -> io::Result<Box<dyn Write>> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("read-only filesystem: {path}"),
            ));
        }
        let key = normalize(path);
        lock(&self.files)?.insert(key.clone(), Vec::new());
        Ok(Box::new(MemoryWriter {
            files: Arc::clone(&self.files),
            path: key,
            capacity_limit: self.capacity_limit,
        }))
    }
}

/// Writer appending straight into the shared map, so partial writes are
/// visible exactly as they would be on flash.
struct MemoryWriter {
    files: Arc<Mutex<FileMap>>,
    path: String,
    capacity_limit: Option<usize>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut files = lock(&self.files)?;
        let file = files.entry(self.path.clone()).or_default();
        let room = self
            .capacity_limit
            .map_or(usize::MAX, |limit| limit.saturating_sub(file.len()));
        if room == 0 && !buf.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("no space left writing {}", self.path),
            ));
        }
        let n = buf.len().min(room);
        file.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

fn lock(files: &Mutex<FileMap>) -> io::Result<MutexGuard<'_, FileMap>> {
    files
        .lock()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory filesystem lock poisoned"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
