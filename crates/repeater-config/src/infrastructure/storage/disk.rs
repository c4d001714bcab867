//! Directory-backed settings filesystem.
//!
//! The device keeps its settings files at the root of its flash partition,
//! so a device path such as `/W1AW.ini` maps to `<root>/W1AW.ini`.  Paths may
//! name subdirectories but may not climb out of the root.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use super::SettingsFs;

/// [`SettingsFs`] over a host directory.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a device path onto the host directory.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] if `path` is empty or contains
    /// a `..` component.
    pub fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if relative.as_os_str().is_empty() || escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid settings path: {path:?}"),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl SettingsFs for DiskFs {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn open_read(&self, path: &str) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(self.resolve(path)?)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn open_write(&self, path: &str) -> io::Result<Box<dyn Write>> {
        let host_path = self.resolve(path)?;
        if let Some(dir) = host_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(host_path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Read;

    use uuid::Uuid;

    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("repeater_disk_test_{}", Uuid::new_v4()))
    }

    #[test]
    fn test_resolve_strips_leading_slash() {
        let fs = DiskFs::new("/data");
        assert_eq!(fs.resolve("/W1AW.ini").unwrap(), PathBuf::from("/data/W1AW.ini"));
        assert_eq!(fs.resolve("W1AW.ini").unwrap(), PathBuf::from("/data/W1AW.ini"));
    }

    #[test]
    fn test_resolve_rejects_parent_components() {
        let fs = DiskFs::new("/data");
        let err = fs.resolve("/../etc/passwd").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(fs.resolve("/").is_err());
        assert!(!fs.exists("/../W1AW.ini"));
    }

    #[test]
    fn test_write_then_read_round_trip_via_temp_dir() {
        // Arrange
        let root = temp_root();
        let fs = DiskFs::new(&root);

        // Act
        {
            let mut w = fs.open_write("/cfg/W1AW.ini").expect("open for write");
            w.write_all(b"Callsign=W1AW\n").unwrap();
            w.flush().unwrap();
        }
        let mut text = String::new();
        fs.open_read("/cfg/W1AW.ini")
            .expect("open for read")
            .read_to_string(&mut text)
            .unwrap();

        // Assert
        assert!(fs.exists("/cfg/W1AW.ini"));
        assert_eq!(text, "Callsign=W1AW\n");

        // Cleanup
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_open_write_truncates_existing_file() {
        let root = temp_root();
        let fs = DiskFs::new(&root);
        for content in [&b"a=1\nb=2\n"[..], &b"c=3\n"[..]] {
            let mut w = fs.open_write("/W1AW.ini").unwrap();
            w.write_all(content).unwrap();
            w.flush().unwrap();
        }
        let text = std::fs::read_to_string(root.join("W1AW.ini")).unwrap();
        assert_eq!(text, "c=3\n");
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_missing_file_does_not_exist_and_fails_to_open() {
        let fs = DiskFs::new(temp_root());
        assert!(!fs.exists("/YO3HJV.ini"));
        let err = fs.open_read("/YO3HJV.ini").err().expect("open must fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
