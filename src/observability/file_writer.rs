//! Rotating file writer for trace output.
//!
//! A thread-safe line writer that rotates the file when it exceeds a size
//! threshold, keeping a fixed number of timestamped backups so trace output
//! never grows without bound.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of backup files retained after rotation.
const MAX_BACKUP_FILES: usize = 2;

/// Thread-safe rotating line writer.
///
/// The file opens lazily on first write, so construction succeeds even when
/// the target is not yet writable. When the file exceeds the size threshold it
/// is renamed with a timestamp suffix and a fresh file is started; backups
/// beyond the retention count are removed.
pub struct RotatingFileWriter {
    file_path: PathBuf,
    writer: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer for the given path without opening the file.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first if the file has grown too large.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be opened, renamed,
    /// or written.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("trace writer lock poisoned"))?;

        if self.needs_rotation() {
            // Drop the handle before renaming the file underneath it.
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(file);
        }

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{line}")?;
        }
        Ok(())
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path)
            .map(|meta| meta.len() > MAX_FILE_SIZE_BYTES)
            .unwrap_or(false)
    }

    fn rotate(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().timestamp();
        let backup = self
            .file_path
            .with_extension(format!("json.{timestamp}"));
        fs::rename(&self.file_path, &backup)?;
        self.prune_backups();
        Ok(())
    }

    /// Removes the oldest backups beyond the retention count. Best-effort.
    fn prune_backups(&self) {
        let Some(parent) = self.file_path.parent() else {
            return;
        };
        let Some(stem) = self.file_path.file_stem().and_then(|s| s.to_str()) else {
            return;
        };
        let Ok(entries) = fs::read_dir(parent) else {
            return;
        };

        let mut backups: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| {
                        name.starts_with(stem) && name.contains(".json.") && path != &self.file_path
                    })
            })
            .collect();

        backups.sort();
        while backups.len() > MAX_BACKUP_FILES {
            let oldest = backups.remove(0);
            let _ = fs::remove_file(oldest);
        }
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_to_the_target_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = RotatingFileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn creation_does_not_touch_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-written.json");
        let _writer = RotatingFileWriter::new(path.clone());
        assert!(!path.exists());
    }
}
