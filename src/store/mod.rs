//! Timecard persistence module
//!
//! Reads and writes the timecard document as pretty-printed JSON.
//! Writes go to a temporary file next to the target which is then renamed
//! over it, so a failed save leaves the previous document intact.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, TimecardError};
use crate::models::Timecard;

/// File-backed storage for a single timecard document
#[derive(Debug, Clone)]
pub struct TimecardStore {
    path: PathBuf,
}

impl TimecardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a document is already present
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load and validate the document
    pub fn load(&self) -> Result<Timecard> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(TimecardError::NotFound(self.path.clone()))
            }
            Err(e) => return Err(TimecardError::Io(e)),
        };

        let timecard: Timecard =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;

        timecard.normalize().map_err(|reason| self.corrupt(reason))
    }

    /// Replace the document on disk with `timecard`
    pub fn save(&self, timecard: &Timecard) -> Result<()> {
        let json = serde_json::to_string_pretty(timecard)
            .map_err(|e| self.write_error(io::Error::other(e)))?;

        write_atomic(&self.path, json.as_bytes(), |file, bytes| {
            file.write_all(bytes)
        })
        .map_err(|e| self.write_error(e))
    }

    fn corrupt(&self, reason: String) -> TimecardError {
        TimecardError::CorruptDocument {
            path: self.path.clone(),
            reason,
        }
    }

    fn write_error(&self, source: io::Error) -> TimecardError {
        TimecardError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Write `bytes` to a sibling temp file with `write`, sync it, then rename it
/// over `path`. The temp file is removed if any step fails.
fn write_atomic<F>(path: &Path, bytes: &[u8], write: F) -> io::Result<()>
where
    F: FnOnce(&mut File, &[u8]) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    write(tmp.as_file_mut(), bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
