//! JSON file persistence for a [`Calendar`].

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use clash_core::Event;
use tempfile::NamedTempFile;

use crate::{Calendar, StoreError};

/// A calendar stored as a JSON array on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFile {
    path: PathBuf,
}

impl EventFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the calendar. A missing file is an empty calendar.
    pub fn load(&self) -> Result<Calendar, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "events file missing, starting empty");
                return Ok(Calendar::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let events: Vec<Event> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), events = events.len(), "loaded events");

        Calendar::from_events(events)
    }

    /// Saves the calendar, replacing the file.
    ///
    /// The JSON is written to a temp file in the same directory and renamed
    /// into place, so a failed write leaves the previous file intact. The
    /// temp file is removed when any step fails.
    pub fn save(&self, calendar: &Calendar) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;

        let mut json = serde_json::to_string_pretty(calendar).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        json.push('\n');

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        tmp.write_all(json.as_bytes())
            .map_err(|source| self.io_error(source))?;
        tmp.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        tracing::debug!(path = %self.path.display(), events = calendar.len(), "saved events");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
