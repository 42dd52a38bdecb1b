//! Storage layer for clash.
//!
//! The conflict engine in `clash-core` is stateless; this crate owns the
//! event list it is run against.
//!
//! - [`Calendar`] is the in-memory container. Every mutation goes through
//!   it, and callers pass `calendar.events()` to the engine afterwards.
//! - [`EventFile`] loads and saves a calendar as a JSON array of events,
//!   written verbatim.
//!
//! # File Format
//!
//! The file is a pretty-printed JSON array of event objects, in insertion
//! order. Dates are `YYYY-MM-DD` strings and times `HH:MM` strings; times are
//! not validated on load, so a hand-edited file with a bad time loads fine and
//! fails later when it is scanned.

mod calendar;
mod file;

use std::path::PathBuf;

use clash_core::{DraftErrors, EventId, ValidationError};
use thiserror::Error;

pub use calendar::Calendar;
pub use file::EventFile;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the events file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The events file is not a valid event list.
    #[error("invalid events file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// No event has the given id.
    #[error("event not found: {0}")]
    NotFound(EventId),
    /// An event with the given id already exists.
    #[error("duplicate event id: {0}")]
    DuplicateId(EventId),
    /// An event id failed validation.
    #[error("invalid event id: {0}")]
    InvalidId(#[from] ValidationError),
    /// The draft failed validation.
    #[error("invalid event: {0}")]
    InvalidDraft(#[from] DraftErrors),
}
