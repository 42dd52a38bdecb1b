//! Core domain logic for calendar conflict detection.
//!
//! This crate contains the event model and the pure functions that scan it:
//! - Time arithmetic: `HH:MM` strings to minutes since midnight and back
//! - Pair classification: overlap, adjacency and overlap magnitude
//! - Day scanning: per-date conflict summaries with severity
//! - Conflict index: every date with at least one overlapping pair
//! - Per-event lookups: conflict level and conflicting events for one event
//!
//! Nothing here holds state. Callers own the event list and pass a snapshot
//! into each function; every result is recomputed from scratch.

pub mod category;
mod conflict;
mod day;
pub mod draft;
mod event;
pub mod filter;
mod group;
mod index;
mod level;
pub mod time;
mod types;

#[cfg(test)]
mod fixtures;

pub use category::{Category, CategoryLookup, CategoryTable};
pub use conflict::{ConflictKind, PairConflict, classify_pair};
pub use day::{ConflictRecord, DayConflictSummary, DayScan, Severity, scan_day};
pub use draft::{DraftErrors, DraftField, DraftRules, EventDraft};
pub use event::Event;
pub use filter::EventFilter;
pub use group::group_by_date;
pub use index::{ConflictIndex, build_conflict_index};
pub use level::{ConflictLevel, conflicting_events, event_conflict_level};
pub use time::{TimeError, add_minutes, format_minutes, to_minutes};
pub use types::{EventId, ValidationError};
