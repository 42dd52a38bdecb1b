//! Calendar events as supplied by the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{TimeError, add_minutes, to_minutes};
use crate::types::EventId;

/// A single-day, single-occurrence calendar event.
///
/// The engine only reads `date`, `time` and `duration`; everything else is
/// carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for this event.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// The day this event belongs to, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Start time as `HH:MM`, 24-hour wall clock.
    ///
    /// Kept as the raw string; it is parsed on use so that a malformed value
    /// surfaces as a [`TimeError`] at scan time.
    pub time: String,
    /// Length in minutes.
    pub duration: u32,
    /// Key into the category table.
    pub category: String,
    /// Display colour resolved from the category when the event was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<String>,
}

impl Event {
    /// Start time in minutes since midnight.
    pub fn start_minutes(&self) -> Result<u32, TimeError> {
        to_minutes(&self.time)
    }

    /// End time in minutes since midnight; may exceed 1440.
    pub fn end_minutes(&self) -> Result<u32, TimeError> {
        Ok(self.start_minutes()?.saturating_add(self.duration))
    }

    /// End time formatted as `HH:MM`, without midnight rollover.
    pub fn end_time(&self) -> Result<String, TimeError> {
        add_minutes(&self.time, i64::from(self.duration))
    }

    /// The `HH:MM - HH:MM` range shown next to the title.
    pub fn time_range(&self) -> Result<String, TimeError> {
        Ok(format!("{} - {}", self.time, self.end_time()?))
    }
}
