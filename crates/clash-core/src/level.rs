//! Single-event conflict lookups.
//!
//! Unlike the day scan, these compare the queried event against every other
//! event on its date, so an overlap between non-neighbours is found here even
//! when [`crate::scan_day`] does not report it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conflict::classify_pair;
use crate::event::Event;
use crate::time::TimeError;

/// Highlight level for one event in list and detail views.
///
/// Any overlap with another event on the same day is `High`; there is no
/// graded level for single events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictLevel {
    High,
}

impl fmt::Display for ConflictLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
        }
    }
}

/// Other events on `event`'s date that overlap it.
///
/// `events` may contain the whole calendar; events on other dates and events
/// sharing `event`'s id are skipped. Adjacent events are not conflicts.
pub fn conflicting_events<'a, I>(event: &Event, events: I) -> Result<Vec<&'a Event>, TimeError>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut conflicts = Vec::new();
    for other in events {
        if other.date != event.date || other.id == event.id {
            continue;
        }
        if classify_pair(event, other)?.is_overlap() {
            conflicts.push(other);
        }
    }
    Ok(conflicts)
}

/// Conflict level of `event` among the events of its day.
pub fn event_conflict_level<'a, I>(
    event: &Event,
    day_events: I,
) -> Result<Option<ConflictLevel>, TimeError>
where
    I: IntoIterator<Item = &'a Event>,
{
    let conflicts = conflicting_events(event, day_events)?;
    Ok((!conflicts.is_empty()).then_some(ConflictLevel::High))
}
