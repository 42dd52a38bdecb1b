//! Per-day conflict scanning.
//!
//! A day is scanned by sorting its events by start time and comparing each
//! event only with the one that follows it. Overlaps between events that are
//! not neighbours in that order are not reported: with A 09:00-10:30,
//! B 09:15-09:20 and C 10:00-10:15, the pair (A, C) is never compared. The
//! exhaustive check lives in [`crate::event_conflict_level`].

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::conflict::{ConflictKind, classify_ordered};
use crate::event::Event;
use crate::time::TimeError;

/// Overlap thresholds, in minutes, for each severity step.
const MEDIUM_OVERLAP_MINUTES: u32 = 30;
const HIGH_OVERLAP_MINUTES: u32 = 60;

/// Coarse bucketing of the largest overlap on a day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Map a maximum overlap to a severity.
    ///
    /// 0 is none, 1-29 low, 30-59 medium, 60 and up high.
    #[must_use]
    pub const fn from_overlap(max_overlap_minutes: u32) -> Self {
        match max_overlap_minutes {
            0 => Self::None,
            m if m < MEDIUM_OVERLAP_MINUTES => Self::Low,
            m if m < HIGH_OVERLAP_MINUTES => Self::Medium,
            _ => Self::High,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Two overlapping events on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictRecord<'a> {
    pub date: NaiveDate,
    /// The pair in start-time order.
    pub events: [&'a Event; 2],
    /// Minutes of overlap, always positive.
    pub overlap_minutes: u32,
}

impl ConflictRecord<'_> {
    /// Severity of this pair taken on its own.
    pub const fn severity(&self) -> Severity {
        Severity::from_overlap(self.overlap_minutes)
    }
}

/// Aggregate conflict state of one day, as shown on a calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DayConflictSummary<'a> {
    pub has_conflict: bool,
    /// Events in at least one overlapping pair, deduplicated by id in
    /// first-seen order.
    pub conflicting_events: Vec<&'a Event>,
    pub conflict_type: ConflictKind,
    pub severity: Severity,
    pub max_overlap_minutes: u32,
}

/// Result of scanning one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayScan<'a> {
    pub date: NaiveDate,
    pub summary: DayConflictSummary<'a>,
    /// Overlapping neighbour pairs, in sweep order.
    pub conflicts: Vec<ConflictRecord<'a>>,
}

/// Scan the events of one date for conflicts between neighbours.
///
/// Events are stable-sorted by start time, so events that start together
/// keep their input order, and each event is classified against the next
/// one only.
pub fn scan_day<'a, I>(date: NaiveDate, events: I) -> Result<DayScan<'a>, TimeError>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut timed = events
        .into_iter()
        .map(|event| Ok((event, event.start_minutes()?)))
        .collect::<Result<Vec<_>, TimeError>>()?;
    timed.sort_by_key(|&(_, start)| start);

    let mut conflicts = Vec::new();
    let mut conflicting_events: Vec<&'a Event> = Vec::new();
    let mut seen = HashSet::new();
    let mut saw_adjacent = false;
    let mut max_overlap_minutes = 0;

    for window in timed.windows(2) {
        let pair = classify_ordered(window[0], window[1]);
        match pair.kind {
            ConflictKind::Overlap => {
                max_overlap_minutes = max_overlap_minutes.max(pair.overlap_minutes);
                for event in [pair.earlier, pair.later] {
                    if seen.insert(&event.id) {
                        conflicting_events.push(event);
                    }
                }
                conflicts.push(ConflictRecord {
                    date,
                    events: [pair.earlier, pair.later],
                    overlap_minutes: pair.overlap_minutes,
                });
            }
            ConflictKind::Adjacent => saw_adjacent = true,
            ConflictKind::None => {}
        }
    }

    let conflict_type = match (conflicts.is_empty(), saw_adjacent) {
        (false, _) => ConflictKind::Overlap,
        (true, true) => ConflictKind::Adjacent,
        (true, false) => ConflictKind::None,
    };

    tracing::trace!(
        %date,
        events = timed.len(),
        overlaps = conflicts.len(),
        max_overlap_minutes,
        "scanned day"
    );

    Ok(DayScan {
        date,
        summary: DayConflictSummary {
            has_conflict: !conflicting_events.is_empty(),
            conflicting_events,
            conflict_type,
            severity: Severity::from_overlap(max_overlap_minutes),
            max_overlap_minutes,
        },
        conflicts,
    })
}
