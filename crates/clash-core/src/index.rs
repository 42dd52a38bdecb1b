//! The date-keyed index of every day with overlapping events.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::day::{ConflictRecord, scan_day};
use crate::event::Event;
use crate::group::group_by_date;
use crate::time::TimeError;

/// Conflict records for every date with at least one overlapping pair.
///
/// Dates with no overlap (including adjacent-only days) have no entry. The
/// index borrows from the event list it was built from and is rebuilt in
/// full whenever that list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConflictIndex<'a> {
    days: BTreeMap<NaiveDate, Vec<ConflictRecord<'a>>>,
}

impl<'a> ConflictIndex<'a> {
    /// Conflicts recorded for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&[ConflictRecord<'a>]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Whether `date` has at least one overlapping pair.
    pub fn has_conflicts_on(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Number of dates with conflicts.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Dates with conflicts, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Per-date conflict lists, ascending by date.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[ConflictRecord<'a>])> {
        self.days
            .iter()
            .map(|(date, records)| (*date, records.as_slice()))
    }

    /// Every record across all dates, in date order.
    ///
    /// This is the flat list a notification banner shows.
    pub fn records(&self) -> impl Iterator<Item = &ConflictRecord<'a>> {
        self.days.values().flatten()
    }
}

/// Scan every date present in `events` and index the ones with overlaps.
pub fn build_conflict_index<'a, I>(events: I) -> Result<ConflictIndex<'a>, TimeError>
where
    I: IntoIterator<Item = &'a Event>,
{
    let grouped = group_by_date(events);
    let scanned_dates = grouped.len();

    let mut days = BTreeMap::new();
    for (date, day_events) in grouped {
        let scan = scan_day(date, day_events)?;
        if scan.summary.has_conflict {
            days.insert(date, scan.conflicts);
        }
    }

    tracing::debug!(
        dates = scanned_dates,
        conflicting_dates = days.len(),
        "built conflict index"
    );

    Ok(ConflictIndex { days })
}
