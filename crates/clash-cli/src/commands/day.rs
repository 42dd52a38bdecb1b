//! Day command: one calendar cell.
//!
//! The header comes from the day scan (neighbour sweep); the per-event
//! markers come from the exhaustive per-event lookup, so an event can be
//! marked even when the header does not count it.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clash_core::{
    ConflictKind, ConflictLevel, ConflictRecord, DayConflictSummary, Event, event_conflict_level,
    scan_day,
};
use clash_store::Calendar;
use serde::Serialize;

use super::util::{event_line, plural};

/// One event row in the day view.
#[derive(Debug, Serialize)]
struct DayEntry<'a> {
    #[serde(flatten)]
    event: &'a Event,
    end_time: String,
    conflict_level: Option<ConflictLevel>,
    #[serde(skip)]
    start_minutes: u32,
}

#[derive(Debug, Serialize)]
struct DayReport<'a> {
    date: NaiveDate,
    summary: &'a DayConflictSummary<'a>,
    conflicts: &'a [ConflictRecord<'a>],
    events: Vec<DayEntry<'a>>,
}

pub fn run<W: Write>(writer: &mut W, calendar: &Calendar, date: NaiveDate, json: bool) -> Result<()> {
    let day_events: Vec<&Event> = calendar
        .events()
        .iter()
        .filter(|e| e.date == date)
        .collect();
    let scan = scan_day(date, day_events.iter().copied())?;

    let mut entries = Vec::with_capacity(day_events.len());
    for &event in &day_events {
        entries.push(DayEntry {
            event,
            end_time: event.end_time()?,
            conflict_level: event_conflict_level(event, day_events.iter().copied())?,
            start_minutes: event.start_minutes()?,
        });
    }
    entries.sort_by_key(|entry| entry.start_minutes);

    if json {
        let report = DayReport {
            date,
            summary: &scan.summary,
            conflicts: &scan.conflicts,
            events: entries,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(writer, "{}", header(date, day_events.len(), &scan.summary))?;
    for entry in &entries {
        let marker = entry
            .conflict_level
            .map(|level| format!("  [{level}]"))
            .unwrap_or_default();
        writeln!(
            writer,
            "  {} ({}){marker}",
            event_line(entry.event)?,
            entry.event.category
        )?;
    }

    Ok(())
}

fn header(date: NaiveDate, count: usize, summary: &DayConflictSummary<'_>) -> String {
    if count == 0 {
        return format!("{date}: no events");
    }

    let events = plural(count, "event");
    match summary.conflict_type {
        ConflictKind::Overlap => format!(
            "{date}: {events}, {} conflicting, severity {} (max overlap {} min)",
            summary.conflicting_events.len(),
            summary.severity,
            summary.max_overlap_minutes
        ),
        ConflictKind::Adjacent => format!("{date}: {events}, back-to-back, no overlap"),
        ConflictKind::None => format!("{date}: {events}, no conflicts"),
    }
}
