//! Shared helpers for CLI commands.

use std::io::Write;

use anyhow::{Context, Result};
use clash_core::{Event, conflicting_events};
use clash_store::{Calendar, EventFile};

/// Load the calendar, naming the file on failure.
pub fn load_calendar(file: &EventFile) -> Result<Calendar> {
    file.load()
        .with_context(|| format!("failed to load events from {}", file.path().display()))
}

/// Save the calendar, naming the file on failure.
pub fn save_calendar(file: &EventFile, calendar: &Calendar) -> Result<()> {
    file.save(calendar)
        .with_context(|| format!("failed to save events to {}", file.path().display()))
}

/// `09:00 - 10:00  Title`
pub fn event_line(event: &Event) -> Result<String> {
    Ok(format!("{}  {}", event.time_range()?, event.title))
}

/// Print the form-style warning for a saved event that overlaps others.
///
/// The event is already saved when this runs, so a neighbour with a
/// malformed time only skips the warning.
pub fn warn_conflicts<W: Write>(writer: &mut W, event: &Event, calendar: &Calendar) -> Result<()> {
    let conflicts = match conflicting_events(event, calendar.events()) {
        Ok(conflicts) => conflicts,
        Err(err) => {
            tracing::warn!(id = %event.id, %err, "skipping conflict check");
            return Ok(());
        }
    };
    if conflicts.is_empty() {
        return Ok(());
    }

    let titles: Vec<&str> = conflicts.iter().map(|e| e.title.as_str()).collect();
    writeln!(
        writer,
        "Warning: this event conflicts with: {}",
        titles.join(", ")
    )?;
    for other in conflicts {
        writeln!(writer, "  {}", event_line(other)?)?;
    }
    Ok(())
}

/// `1 pair`, `2 pairs`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
