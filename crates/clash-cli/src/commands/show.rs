//! Show command: event details with its conflicts.

use std::io::Write;

use anyhow::{Result, bail};
use clash_core::{CategoryLookup, EventId, conflicting_events};
use clash_store::Calendar;

use super::util::{event_line, plural};

pub fn run<W: Write>(
    writer: &mut W,
    calendar: &Calendar,
    id: &EventId,
    categories: &impl CategoryLookup,
) -> Result<()> {
    let Some(event) = calendar.get(id) else {
        bail!("event not found: {id}");
    };

    let category = categories
        .find(&event.category)
        .map_or(event.category.as_str(), |c| c.label.as_str());

    writeln!(writer, "{}", event.title)?;
    writeln!(writer, "  Date:      {}", event.date)?;
    writeln!(
        writer,
        "  Time:      {} ({} min)",
        event.time_range()?,
        event.duration
    )?;
    writeln!(writer, "  Category:  {category}")?;
    if let Some(location) = &event.location {
        writeln!(writer, "  Location:  {location}")?;
    }
    if let Some(description) = &event.description {
        writeln!(writer, "  Notes:     {description}")?;
    }
    if !event.attendees.is_empty() {
        writeln!(writer, "  Attendees: {}", event.attendees.join(", "))?;
    }

    let conflicts = conflicting_events(event, calendar.events())?;
    if conflicts.is_empty() {
        writeln!(writer, "No conflicts.")?;
        return Ok(());
    }

    writeln!(writer, "Conflicts with {}:", plural(conflicts.len(), "event"))?;
    for other in conflicts {
        writeln!(writer, "  {}", event_line(other)?)?;
    }

    Ok(())
}
