//! List command: events after search and category filtering.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use clash_core::EventFilter;
use clash_store::Calendar;

use super::util::event_line;

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive text to find in title, description or location.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only events in this category ("all" for every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Only events on this date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn filter(&self) -> EventFilter {
        EventFilter {
            search: self.search.clone(),
            category: self.category.clone(),
            date: self.date,
        }
    }
}

pub fn run<W: Write>(writer: &mut W, calendar: &Calendar, args: &ListArgs) -> Result<()> {
    let events = args.filter().apply(calendar.events());

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&events)?)?;
        return Ok(());
    }

    if events.is_empty() {
        writeln!(writer, "No events found.")?;
        return Ok(());
    }

    for event in events {
        writeln!(
            writer,
            "{}  {}  {} [{}]",
            event.id,
            event.date,
            event_line(event)?,
            event.category
        )?;
    }

    Ok(())
}
