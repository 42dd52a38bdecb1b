//! Add command: validate a new event, save it, and warn about overlaps.
//!
//! Overlaps never block a save; they are reported after it.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use clash_core::{CategoryLookup, EventDraft};
use clash_store::EventFile;

use super::util::{load_calendar, save_calendar, warn_conflicts};
use crate::Config;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Event title.
    #[arg(long)]
    pub title: String,

    /// Date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,

    /// Start time (HH:MM, 24-hour).
    #[arg(long)]
    pub time: String,

    /// Length in minutes.
    #[arg(long, default_value_t = 60)]
    pub duration: u32,

    /// Category key (see `clash categories`).
    #[arg(long, default_value = "meeting")]
    pub category: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Attendee name; repeat for several.
    #[arg(long = "attendee")]
    pub attendees: Vec<String>,
}

impl AddArgs {
    fn into_draft(self) -> EventDraft {
        EventDraft {
            title: self.title,
            date: self.date,
            time: self.time,
            duration: self.duration,
            category: self.category,
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            attendees: self.attendees,
        }
    }
}

pub fn run<W: Write>(
    writer: &mut W,
    file: &EventFile,
    args: AddArgs,
    config: &Config,
    categories: &impl CategoryLookup,
) -> Result<()> {
    let mut calendar = load_calendar(file)?;
    let event = calendar
        .add(args.into_draft(), &config.draft_rules(), categories)?
        .clone();
    save_calendar(file, &calendar)?;

    writeln!(
        writer,
        "Added event {}: {} on {} at {}",
        event.id,
        event.title,
        event.date,
        event.time_range()?
    )?;
    warn_conflicts(writer, &event, &calendar)?;

    Ok(())
}
