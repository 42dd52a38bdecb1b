//! Edit command: change fields of an existing event.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;
use clash_core::{CategoryLookup, EventDraft, EventId};
use clash_store::EventFile;

use super::util::{load_calendar, save_calendar, warn_conflicts};
use crate::Config;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Event ID.
    pub id: EventId,

    #[arg(long)]
    pub title: Option<String>,

    /// New date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,

    /// New start time (HH:MM).
    #[arg(long)]
    pub time: Option<String>,

    /// New length in minutes.
    #[arg(long)]
    pub duration: Option<u32>,

    #[arg(long)]
    pub category: Option<String>,

    /// New description; pass an empty string to clear it.
    #[arg(long)]
    pub description: Option<String>,

    /// New location; pass an empty string to clear it.
    #[arg(long)]
    pub location: Option<String>,

    /// Attendee name; repeat for several. Replaces the current list.
    #[arg(long = "attendee", conflicts_with = "clear_attendees")]
    pub attendees: Vec<String>,

    /// Remove all attendees.
    #[arg(long)]
    pub clear_attendees: bool,
}

impl EditArgs {
    /// Overlay the given flags on a draft of the current event.
    fn apply(&self, draft: &mut EventDraft) {
        if let Some(title) = &self.title {
            draft.title.clone_from(title);
        }
        if let Some(date) = &self.date {
            draft.date.clone_from(date);
        }
        if let Some(time) = &self.time {
            draft.time.clone_from(time);
        }
        if let Some(duration) = self.duration {
            draft.duration = duration;
        }
        if let Some(category) = &self.category {
            draft.category.clone_from(category);
        }
        if let Some(description) = &self.description {
            draft.description.clone_from(description);
        }
        if let Some(location) = &self.location {
            draft.location.clone_from(location);
        }
        if self.clear_attendees {
            draft.attendees.clear();
        } else if !self.attendees.is_empty() {
            draft.attendees.clone_from(&self.attendees);
        }
    }
}

pub fn run<W: Write>(
    writer: &mut W,
    file: &EventFile,
    args: &EditArgs,
    config: &Config,
    categories: &impl CategoryLookup,
) -> Result<()> {
    let mut calendar = load_calendar(file)?;
    let Some(current) = calendar.get(&args.id) else {
        bail!("event not found: {}", args.id);
    };

    let mut draft = EventDraft::from_event(current);
    args.apply(&mut draft);

    let event = calendar
        .update(&args.id, draft, &config.draft_rules(), categories)?
        .clone();
    save_calendar(file, &calendar)?;

    writeln!(
        writer,
        "Updated event {}: {} on {} at {}",
        event.id,
        event.title,
        event.date,
        event.time_range()?
    )?;
    warn_conflicts(writer, &event, &calendar)?;

    Ok(())
}
