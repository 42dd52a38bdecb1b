//! Remove command for deleting a single event.

use std::io::Write;

use anyhow::Result;
use clash_core::EventId;
use clash_store::EventFile;

use super::util::{load_calendar, save_calendar};

pub fn run<W: Write>(writer: &mut W, file: &EventFile, id: &EventId) -> Result<()> {
    let mut calendar = load_calendar(file)?;
    let removed = calendar.remove(id)?;
    save_calendar(file, &calendar)?;

    writeln!(writer, "Removed event {}: {}", removed.id, removed.title)?;
    Ok(())
}
