//! Clear command for removing every event.

use std::io::Write;

use anyhow::Result;
use clash_store::EventFile;

use super::util::{load_calendar, plural, save_calendar};

pub fn run<W: Write>(writer: &mut W, file: &EventFile) -> Result<()> {
    let mut calendar = load_calendar(file)?;
    let removed = calendar.len();
    calendar.clear();
    save_calendar(file, &calendar)?;

    writeln!(writer, "Cleared {}.", plural(removed, "event"))?;
    Ok(())
}
