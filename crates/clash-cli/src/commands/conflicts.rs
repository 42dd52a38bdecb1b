//! Conflicts command: the notification banner.
//!
//! Lists every date with at least one overlapping pair, as found by the
//! neighbour sweep over each day.

use std::io::Write;

use anyhow::Result;
use clash_core::build_conflict_index;
use clash_store::Calendar;

use super::util::{event_line, plural};

pub fn run<W: Write>(writer: &mut W, calendar: &Calendar, json: bool) -> Result<()> {
    let index = build_conflict_index(calendar.events())?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&index)?)?;
        return Ok(());
    }

    if index.is_empty() {
        writeln!(writer, "No conflicts detected.")?;
        return Ok(());
    }

    writeln!(writer, "{} detected", plural(index.len(), "conflict"))?;
    for (date, records) in index.iter() {
        writeln!(writer, "{date}: {}", plural(records.len(), "overlapping pair"))?;
        for record in records {
            for event in record.events {
                writeln!(writer, "  {}", event_line(event)?)?;
            }
            writeln!(
                writer,
                "  overlap {} min, {}",
                record.overlap_minutes,
                record.severity()
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{event, sample_calendar};

    use insta::assert_snapshot;

    #[test]
    fn conflicts_lists_each_overlapping_pair() {
        let mut output = Vec::new();
        run(&mut output, &sample_calendar(), false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        2 conflicts detected
        2024-01-01: 2 overlapping pairs
          09:00 - 10:30  Planning
          10:00 - 10:15  Standup
          overlap 30 min, medium
          10:00 - 10:15  Standup
          10:10 - 10:30  Coffee
          overlap 5 min, low
        2024-01-03: 1 overlapping pair
          14:00 - 15:00  Review
          14:00 - 14:20  Sync
          overlap 60 min, high
        ");
    }

    #[test]
    fn conflicts_reports_clean_calendar() {
        let calendar = Calendar::from_events(vec![
            event("a", "A", "2024-01-01", "09:00", 60),
            event("b", "B", "2024-01-01", "10:00", 60),
        ])
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &calendar, false).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "No conflicts detected.\n");
    }

    #[test]
    fn conflicts_json_is_keyed_by_date() {
        let mut output = Vec::new();
        run(&mut output, &sample_calendar(), true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let dates: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-03"]);
        assert_eq!(value["2024-01-03"][0]["overlap_minutes"], 60);
        assert_eq!(value["2024-01-01"][1]["events"][1]["id"], "coffee");
    }

    #[test]
    fn conflicts_fails_on_malformed_time() {
        let calendar =
            Calendar::from_events(vec![event("a", "A", "2024-01-01", "7:99", 60)]).unwrap();

        let err = run(&mut Vec::new(), &calendar, false).unwrap_err();
        assert!(err.to_string().contains("invalid time format"));
    }
}
