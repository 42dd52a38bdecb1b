//! Partitioning events into day buckets.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::event::Event;

/// Group events by date.
///
/// Each bucket keeps the input's relative order. Only dates that appear on
/// at least one event become keys, and keys iterate in ascending date order.
pub fn group_by_date<'a, I>(events: I) -> BTreeMap<NaiveDate, Vec<&'a Event>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut buckets: BTreeMap<NaiveDate, Vec<&'a Event>> = BTreeMap::new();
    for event in events {
        buckets.entry(event.date).or_default().push(event);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{event, ids};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_input_has_no_buckets() {
        let events: Vec<Event> = Vec::new();
        assert!(group_by_date(&events).is_empty());
    }

    #[test]
    fn buckets_preserve_input_order() {
        let events = vec![
            event("a", "2024-01-02", "15:00", 30),
            event("b", "2024-01-01", "09:00", 30),
            event("c", "2024-01-02", "08:00", 30),
            event("d", "2024-01-01", "07:00", 30),
        ];

        let grouped = group_by_date(&events);

        assert_eq!(
            grouped.keys().copied().collect::<Vec<_>>(),
            vec![date("2024-01-01"), date("2024-01-02")]
        );
        assert_eq!(ids(grouped[&date("2024-01-01")].iter().copied()), ["b", "d"]);
        assert_eq!(ids(grouped[&date("2024-01-02")].iter().copied()), ["a", "c"]);
    }

    #[test]
    fn grouping_partitions_the_input_exactly() {
        let events = vec![
            event("a", "2024-03-01", "09:00", 30),
            event("b", "2024-03-02", "09:00", 30),
            event("c", "2024-03-01", "10:00", 30),
            event("d", "2024-03-05", "11:00", 30),
            event("e", "2024-03-02", "12:00", 30),
        ];

        let grouped = group_by_date(&events);

        let mut seen: Vec<&str> = grouped
            .values()
            .flat_map(|bucket| bucket.iter().map(|e| e.id.as_str()))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b", "c", "d", "e"]);

        for (day, bucket) in &grouped {
            assert!(bucket.iter().all(|e| e.date == *day));
        }
    }
}
