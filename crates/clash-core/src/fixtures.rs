//! Shared test fixtures.

use crate::event::Event;
use crate::types::EventId;

/// Build a bare event titled `Event <id>` in the `meeting` category.
pub fn event(id: &str, date: &str, time: &str, duration: u32) -> Event {
    Event {
        id: EventId::new(id).expect("valid test id"),
        title: format!("Event {id}"),
        date: date.parse().expect("valid test date"),
        time: time.to_string(),
        duration,
        category: "meeting".to_string(),
        color: None,
        description: None,
        location: None,
        attendees: Vec::new(),
    }
}

/// Collect the ids of a list of events, in order.
pub fn ids<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<&'a str> {
    events.into_iter().map(|e| e.id.as_str()).collect()
}
