//! Calendars with fixed ids for command output tests.

use clash_core::{Event, EventId};
use clash_store::{Calendar, EventFile};

pub fn event(id: &str, title: &str, date: &str, time: &str, duration: u32) -> Event {
    Event {
        id: EventId::new(id).unwrap(),
        title: title.to_string(),
        date: date.parse().unwrap(),
        time: time.to_string(),
        duration,
        category: "meeting".to_string(),
        color: Some("bg-blue-500".to_string()),
        description: None,
        location: None,
        attendees: Vec::new(),
    }
}

/// Two conflicting days and one clean one.
///
/// - 2024-01-01: planning 09:00-10:30, standup 10:00-10:15, coffee 10:10-10:30
/// - 2024-01-02: gym 07:00-08:00, breakfast 08:00-08:30 (adjacent only)
/// - 2024-01-03: review 14:00-15:00, sync 14:00-14:20
pub fn sample_calendar() -> Calendar {
    let mut gym = event("gym", "Gym", "2024-01-02", "07:00", 60);
    gym.category = "health".to_string();
    gym.location = Some("Downtown".to_string());

    Calendar::from_events(vec![
        event("planning", "Planning", "2024-01-01", "09:00", 90),
        event("standup", "Standup", "2024-01-01", "10:00", 15),
        event("coffee", "Coffee", "2024-01-01", "10:10", 20),
        gym,
        event("breakfast", "Breakfast", "2024-01-02", "08:00", 30),
        event("review", "Review", "2024-01-03", "14:00", 60),
        event("sync", "Sync", "2024-01-03", "14:00", 20),
    ])
    .unwrap()
}

/// A temp dir holding `events.json` seeded with `calendar`.
pub fn seeded_file(calendar: &Calendar) -> (tempfile::TempDir, EventFile) {
    let temp = tempfile::tempdir().unwrap();
    let file = EventFile::new(temp.path().join("events.json"));
    file.save(calendar).unwrap();
    (temp, file)
}
