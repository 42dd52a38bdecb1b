//! Search and category filtering for event lists.

use chrono::NaiveDate;

use crate::event::Event;

/// Category filter value that matches every category.
pub const ALL_CATEGORIES: &str = "all";

/// Filter applied to the event list before display.
///
/// Search is case-insensitive and matches the title, description or
/// location. An empty search matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub search: Option<String>,
    /// Category key, or `"all"`.
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event) && self.matches_category(event) && self.matches_date(event)
    }

    /// Events passing the filter, in input order.
    pub fn apply<'a, I>(&self, events: I) -> Vec<&'a Event>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }

    fn matches_search(&self, event: &Event) -> bool {
        let Some(search) = self.search.as_deref() else {
            return true;
        };
        let needle = search.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&needle);

        contains(event.title.as_str())
            || event.description.as_deref().is_some_and(contains)
            || event.location.as_deref().is_some_and(contains)
    }

    fn matches_category(&self, event: &Event) -> bool {
        match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => event.category == category,
        }
    }

    fn matches_date(&self, event: &Event) -> bool {
        self.date.is_none_or(|date| event.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{event, ids};

    fn sample() -> Vec<Event> {
        let mut standup = event("standup", "2024-01-01", "09:00", 15);
        standup.title = "Daily Standup".to_string();

        let mut gym = event("gym", "2024-01-01", "18:00", 60);
        gym.title = "Workout".to_string();
        gym.category = "health".to_string();
        gym.location = Some("Downtown Gym".to_string());

        let mut review = event("review", "2024-01-02", "14:00", 45);
        review.title = "Design review".to_string();
        review.description = Some("Walk through the STANDUP notes".to_string());

        vec![standup, gym, review]
    }

    #[test]
    fn default_filter_matches_everything() {
        let events = sample();
        assert_eq!(EventFilter::default().apply(&events).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let events = sample();
        let filter = EventFilter {
            search: Some("standup".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(ids(filter.apply(&events)), ["standup", "review"]);

        let filter = EventFilter {
            search: Some("GYM".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(ids(filter.apply(&events)), ["gym"]);
    }

    #[test]
    fn empty_search_matches_everything() {
        let events = sample();
        let filter = EventFilter {
            search: Some(String::new()),
            ..EventFilter::default()
        };
        assert_eq!(filter.apply(&events).len(), 3);
    }

    #[test]
    fn category_all_disables_category_filter() {
        let events = sample();
        let health = EventFilter {
            category: Some("health".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(ids(health.apply(&events)), ["gym"]);

        let all = EventFilter {
            category: Some(ALL_CATEGORIES.to_string()),
            ..EventFilter::default()
        };
        assert_eq!(all.apply(&events).len(), 3);
    }

    #[test]
    fn filters_combine() {
        let events = sample();
        let filter = EventFilter {
            search: Some("standup".to_string()),
            category: Some("meeting".to_string()),
            date: Some("2024-01-02".parse().unwrap()),
        };
        assert_eq!(ids(filter.apply(&events)), ["review"]);
    }
}
