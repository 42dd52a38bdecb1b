//! Event drafts: unvalidated form input for creating or editing an event.
//!
//! Validation collects every field error at once so a form can show them
//! side by side. Conflicts are never validation errors; callers look them up
//! with [`crate::conflicting_events`] and show a warning instead.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::CategoryLookup;
use crate::event::Event;
use crate::time::{format_minutes, to_minutes};
use crate::types::EventId;

/// Rules applied when validating a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftRules {
    /// Shortest allowed event, in minutes.
    pub min_duration_minutes: u32,
}

impl Default for DraftRules {
    fn default() -> Self {
        Self {
            min_duration_minutes: 15,
        }
    }
}

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Date,
    Time,
    Duration,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Time => "time",
            Self::Duration => "duration",
        };
        write!(f, "{s}")
    }
}

/// Field errors from validating a draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct DraftErrors {
    errors: BTreeMap<DraftField, String>,
}

impl DraftErrors {
    fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// The message for `field`, if it failed.
    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failed fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for DraftErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for DraftErrors {}

/// Form data for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
    pub duration: u32,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            time: String::new(),
            duration: 60,
            category: "meeting".to_string(),
            description: String::new(),
            location: String::new(),
            attendees: Vec::new(),
        }
    }
}

impl EventDraft {
    /// Prefill a draft from an existing event for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.format("%Y-%m-%d").to_string(),
            time: event.time.clone(),
            duration: event.duration,
            category: event.category.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            attendees: event.attendees.clone(),
        }
    }

    /// Check every field, returning the parsed date on success.
    pub fn validate(&self, rules: &DraftRules) -> Result<NaiveDate, DraftErrors> {
        self.check(rules).map(|(date, _)| date)
    }

    /// Parsed date and start minutes, or every field error found.
    fn check(&self, rules: &DraftRules) -> Result<(NaiveDate, u32), DraftErrors> {
        let mut errors = DraftErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(DraftField::Title, "Title is required");
        }

        let date = self.date.trim();
        let parsed_date = if date.is_empty() {
            errors.insert(DraftField::Date, "Date is required");
            None
        } else if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Some(parsed)
        } else {
            errors.insert(DraftField::Date, "Date must be YYYY-MM-DD");
            None
        };

        let time = self.time.trim();
        let parsed_start = if time.is_empty() {
            errors.insert(DraftField::Time, "Time is required");
            None
        } else if let Ok(start) = to_minutes(time) {
            Some(start)
        } else {
            errors.insert(DraftField::Time, "Time must be HH:MM");
            None
        };

        if self.duration < rules.min_duration_minutes {
            errors.insert(
                DraftField::Duration,
                format!(
                    "Duration must be at least {} minutes",
                    rules.min_duration_minutes
                ),
            );
        }

        match (parsed_date, parsed_start) {
            (Some(date), Some(start)) if errors.is_empty() => Ok((date, start)),
            _ => Err(errors),
        }
    }

    /// Validate and build the event, resolving its colour from `categories`.
    pub fn into_event(
        self,
        id: EventId,
        rules: &DraftRules,
        categories: &impl CategoryLookup,
    ) -> Result<Event, DraftErrors> {
        let (date, start) = self.check(rules)?;
        let color = categories.color_for(&self.category).to_string();

        Ok(Event {
            id,
            title: self.title.trim().to_string(),
            date,
            time: format_minutes(i64::from(start)),
            duration: self.duration,
            category: self.category,
            color: Some(color),
            description: non_blank(self.description),
            location: non_blank(self.location),
            attendees: self.attendees,
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
