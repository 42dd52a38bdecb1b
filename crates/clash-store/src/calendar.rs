//! The owned, mutable event list.

use clash_core::{CategoryLookup, DraftRules, Event, EventDraft, EventId};
use serde::Serialize;
use uuid::Uuid;

use crate::StoreError;

/// An ordered list of events with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Calendar {
    events: Vec<Event>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from a list of events, rejecting duplicate ids.
    pub fn from_events(events: Vec<Event>) -> Result<Self, StoreError> {
        let mut calendar = Self::new();
        for event in events {
            calendar.insert(event)?;
        }
        Ok(calendar)
    }

    /// The events in insertion order. This is the snapshot handed to the engine.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    fn position(&self, id: &EventId) -> Result<usize, StoreError> {
        self.events
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Appends an already-built event.
    pub fn insert(&mut self, event: Event) -> Result<&Event, StoreError> {
        if self.get(&event.id).is_some() {
            return Err(StoreError::DuplicateId(event.id));
        }
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// Validates a draft and appends it under a fresh id.
    pub fn add(
        &mut self,
        draft: EventDraft,
        rules: &DraftRules,
        categories: &impl CategoryLookup,
    ) -> Result<&Event, StoreError> {
        let id = generate_id()?;
        let event = draft.into_event(id, rules, categories)?;
        tracing::debug!(id = %event.id, date = %event.date, time = %event.time, "adding event");
        self.insert(event)
    }

    /// Replaces an event's fields with a validated draft, keeping its id and
    /// position.
    pub fn update(
        &mut self,
        id: &EventId,
        draft: EventDraft,
        rules: &DraftRules,
        categories: &impl CategoryLookup,
    ) -> Result<&Event, StoreError> {
        let index = self.position(id)?;
        let event = draft.into_event(id.clone(), rules, categories)?;
        tracing::debug!(%id, date = %event.date, time = %event.time, "updating event");
        self.events[index] = event;
        Ok(&self.events[index])
    }

    /// Removes and returns an event.
    pub fn remove(&mut self, id: &EventId) -> Result<Event, StoreError> {
        let index = self.position(id)?;
        tracing::debug!(%id, "removing event");
        Ok(self.events.remove(index))
    }

    /// Removes every event.
    pub fn clear(&mut self) {
        tracing::debug!(removed = self.events.len(), "clearing calendar");
        self.events.clear();
    }
}

/// A fresh random event id.
fn generate_id() -> Result<EventId, StoreError> {
    Ok(EventId::new(Uuid::new_v4().to_string())?)
}
