//! In-memory event store for the current session.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::event::{Event, EventDraft};

/// Fixed fields for the demo record appended by the stubbed join flow.
const DEMO_NAME: &str = "Demo Conference";
const DEMO_LOCATION: &str = "Conference Center";
const DEMO_DESCRIPTION: &str = "A demo event to show the join functionality";
const DEMO_MAX_ATTENDEES: u32 = 50;

/// Owns the ordered list of events for the running session.
///
/// There are exactly two write paths (create and the demo join), both
/// append-then-sort. Events are never mutated or removed, and nothing is
/// persisted beyond the session.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a creation draft and insert the resulting event.
    ///
    /// Returns the inserted event on success. On failure the store is
    /// untouched and the draft remains usable for correction.
    pub fn validate_and_create(&mut self, draft: &EventDraft) -> Result<Event, ValidationError> {
        let event = Event::from_draft(draft)?;
        self.insert(event.clone());
        Ok(event)
    }

    /// Append the canned demo record the join stub produces: tomorrow's
    /// "Demo Conference", capacity 50, not created by the user.
    ///
    /// Placeholder for real event discovery and capacity-aware joining.
    pub fn join_demo_event(&mut self) -> Event {
        let event = Event {
            id: Uuid::new_v4(),
            name: DEMO_NAME.to_string(),
            date: Utc::now() + Duration::hours(24),
            location: DEMO_LOCATION.to_string(),
            max_attendees: DEMO_MAX_ATTENDEES,
            description: DEMO_DESCRIPTION.to_string(),
            created_by_user: false,
        };

        self.insert(event.clone());
        event
    }

    /// Current events, most recent date first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn insert(&mut self, event: Event) {
        self.events.push(event);
        // Stable sort: events sharing a date keep insertion order.
        self.events.sort_by(|a, b| b.date.cmp(&a.date));
    }
}
