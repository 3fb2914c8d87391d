//! Event entity and the raw creation-form draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A scheduled gathering with a name, time, place, and capacity limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    /// Non-empty after trimming
    pub name: String,
    pub date: DateTime<Utc>,
    /// Non-empty after trimming
    pub location: String,
    /// Strictly positive
    pub max_attendees: u32,
    /// May be empty
    pub description: String,
    /// `true` for locally created events, `false` for joined ones
    pub created_by_user: bool,
}

impl Event {
    /// Build an event from a creation draft, running the full validation
    /// sequence.
    ///
    /// This is the only constructor on the creation path, so every event the
    /// store holds satisfies its field constraints by construction.
    pub fn from_draft(draft: &EventDraft) -> Result<Self, ValidationError> {
        let (name, location, max_attendees, description) = draft.validated_fields()?;

        Ok(Event {
            id: Uuid::new_v4(),
            name,
            date: draft.date,
            location,
            max_attendees,
            description,
            created_by_user: true,
        })
    }
}

/// The raw creation-form fields, as typed by the user.
///
/// `date` is already structured (the form uses a picker); everything else is
/// free text until validated.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
    /// Raw numeric text, parsed during validation
    pub max_attendees: String,
    pub description: String,
}

impl Default for EventDraft {
    /// An empty form: blank text fields, date picker on the current time.
    fn default() -> Self {
        EventDraft {
            name: String::new(),
            date: Utc::now(),
            location: String::new(),
            max_attendees: String::new(),
            description: String::new(),
        }
    }
}

impl EventDraft {
    /// Run the full validation sequence without constructing an event.
    ///
    /// Used for the live submit check; submission re-validates through
    /// `Event::from_draft`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validated_fields().map(|_| ())
    }

    /// Validation order matches the form: name, location, then the attendee
    /// count (missing before invalid). The first failure wins.
    fn validated_fields(&self) -> Result<(String, String, u32, String), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let location = self.location.trim();
        if location.is_empty() {
            return Err(ValidationError::EmptyLocation);
        }

        // Emptiness is checked on the raw string: a whitespace-only count is
        // a parse failure, not a missing field.
        if self.max_attendees.is_empty() {
            return Err(ValidationError::MissingAttendeeCount);
        }

        let max_attendees: u32 = self
            .max_attendees
            .parse()
            .map_err(|_| ValidationError::InvalidAttendeeCount)?;
        if max_attendees == 0 {
            return Err(ValidationError::InvalidAttendeeCount);
        }

        Ok((
            name.to_string(),
            location.to_string(),
            max_attendees,
            self.description.trim().to_string(),
        ))
    }
}
