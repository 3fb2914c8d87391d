//! Error types for the event creation path.

use thiserror::Error;

/// Reasons a creation-form submission is rejected.
///
/// Each variant maps to a blocking message shown to the operator. Nothing is
/// logged or retried; the entered field values stay intact for correction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event name is required")]
    EmptyName,

    #[error("Event location is required")]
    EmptyLocation,

    #[error("Max attendees is required")]
    MissingAttendeeCount,

    #[error("Max attendees must be a positive number")]
    InvalidAttendeeCount,
}
