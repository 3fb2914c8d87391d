//! Core types for the entry event dashboard.
//!
//! This crate provides the types shared by the dashboard UI:
//! - `Event` and `EventDraft` for event records and raw form input
//! - `EventStore` for the session's ordered event list
//! - `ValidationError` for creation-form rejections

pub mod error;
pub mod event;
pub mod store;

pub use error::ValidationError;
pub use event::{Event, EventDraft};
pub use store::EventStore;
