//! Terminal rendering for the dashboard.
//!
//! Extension-trait rendering of entry-core types using owo_colors, plus the
//! dashboard layout itself.

use chrono::{DateTime, Local, NaiveDate, Utc};
use entry_core::{Event, EventStore};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let tag = if self.created_by_user {
            "created".green().to_string()
        } else {
            "joined".blue().to_string()
        };

        let when = format!("{} {}", format_date_label(self.date), format_time(self.date));

        let mut lines = format!(
            "  {} {} [{}]\n      {} · {} max",
            when,
            self.name.bold(),
            tag,
            self.location,
            self.max_attendees
        );

        if !self.description.is_empty() {
            lines.push_str(&format!("\n      {}", self.description.dimmed()));
        }

        lines
    }
}

/// Print the dashboard: header, event count, and the event list (or the
/// empty-state message).
pub fn dashboard(store: &EventStore) {
    println!("{}", "Entry".bold());
    println!("{}", "Event Dashboard".dimmed());
    println!();

    let count = store.len();
    println!("{} ({} {})", "Your Events".bold(), count, pluralize("event", count));

    if store.is_empty() {
        println!();
        println!("  {}", "No events yet".bold());
        println!("  {}", "Create or join one to get started!".dimmed());
        return;
    }

    for event in store.events() {
        println!("{}", event.render());
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: DateTime<Utc>) -> String {
    date_label_for(
        date.with_timezone(&Local).date_naive(),
        Local::now().date_naive(),
    )
}

fn date_label_for(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Format the time portion of an event in local time (e.g. "15:00")
fn format_time(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%H:%M").to_string()
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            _ => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- date_label_for ---

    #[test]
    fn label_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        assert_eq!(date_label_for(today, today), "Today");
    }

    #[test]
    fn label_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 3, 21).unwrap();
        assert_eq!(date_label_for(tomorrow, today), "Tomorrow");
    }

    #[test]
    fn label_other_days() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let later = NaiveDate::from_ymd_opt(2026, 3, 25).unwrap();
        assert_eq!(date_label_for(later, today), "Wed Mar 25");
    }

    #[test]
    fn label_past_days() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let past = NaiveDate::from_ymd_opt(2026, 3, 19).unwrap();
        assert_eq!(date_label_for(past, today), "Thu Mar 19");
    }

    // --- pluralize ---

    #[test]
    fn pluralize_events() {
        assert_eq!(pluralize("event", 0), "events");
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 2), "events");
    }
}
