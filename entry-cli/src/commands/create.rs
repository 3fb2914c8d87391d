use anyhow::Result;
use chrono::{DateTime, Local, TimeZone, Utc};
use dialoguer::{Input, Select};
use entry_core::{EventDraft, EventStore};
use owo_colors::OwoColorize;

/// The event creation form.
///
/// Prompts for every field, then a Save/Cancel choice. A rejected submission
/// prints the validation message and re-opens the form with all entered
/// values intact; Cancel discards everything.
pub fn run(store: &mut EventStore) -> Result<()> {
    println!();
    println!("  {}", "Create Event".bold());

    let mut draft = EventDraft::default();
    let mut when_raw = String::new();

    loop {
        draft.name = Input::<String>::new()
            .with_prompt("  Event name")
            .with_initial_text(draft.name.clone())
            .allow_empty(true)
            .interact_text()?;

        let (date, raw) = prompt_datetime("  When?", &when_raw)?;
        draft.date = date;
        when_raw = raw;

        draft.location = Input::<String>::new()
            .with_prompt("  Where?")
            .with_initial_text(draft.location.clone())
            .allow_empty(true)
            .interact_text()?;

        draft.max_attendees = Input::<String>::new()
            .with_prompt("  Max attendees")
            .with_initial_text(draft.max_attendees.clone())
            .allow_empty(true)
            .interact_text()?;

        draft.description = Input::<String>::new()
            .with_prompt("  Description (optional)")
            .with_initial_text(draft.description.clone())
            .allow_empty(true)
            .interact_text()?;

        // Live hint before the Save choice, mirroring a disabled submit
        // button. Saving re-validates in full regardless.
        if let Err(e) = draft.validate() {
            println!("  {}", e.to_string().dimmed());
        }

        let choice = Select::new()
            .items(&["Save", "Cancel"])
            .default(0)
            .interact()?;

        if choice == 1 {
            return Ok(());
        }

        match store.validate_and_create(&draft) {
            Ok(event) => {
                println!();
                println!("{}", format!("  Created: {}", event.name).green());
                return Ok(());
            }
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                // Loop back with the entered values intact.
            }
        }
    }
}

/// Prompt for a date/time with retry on parse errors.
fn prompt_datetime(prompt: &str, initial: &str) -> Result<(DateTime<Utc>, String)> {
    let mut initial = initial.to_string();

    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(initial.clone())
            .interact_text()?;

        match parse_datetime(&input) {
            Ok(date) => return Ok((date, input)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                initial = input;
            }
        }
    }
}

/// Parse a natural language date/time string into a UTC timestamp.
/// Input is interpreted in the local timezone.
fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input))?;

    let local = Local
        .from_local_datetime(&dt)
        .earliest()
        .ok_or_else(|| anyhow::anyhow!("Could not resolve local time: \"{}\"", input))?;

    Ok(local.with_timezone(&Utc))
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let mut result = String::new();
    let lower = input.to_lowercase();

    for (i, word) in lower.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let expanded = abbrevs
            .iter()
            .find(|(abbr, _)| *abbr == word)
            .map(|(_, full)| *full)
            .unwrap_or(word);
        result.push_str(expanded);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    // --- expand_abbreviations ---

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat 3pm"), "saturday 3pm");
        assert_eq!(expand_abbreviations("fri 9am"), "friday 9am");
        assert_eq!(expand_abbreviations("thu noon"), "thursday noon");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("sept 5 3pm"), "september 5 3pm");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow 6pm"), "tomorrow 6pm");
        assert_eq!(expand_abbreviations("next friday"), "next friday");
    }

    // --- parse_datetime ---

    #[test]
    fn parse_datetime_absolute_date() {
        let result = parse_datetime("march 20").unwrap();
        let local = result.with_timezone(&Local);
        assert_eq!(local.month(), 3);
        assert_eq!(local.day(), 20);
    }

    #[test]
    fn parse_datetime_abbreviation_works() {
        assert!(parse_datetime("sat 3pm").is_ok());
    }

    #[test]
    fn parse_datetime_relative() {
        assert!(parse_datetime("tomorrow 6pm").is_ok());
    }

    #[test]
    fn parse_datetime_invalid_input() {
        assert!(parse_datetime("not a date at all xyz").is_err());
    }
}
