use anyhow::Result;
use dialoguer::Select;
use entry_core::EventStore;
use owo_colors::OwoColorize;

/// The join screen. Real event discovery doesn't exist yet; the only action
/// appends the store's canned demo record.
pub fn run(store: &mut EventStore) -> Result<()> {
    println!();
    println!("  {}", "Join Event".bold());
    println!("  {}", "This feature is coming soon!".dimmed());
    println!();

    let selection = Select::new()
        .items(&["Join Demo Event", "Cancel"])
        .default(0)
        .interact()?;

    if selection == 0 {
        let event = store.join_demo_event();
        println!();
        println!("{}", format!("  Joined: {}", event.name).green());
    }

    Ok(())
}
