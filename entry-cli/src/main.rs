mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use dialoguer::Select;
use entry_core::EventStore;

#[derive(Parser)]
#[command(name = "entry")]
#[command(about = "Track personal events for the current session: create, join, and list")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // The store lives here for the whole session and is handed to each
    // screen by reference. Nothing is persisted when the loop exits.
    let mut store = EventStore::new();

    loop {
        println!();
        render::dashboard(&store);
        println!();

        let selection = Select::new()
            .with_prompt("  What next?")
            .items(&["Create Event", "Join Event", "Quit"])
            .default(0)
            .interact()?;

        match selection {
            0 => commands::create::run(&mut store)?,
            1 => commands::join::run(&mut store)?,
            _ => break,
        }
    }

    Ok(())
}
