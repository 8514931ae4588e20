use clap::Subcommand;
use sakina_core::{ReflectionJournal, SqliteStore, SystemClock};

use super::{print_json, CommandResult};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a reflection
    Add {
        /// Reflection text
        content: String,
    },
    /// List reflections, newest first
    List {
        /// Maximum number of reflections to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Whether a reflection was written today
    Today,
    /// Show a reflection from an earlier day
    Resurface,
}

pub fn run(action: JournalAction) -> CommandResult {
    let store = SqliteStore::open()?;
    let journal = ReflectionJournal::new(&store, SystemClock);

    match action {
        JournalAction::Add { content } => {
            let reflection = journal.add(&content)?;
            println!("Reflection saved: {}", reflection.id);
        }
        JournalAction::List { limit, json } => {
            let entries: Vec<_> = journal.entries().into_iter().take(limit).collect();
            if json {
                print_json(&entries)?;
            } else if entries.is_empty() {
                println!("No reflections yet.");
            } else {
                for entry in &entries {
                    println!("[{}] {}", entry.date, entry.content);
                }
            }
        }
        JournalAction::Today => {
            if journal.has_reflected_today() {
                println!("yes");
            } else {
                println!("no");
            }
        }
        JournalAction::Resurface => match journal.resurface() {
            Some(entry) => println!("[{}] {}", entry.date, entry.content),
            None => println!("Nothing to look back on yet."),
        },
    }
    Ok(())
}
