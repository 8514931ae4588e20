use clap::Subcommand;
use sakina_core::{Mood, SqliteStore};

use super::today::{print_supplication, print_verse};
use super::{daily_content, print_json, CommandResult};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Check in with a mood
    Check {
        /// One of: anxious, sad, grateful, stressed, peaceful
        mood: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available moods
    List,
}

pub fn run(action: MoodAction) -> CommandResult {
    match action {
        MoodAction::Check { mood, json } => {
            let mood: Mood = mood.parse()?;
            let store = SqliteStore::open()?;
            let streams = daily_content(&store);
            let content = streams.mood_content_for(mood)?;

            if json {
                print_json(&serde_json::json!({
                    "mood": mood.label(),
                    "message": mood.message(),
                    "verse": content.verse,
                    "supplication": content.supplication,
                }))?;
            } else {
                println!("{}", mood.message());
                println!();
                print_verse(content.verse);
                println!();
                print_supplication(content.supplication);
            }
        }
        MoodAction::List => {
            for mood in Mood::ALL {
                println!("{:<10} {}", mood.label(), mood.message());
            }
        }
    }
    Ok(())
}
