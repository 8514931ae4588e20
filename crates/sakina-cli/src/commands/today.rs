use clap::Subcommand;
use sakina_core::{RemembrancePhrase, SqliteStore, Supplication, SupplicationCategory, Verse, VerseCategory};
use serde::Serialize;

use super::{daily_content, print_json, CommandResult};

#[derive(Subcommand)]
pub enum TodayAction {
    /// Today's verse
    Verse {
        /// Restrict to one category (e.g. "patience", "hope")
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Today's supplication
    Dua {
        /// Restrict to one category (e.g. "morning", "sleep")
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Today's remembrance phrase
    Dhikr {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Today's patience reflection prompt
    Prompt {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Everything for today
    All {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct TodaySummary<'a> {
    verse: &'a Verse,
    supplication: &'a Supplication,
    remembrance: &'a RemembrancePhrase,
    prompt: &'a str,
}

pub fn run(action: TodayAction) -> CommandResult {
    let store = SqliteStore::open()?;
    let streams = daily_content(&store);

    match action {
        TodayAction::Verse { category, json } => {
            let category = category.map(|c| c.parse::<VerseCategory>()).transpose()?;
            let verse = streams.daily_verse(category)?;
            if json {
                print_json(verse)?;
            } else {
                print_verse(verse);
            }
        }
        TodayAction::Dua { category, json } => {
            let category = category
                .map(|c| c.parse::<SupplicationCategory>())
                .transpose()?;
            let dua = streams.daily_supplication(category)?;
            if json {
                print_json(dua)?;
            } else {
                print_supplication(dua);
            }
        }
        TodayAction::Dhikr { json } => {
            let dhikr = streams.daily_remembrance()?;
            if json {
                print_json(dhikr)?;
            } else {
                print_remembrance(dhikr);
            }
        }
        TodayAction::Prompt { json } => {
            let prompt = streams.daily_prompt()?;
            if json {
                print_json(&serde_json::json!({ "prompt": prompt }))?;
            } else {
                println!("{prompt}");
            }
        }
        TodayAction::All { json } => {
            let summary = TodaySummary {
                verse: streams.daily_verse(None)?,
                supplication: streams.daily_supplication(None)?,
                remembrance: streams.daily_remembrance()?,
                prompt: streams.daily_prompt()?,
            };
            if json {
                print_json(&summary)?;
            } else {
                print_verse(summary.verse);
                println!();
                print_supplication(summary.supplication);
                println!();
                print_remembrance(summary.remembrance);
                println!();
                println!("Reflect: {}", summary.prompt);
            }
        }
    }
    Ok(())
}

pub(crate) fn print_verse(verse: &Verse) {
    println!("{}", verse.arabic);
    println!("{}", verse.translation);
    println!("  ({}, {})", verse.reference, verse.category);
}

pub(crate) fn print_supplication(dua: &Supplication) {
    println!("{}", dua.arabic);
    if let Some(transliteration) = dua.transliteration {
        println!("{transliteration}");
    }
    println!("{}", dua.translation);
    println!("  ({})", dua.occasion);
}

fn print_remembrance(dhikr: &RemembrancePhrase) {
    println!("{}  x{}", dhikr.arabic, dhikr.count);
    println!("{}", dhikr.transliteration);
    println!("{}", dhikr.translation);
    println!("  {}", dhikr.benefit);
}
