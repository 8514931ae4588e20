pub mod config;
pub mod day;
pub mod journal;
pub mod mood;
pub mod quota;
pub mod today;

use sakina_core::{Catalog, Config, DailyContent, Diagnostics, SqliteStore, SystemClock};
use serde::Serialize;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Streams backed by the on-disk store and the user's config.
pub fn daily_content(store: &SqliteStore) -> DailyContent<'static, &SqliteStore, SystemClock> {
    let config = Config::load_or_default();
    DailyContent::from_config(
        store,
        SystemClock,
        Catalog::builtin(),
        &config,
        Diagnostics::default(),
    )
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
