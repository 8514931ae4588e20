use clap::Subcommand;
use sakina_core::{Config, QuotaPolicy, SqliteStore, SystemClock, UsageQuotaTracker};

use super::{print_json, CommandResult};

#[derive(Subcommand)]
pub enum QuotaAction {
    /// Show today's usage and remaining allowance
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record one AI reflection message, failing when the allowance is used up
    Use,
}

pub fn run(action: QuotaAction) -> CommandResult {
    let store = SqliteStore::open()?;
    let config = Config::load_or_default();
    let policy = QuotaPolicy::from(&config.quota);
    let tracker = UsageQuotaTracker::new(&store, SystemClock);

    match action {
        QuotaAction::Status { json } => {
            let record = tracker.read();
            let remaining = policy.remaining(record.count);
            if json {
                print_json(&serde_json::json!({
                    "count": record.count,
                    "dateKey": record.date_key,
                    "remaining": remaining,
                }))?;
            } else {
                println!("Used today: {}", record.count);
                println!("{remaining}");
            }
        }
        QuotaAction::Use => {
            let count = tracker.try_consume(&policy)?;
            println!("{count} used, {}", policy.remaining(count));
        }
    }
    Ok(())
}
