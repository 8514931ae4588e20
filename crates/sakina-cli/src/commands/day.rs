use sakina_core::{Clock, SystemClock};

use super::{print_json, CommandResult};

pub fn run(json: bool) -> CommandResult {
    let clock = SystemClock;
    let day = clock.day_context();
    let until = clock.time_until_midnight();

    if json {
        print_json(&serde_json::json!({
            "dayOrdinal": day.day_ordinal,
            "dateKey": day.date_key,
            "secondsUntilMidnight": until.num_seconds(),
        }))?;
    } else {
        println!("{} (day {})", day.date_key, day.day_ordinal);
        println!(
            "Next rotation in {}h {:02}m",
            until.num_hours(),
            until.num_minutes() % 60
        );
    }
    Ok(())
}
