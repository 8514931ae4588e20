//! Integration tests for the usage quota and reflection journal on SQLite.

use chrono::NaiveDate;
use sakina_core::quota::AI_USAGE_KEY;
use sakina_core::{
    Allowance, Config, CoreError, FixedClock, KeyValueStore, QuotaPolicy, ReflectionJournal,
    SqliteStore, UsageQuotaTracker, UsageRecord,
};

fn on(day: u32) -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, day).unwrap())
}

#[test]
fn stale_record_resets_and_persists() {
    let store = SqliteStore::open_memory().unwrap();
    store
        .set(AI_USAGE_KEY, r#"{"count":5,"dateKey":"2024-01-01"}"#)
        .unwrap();

    let tracker = UsageQuotaTracker::new(&store, on(2));
    assert_eq!(tracker.read(), UsageRecord::new(0, "2024-01-02"));
    assert_eq!(
        store.get(AI_USAGE_KEY).unwrap().as_deref(),
        Some(r#"{"count":0,"dateKey":"2024-01-02"}"#)
    );
}

#[test]
fn free_tier_day_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sakina.db");
    let policy = QuotaPolicy::from(&Config::default().quota);

    for expected in 1..=3 {
        let store = SqliteStore::open_at(&path).unwrap();
        let tracker = UsageQuotaTracker::new(&store, on(5));
        assert_eq!(tracker.try_consume(&policy).unwrap(), expected);
    }

    let store = SqliteStore::open_at(&path).unwrap();
    let tracker = UsageQuotaTracker::new(&store, on(5));
    let count = tracker.read().count;
    assert_eq!(policy.remaining(count), Allowance::Remaining(0));
    assert!(matches!(
        tracker.try_consume(&policy),
        Err(CoreError::QuotaExhausted { limit: 3 })
    ));

    let next_day = UsageQuotaTracker::new(&store, on(6));
    assert_eq!(policy.remaining(next_day.read().count), Allowance::Remaining(3));
}

#[test]
fn journal_feeds_recent_context() {
    let store = SqliteStore::open_memory().unwrap();
    for day in 1..=5 {
        ReflectionJournal::new(&store, on(day))
            .add(&format!("stayed patient on day {day}"))
            .unwrap();
    }

    let journal = ReflectionJournal::new(&store, on(5));
    assert!(journal.has_reflected_today());
    assert_eq!(
        journal.recent_contents(3),
        vec![
            "stayed patient on day 5",
            "stayed patient on day 4",
            "stayed patient on day 3"
        ]
    );
    let past = journal.resurface().unwrap();
    assert_ne!(past.content, "stayed patient on day 5");
}
