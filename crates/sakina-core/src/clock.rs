//! Local clock adapter.
//!
//! Everything day-scoped in the crate (rotation seeds, quota resets, the
//! reflection journal) derives its notion of "today" from a [`Clock`]. The
//! day rolls over at the user's local midnight, never at UTC midnight.
//!
//! A [`DayContext`] is recomputed on every call. Do not hold one across a
//! long-lived session: it goes stale at midnight.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Format used for date keys (`YYYY-MM-DD`, zero padded).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Source of local wall-clock time.
pub trait Clock {
    /// Current local date and time, without timezone information.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Day-of-year ordinal for today (Jan 1 is day 1).
    fn day_ordinal(&self) -> i64 {
        DayContext::for_date(self.today()).day_ordinal
    }

    /// Today's `YYYY-MM-DD` key.
    fn date_key(&self) -> String {
        DayContext::for_date(self.today()).date_key
    }

    /// Derive the full day context in one read of the clock.
    fn day_context(&self) -> DayContext {
        DayContext::for_date(self.today())
    }

    /// Whether `date_key` names the current local day.
    fn is_today(&self, date_key: &str) -> bool {
        date_key == self.date_key()
    }

    /// Time remaining until the next local midnight.
    fn time_until_midnight(&self) -> Duration {
        let now = self.now();
        match now.date().succ_opt().and_then(|d| d.and_hms_opt(0, 0, 0)) {
            Some(midnight) => midnight - now,
            None => Duration::zero(),
        }
    }
}

/// Clock backed by the operating system's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant (tests, replays).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Noon on the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Derived per-day values. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayContext {
    /// Days since local Jan 0, so Jan 1 is 1 and Dec 31 is 365 or 366.
    pub day_ordinal: i64,
    /// Local date as `YYYY-MM-DD`.
    pub date_key: String,
}

impl DayContext {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            day_ordinal: i64::from(date.ordinal()),
            date_key: date.format(DATE_KEY_FORMAT).to_string(),
        }
    }
}

/// Parse a `YYYY-MM-DD` key back into a date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}
