//! Day-scoped usage quota (AI reflection messages sent today).
//!
//! The tracker only counts. Deciding whether another message is allowed is
//! the caller's job, usually through [`QuotaPolicy`] before calling
//! [`UsageQuotaTracker::increment`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::diagnostics::{Diagnostics, FaultKind, StorageFault};
use crate::error::CoreError;
use crate::storage::{KeyValueStore, QuotaConfig};

/// Storage key for the AI reflection usage record.
pub const AI_USAGE_KEY: &str = "sakina-ai-usage";

/// Persisted as `{"count": N, "dateKey": "YYYY-MM-DD"}`.
///
/// Records written by older builds as `{"date": ..., "count": ...}` are read
/// as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    #[serde(default)]
    pub count: u32,
    #[serde(rename = "dateKey", alias = "date", default)]
    pub date_key: String,
}

impl UsageRecord {
    pub fn new(count: u32, date_key: impl Into<String>) -> Self {
        Self {
            count,
            date_key: date_key.into(),
        }
    }
}

pub struct UsageQuotaTracker<S, C> {
    store: S,
    clock: C,
    key: String,
    diagnostics: Diagnostics,
}

impl<S: KeyValueStore, C: Clock> UsageQuotaTracker<S, C> {
    /// Tracker for AI reflection messages.
    pub fn new(store: S, clock: C) -> Self {
        Self::with_key(store, clock, AI_USAGE_KEY)
    }

    /// Tracker persisted under a custom key.
    pub fn with_key(store: S, clock: C, key: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            key: key.into(),
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Today's usage.
    ///
    /// A record from an earlier day is reset to zero and written back.
    /// Missing, unreadable or malformed records read as zero for today
    /// without being written.
    pub fn read(&self) -> UsageRecord {
        let today = self.clock.date_key();

        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return UsageRecord::new(0, today),
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Read, &self.key, e));
                return UsageRecord::new(0, today);
            }
        };

        let record: UsageRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Malformed, &self.key, e));
                return UsageRecord::new(0, today);
            }
        };

        if record.date_key != today {
            tracing::debug!(
                key = %self.key,
                stale = %record.date_key,
                today = %today,
                "usage quota rolled over"
            );
            let reset = UsageRecord::new(0, today);
            self.write(&reset);
            return reset;
        }

        record
    }

    /// Store `current_count + 1` for today and return it.
    ///
    /// `current_count` should come from [`Self::read`]. No ceiling is applied.
    pub fn increment(&self, current_count: u32) -> u32 {
        let count = current_count.saturating_add(1);
        self.write(&UsageRecord::new(count, self.clock.date_key()));
        count
    }

    /// Read, check `policy`, and increment if allowed.
    ///
    /// # Errors
    /// Returns [`CoreError::QuotaExhausted`] when today's allowance is used up.
    pub fn try_consume(&self, policy: &QuotaPolicy) -> Result<u32, CoreError> {
        let record = self.read();
        if !policy.can_send(record.count) {
            return Err(CoreError::QuotaExhausted {
                limit: policy.free_daily_limit,
            });
        }
        Ok(self.increment(record.count))
    }

    fn write(&self, record: &UsageRecord) {
        let result = serde_json::to_string(record)
            .map_err(|e| e.to_string())
            .and_then(|json| self.store.set(&self.key, &json).map_err(|e| e.to_string()));
        if let Err(message) = result {
            self.diagnostics
                .report(StorageFault::new(FaultKind::Write, &self.key, message));
        }
    }
}

/// Free-tier allowance for AI reflection messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaPolicy {
    pub free_daily_limit: u32,
    pub premium: bool,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            free_daily_limit: 3,
            premium: false,
        }
    }
}

impl From<&QuotaConfig> for QuotaPolicy {
    fn from(config: &QuotaConfig) -> Self {
        Self {
            free_daily_limit: config.free_daily_limit,
            premium: config.premium,
        }
    }
}

impl QuotaPolicy {
    pub fn can_send(&self, count: u32) -> bool {
        self.premium || count < self.free_daily_limit
    }

    pub fn remaining(&self, count: u32) -> Allowance {
        if self.premium {
            Allowance::Unlimited
        } else {
            Allowance::Remaining(self.free_daily_limit.saturating_sub(count))
        }
    }
}

/// What is left of today's allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Allowance {
    Unlimited,
    Remaining(u32),
}

impl fmt::Display for Allowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allowance::Unlimited => f.write_str("Unlimited"),
            Allowance::Remaining(n) => write!(f, "{n} remaining today"),
        }
    }
}
