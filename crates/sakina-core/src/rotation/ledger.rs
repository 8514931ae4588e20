//! Per-stream recency ledger.
//!
//! Each stream key holds a JSON array of ids, most recent first, at most
//! `window_size` long and free of duplicates. Missing, unreadable or
//! malformed values read as an empty history. Failed writes are dropped.
//! Both cases are reported to [`Diagnostics`] and never to the caller.
//!
//! Next to the history, `<stream_key>-today` remembers which id each offset
//! picked on the current date, so repeated views return the same item even
//! though the first view already moved it into the history. Picks are keyed
//! by the full `YYYY-MM-DD` date: the day ordinal restarts every January 1.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostics, FaultKind, StorageFault};
use crate::storage::KeyValueStore;

/// Default number of ids remembered per stream.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Picks made on one date, keyed by offset.
///
/// Values without a `date` (older builds stored only the day ordinal) never
/// match and are replaced on the next pick.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DayPicks {
    #[serde(default)]
    date: String,
    #[serde(default)]
    picks: BTreeMap<String, String>,
}

fn day_pick_key(stream_key: &str) -> String {
    format!("{stream_key}-today")
}

pub struct RecencyLedger<S> {
    store: S,
    diagnostics: Diagnostics,
}

impl<S: KeyValueStore> RecencyLedger<S> {
    pub fn new(store: S) -> Self {
        Self::with_diagnostics(store, Diagnostics::default())
    }

    pub fn with_diagnostics(store: S, diagnostics: Diagnostics) -> Self {
        Self { store, diagnostics }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Recently used ids for `stream_key`, most recent first, at most `limit`.
    ///
    /// Non-string entries are skipped and repeated ids keep only their most
    /// recent position.
    pub fn get_recent(&self, stream_key: &str, limit: usize) -> Vec<String> {
        let raw = match self.store.get(stream_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Read, stream_key, e));
                return Vec::new();
            }
        };

        let parsed: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Malformed, stream_key, e));
                return Vec::new();
            }
        };

        let Some(entries) = parsed.as_array() else {
            self.diagnostics.report(StorageFault::new(
                FaultKind::Malformed,
                stream_key,
                "expected a JSON array of ids",
            ));
            return Vec::new();
        };

        let mut ids: Vec<String> = Vec::with_capacity(limit.min(entries.len()));
        for id in entries.iter().filter_map(|v| v.as_str()) {
            if ids.len() >= limit {
                break;
            }
            if !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
        ids
    }

    /// Move `id` to the front of the stream's history, evicting the oldest
    /// entries beyond `window_size`.
    pub fn record_used(&self, stream_key: &str, id: &str, window_size: usize) {
        let mut recent = self.get_recent(stream_key, window_size.saturating_sub(1));
        recent.retain(|r| r != id);
        recent.insert(0, id.to_string());
        recent.truncate(window_size);

        let json = match serde_json::to_string(&recent) {
            Ok(json) => json,
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Write, stream_key, e));
                return;
            }
        };
        if let Err(e) = self.store.set(stream_key, &json) {
            self.diagnostics
                .report(StorageFault::new(FaultKind::Write, stream_key, e));
        }
    }

    /// The id already picked for `(date_key, offset)` on this stream.
    pub fn day_pick(&self, stream_key: &str, date_key: &str, offset: i64) -> Option<String> {
        let picks = self.read_day_picks(&day_pick_key(stream_key))?;
        if picks.date != date_key {
            return None;
        }
        picks.picks.get(&offset.to_string()).cloned()
    }

    /// Remember `id` as the pick for `(date_key, offset)`. Picks from other
    /// dates are dropped.
    pub fn set_day_pick(&self, stream_key: &str, date_key: &str, offset: i64, id: &str) {
        let key = day_pick_key(stream_key);
        let mut picks = self
            .read_day_picks(&key)
            .filter(|p| p.date == date_key)
            .unwrap_or_else(|| DayPicks {
                date: date_key.to_string(),
                picks: BTreeMap::new(),
            });
        picks.picks.insert(offset.to_string(), id.to_string());

        let result = serde_json::to_string(&picks)
            .map_err(|e| e.to_string())
            .and_then(|json| self.store.set(&key, &json).map_err(|e| e.to_string()));
        if let Err(message) = result {
            self.diagnostics
                .report(StorageFault::new(FaultKind::Write, &key, message));
        }
    }

    fn read_day_picks(&self, key: &str) -> Option<DayPicks> {
        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Read, key, e));
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(picks) => Some(picks),
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Malformed, key, e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::{Arc, Mutex};

    const KEY: &str = "sakina-recent-test";

    fn recording_ledger(store: &MemoryStore) -> (RecencyLedger<&MemoryStore>, Arc<Mutex<Vec<StorageFault>>>) {
        let faults = Arc::new(Mutex::new(Vec::new()));
        let sink_faults = Arc::clone(&faults);
        let diagnostics = Diagnostics::new(move |f: &StorageFault| {
            sink_faults.lock().unwrap().push(f.clone());
        });
        (RecencyLedger::with_diagnostics(store, diagnostics), faults)
    }

    #[test]
    fn empty_when_missing() {
        let store = MemoryStore::new();
        let ledger = RecencyLedger::new(&store);
        assert!(ledger.get_recent(KEY, 5).is_empty());
    }

    #[test]
    fn record_prepends_and_persists_json() {
        let store = MemoryStore::new();
        let ledger = RecencyLedger::new(&store);
        ledger.record_used(KEY, "1", 5);
        ledger.record_used(KEY, "2", 5);
        assert_eq!(ledger.get_recent(KEY, 5), vec!["2", "1"]);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some(r#"["2","1"]"#));
    }

    #[test]
    fn record_moves_existing_id_to_front() {
        let store = MemoryStore::new();
        let ledger = RecencyLedger::new(&store);
        for id in ["1", "2", "3"] {
            ledger.record_used(KEY, id, 5);
        }
        ledger.record_used(KEY, "1", 5);
        assert_eq!(ledger.get_recent(KEY, 5), vec!["1", "3", "2"]);
    }

    #[test]
    fn record_evicts_beyond_window() {
        let store = MemoryStore::new();
        let ledger = RecencyLedger::new(&store);
        for id in ["a", "b", "c", "d", "e", "f", "g"] {
            ledger.record_used(KEY, id, 5);
        }
        assert_eq!(ledger.get_recent(KEY, 10), vec!["g", "f", "e", "d", "c"]);
    }

    #[test]
    fn get_recent_respects_limit() {
        let store = MemoryStore::new();
        store.set(KEY, r#"["5","4","3","2","1"]"#).unwrap();
        let ledger = RecencyLedger::new(&store);
        assert_eq!(ledger.get_recent(KEY, 2), vec!["5", "4"]);
        assert!(ledger.get_recent(KEY, 0).is_empty());
    }

    #[test]
    fn non_json_reads_as_empty_and_is_reported() {
        let store = MemoryStore::new();
        store.set(KEY, "definitely not json").unwrap();
        let (ledger, faults) = recording_ledger(&store);

        assert!(ledger.get_recent(KEY, 5).is_empty());
        let faults = faults.lock().unwrap();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].kind, FaultKind::Malformed);
    }

    #[test]
    fn non_array_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(KEY, r#"{"ids":["1"]}"#).unwrap();
        let ledger = RecencyLedger::new(&store);
        assert!(ledger.get_recent(KEY, 5).is_empty());
    }

    #[test]
    fn tampered_array_is_cleaned() {
        let store = MemoryStore::new();
        store.set(KEY, r#"["1", 2, "1", null, "3"]"#).unwrap();
        let ledger = RecencyLedger::new(&store);
        assert_eq!(ledger.get_recent(KEY, 5), vec!["1", "3"]);
    }

    #[test]
    fn corrupt_history_is_overwritten_on_next_record() {
        let store = MemoryStore::new();
        store.set(KEY, "[[[").unwrap();
        let ledger = RecencyLedger::new(&store);
        ledger.record_used(KEY, "7", 5);
        assert_eq!(ledger.get_recent(KEY, 5), vec!["7"]);
    }

    #[test]
    fn write_failure_is_swallowed_and_reported() {
        let store = MemoryStore::with_quota(4);
        let (ledger, faults) = recording_ledger(&store);

        ledger.record_used(KEY, "1", 5);

        assert!(store.get(KEY).unwrap().is_none());
        let faults = faults.lock().unwrap();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].kind, FaultKind::Write);
        assert_eq!(faults[0].key, KEY);
    }

    #[test]
    fn day_pick_is_scoped_to_date_and_offset() {
        let store = MemoryStore::new();
        let ledger = RecencyLedger::new(&store);

        assert!(ledger.day_pick(KEY, "2024-01-10", 0).is_none());
        ledger.set_day_pick(KEY, "2024-01-10", 0, "3");
        ledger.set_day_pick(KEY, "2024-01-10", 112, "5");

        assert_eq!(ledger.day_pick(KEY, "2024-01-10", 0).as_deref(), Some("3"));
        assert_eq!(ledger.day_pick(KEY, "2024-01-10", 112).as_deref(), Some("5"));
        assert!(ledger.day_pick(KEY, "2024-01-10", 1).is_none());
        assert!(ledger.day_pick(KEY, "2024-01-11", 0).is_none());
        // The history itself is untouched.
        assert!(store.get(KEY).unwrap().is_none());
    }

    #[test]
    fn new_day_replaces_old_picks() {
        let store = MemoryStore::new();
        let ledger = RecencyLedger::new(&store);
        ledger.set_day_pick(KEY, "2024-01-10", 0, "3");
        ledger.set_day_pick(KEY, "2024-01-11", 112, "5");
        assert!(ledger.day_pick(KEY, "2024-01-10", 0).is_none());
        assert!(ledger.day_pick(KEY, "2024-01-11", 0).is_none());
        assert_eq!(ledger.day_pick(KEY, "2024-01-11", 112).as_deref(), Some("5"));
    }

    #[test]
    fn pick_from_same_date_last_year_is_stale() {
        let store = MemoryStore::new();
        let ledger = RecencyLedger::new(&store);
        ledger.set_day_pick(KEY, "2024-01-10", 0, "3");
        assert!(ledger.day_pick(KEY, "2025-01-10", 0).is_none());
    }

    #[test]
    fn ordinal_only_picks_never_match() {
        let store = MemoryStore::new();
        store
            .set(&day_pick_key(KEY), r#"{"day":10,"picks":{"0":"3"}}"#)
            .unwrap();
        let (ledger, faults) = recording_ledger(&store);

        assert!(ledger.day_pick(KEY, "2024-01-10", 0).is_none());
        assert!(faults.lock().unwrap().is_empty());

        ledger.set_day_pick(KEY, "2024-01-10", 0, "4");
        assert_eq!(ledger.day_pick(KEY, "2024-01-10", 0).as_deref(), Some("4"));
    }

    #[test]
    fn malformed_day_pick_reads_as_none() {
        let store = MemoryStore::new();
        store.set(&day_pick_key(KEY), "{oops").unwrap();
        let ledger = RecencyLedger::new(&store);
        assert!(ledger.day_pick(KEY, "2024-01-10", 0).is_none());
        ledger.set_day_pick(KEY, "2024-01-10", 0, "2");
        assert_eq!(ledger.day_pick(KEY, "2024-01-10", 0).as_deref(), Some("2"));
    }
}
