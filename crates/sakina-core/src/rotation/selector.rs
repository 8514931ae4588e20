//! Deterministic selector.
//!
//! `index = |(day_ordinal * prime + offset) mod candidate_count|`
//!
//! The prime spreads consecutive days across the candidate range instead of
//! stepping through it in order. Streams use distinct offsets so that two
//! catalogs consulted on the same day are not locked to the same position.

use crate::clock::DayContext;
use crate::content::ContentItem;
use crate::diagnostics::Diagnostics;
use crate::error::ValidationError;
use crate::storage::{KeyValueStore, RotationConfig};

use super::ledger::{RecencyLedger, DEFAULT_WINDOW_SIZE};

/// Default hash multiplier.
pub const DEFAULT_PRIME: i64 = 7919;

/// Day-seeded index into `candidate_count` items using [`DEFAULT_PRIME`].
///
/// Returns `None` only when `candidate_count` is zero.
pub fn deterministic_index(day_ordinal: i64, candidate_count: usize, offset: i64) -> Option<usize> {
    deterministic_index_with(DEFAULT_PRIME, day_ordinal, candidate_count, offset)
}

/// Same as [`deterministic_index`] with an explicit multiplier.
pub fn deterministic_index_with(
    prime: i64,
    day_ordinal: i64,
    candidate_count: usize,
    offset: i64,
) -> Option<usize> {
    let count = i64::try_from(candidate_count).ok().filter(|c| *c > 0)?;
    let hash = day_ordinal.wrapping_mul(prime).wrapping_add(offset) % count;
    usize::try_from(hash.unsigned_abs()).ok()
}

/// Sum of the UTF-16 code units of `label`.
pub fn char_code_sum(label: &str) -> i64 {
    label.encode_utf16().map(i64::from).sum()
}

/// UTF-16 code unit of the first character of `label`, 0 when empty.
pub fn first_char_code(label: &str) -> i64 {
    label.encode_utf16().next().map(i64::from).unwrap_or(0)
}

/// Picks today's item for a stream while steering around recent picks.
pub struct Selector<S> {
    ledger: RecencyLedger<S>,
    prime: i64,
    window_size: usize,
}

impl<S: KeyValueStore> Selector<S> {
    /// Selector with the default prime and window.
    pub fn new(store: S) -> Self {
        Self {
            ledger: RecencyLedger::new(store),
            prime: DEFAULT_PRIME,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn from_config(store: S, config: &RotationConfig, diagnostics: Diagnostics) -> Self {
        Self {
            ledger: RecencyLedger::with_diagnostics(store, diagnostics),
            prime: config.prime,
            window_size: config.window_size,
        }
    }

    pub fn ledger(&self) -> &RecencyLedger<S> {
        &self.ledger
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Index for `candidate_count` items under this selector's prime.
    pub fn index_for(&self, day_ordinal: i64, candidate_count: usize, offset: i64) -> Option<usize> {
        deterministic_index_with(self.prime, day_ordinal, candidate_count, offset)
    }

    /// Select today's item from `candidates` for `stream_key`.
    ///
    /// Candidates shown within the stream's recency window are skipped. When
    /// that leaves nothing, the whole candidate list is used again. The chosen
    /// id is recorded in the ledger before returning.
    ///
    /// A second call with the same date and offset returns the first call's
    /// pick as long as it is still among `candidates`. The index comes from
    /// `day.day_ordinal`; the pin is keyed by `day.date_key`.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyCollection`] if `candidates` is empty.
    pub fn select_with_avoidance<'c, T: ContentItem>(
        &self,
        candidates: &'c [T],
        day: &DayContext,
        stream_key: &str,
        offset: i64,
    ) -> Result<&'c T, ValidationError> {
        if candidates.is_empty() {
            return Err(ValidationError::EmptyCollection(format!(
                "no candidates for stream '{stream_key}'"
            )));
        }

        if let Some(pinned) = self.ledger.day_pick(stream_key, &day.date_key, offset) {
            if let Some(item) = candidates.iter().find(|c| c.id() == pinned.as_str()) {
                self.ledger
                    .record_used(stream_key, &pinned, self.window_size);
                return Ok(item);
            }
        }

        let recent = self.ledger.get_recent(stream_key, self.window_size);
        let mut pool: Vec<&'c T> = candidates
            .iter()
            .filter(|c| {
                let id = c.id();
                !recent.iter().any(|r| r.as_str() == id.as_ref())
            })
            .collect();

        if pool.is_empty() {
            tracing::debug!(
                stream = stream_key,
                candidates = candidates.len(),
                "all candidates recently shown, using full list"
            );
            pool = candidates.iter().collect();
        }

        let index = self
            .index_for(day.day_ordinal, pool.len(), offset)
            .ok_or_else(|| ValidationError::EmptyCollection(stream_key.to_string()))?;
        let selected = pool[index];

        let id = selected.id();
        tracing::debug!(stream = stream_key, date = %day.date_key, offset, id = %id, "selected");
        self.ledger.record_used(stream_key, &id, self.window_size);
        self.ledger
            .set_day_pick(stream_key, &day.date_key, offset, &id);

        Ok(selected)
    }
}
