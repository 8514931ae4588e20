//! Patience (sabr) reflection journal.
//!
//! Reflections are user-written, so unlike rotation state a failed write is
//! returned to the caller. Reading stays lenient: entries that fail
//! validation are dropped, and a value that is not JSON at all is removed.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::diagnostics::{Diagnostics, FaultKind, StorageFault};
use crate::error::{CoreError, ValidationError};
use crate::rotation::deterministic_index;
use crate::storage::KeyValueStore;

pub const REFLECTIONS_KEY: &str = "sakina-sabr-reflections";
pub const MAX_REFLECTION_LENGTH: usize = 2000;
pub const MAX_REFLECTIONS_STORED: usize = 100;

const RESURFACE_OFFSET: i64 = 7;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    pub id: String,
    /// Local timestamp, `YYYY-MM-DDTHH:MM:SS`.
    pub date: String,
    pub content: String,
}

impl Reflection {
    fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.content.chars().count() <= MAX_REFLECTION_LENGTH
    }

    fn written_on(&self, date_key: &str) -> bool {
        self.date.starts_with(date_key)
    }
}

pub struct ReflectionJournal<S, C> {
    store: S,
    clock: C,
    diagnostics: Diagnostics,
}

impl<S: KeyValueStore, C: Clock> ReflectionJournal<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Stored reflections, newest first.
    pub fn entries(&self) -> Vec<Reflection> {
        let raw = match self.store.get(REFLECTIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Read, REFLECTIONS_KEY, e));
                return Vec::new();
            }
        };

        let parsed: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                self.diagnostics
                    .report(StorageFault::new(FaultKind::Malformed, REFLECTIONS_KEY, e));
                if let Err(e) = self.store.remove(REFLECTIONS_KEY) {
                    self.diagnostics
                        .report(StorageFault::new(FaultKind::Write, REFLECTIONS_KEY, e));
                }
                return Vec::new();
            }
        };

        let Some(items) = parsed.as_array() else {
            self.diagnostics.report(StorageFault::new(
                FaultKind::Malformed,
                REFLECTIONS_KEY,
                "expected a JSON array of reflections",
            ));
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|v| serde_json::from_value::<Reflection>(v.clone()).ok())
            .filter(Reflection::is_valid)
            .take(MAX_REFLECTIONS_STORED)
            .collect()
    }

    /// Save a new reflection at the front of the journal.
    ///
    /// # Errors
    /// Returns a validation error for empty or overlong input, or a storage
    /// error if the journal cannot be written.
    pub fn add(&self, content: &str) -> Result<Reflection, CoreError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "content".into(),
                message: "reflection is empty".into(),
            }
            .into());
        }
        let len = trimmed.chars().count();
        if len > MAX_REFLECTION_LENGTH {
            return Err(ValidationError::TooLong {
                field: "content".into(),
                len,
                max: MAX_REFLECTION_LENGTH,
            }
            .into());
        }

        let reflection = Reflection {
            id: uuid::Uuid::new_v4().to_string(),
            date: self.clock.now().format(TIMESTAMP_FORMAT).to_string(),
            content: trimmed.to_string(),
        };

        let mut entries = self.entries();
        entries.insert(0, reflection.clone());
        entries.truncate(MAX_REFLECTIONS_STORED);

        let json = serde_json::to_string(&entries)?;
        self.store.set(REFLECTIONS_KEY, &json)?;
        Ok(reflection)
    }

    pub fn has_reflected_today(&self) -> bool {
        let today = self.clock.date_key();
        self.entries().iter().any(|r| r.written_on(&today))
    }

    /// Contents of the `n` newest reflections, e.g. as context for the AI
    /// reflection chat.
    pub fn recent_contents(&self, n: usize) -> Vec<String> {
        self.entries()
            .into_iter()
            .take(n)
            .map(|r| r.content)
            .collect()
    }

    /// A reflection from an earlier day to show again. The choice is fixed for
    /// the whole day. `None` until there are at least two reflections and one
    /// of them predates today.
    pub fn resurface(&self) -> Option<Reflection> {
        let entries = self.entries();
        if entries.len() < 2 {
            return None;
        }
        let today = self.clock.day_context();
        let mut older: Vec<Reflection> = entries
            .into_iter()
            .filter(|r| !r.written_on(&today.date_key))
            .collect();
        let index = deterministic_index(today.day_ordinal, older.len(), RESURFACE_OFFSET)?;
        Some(older.swap_remove(index))
    }
}
