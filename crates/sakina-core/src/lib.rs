//! # Sakina Core Library
//!
//! Deterministic, offline daily content rotation for the Sakina app. Every
//! device that asks for "today's verse" on the same local calendar day gets
//! the same answer without a server, while short-term repeats are avoided
//! through a small per-stream history kept in local storage.
//!
//! ## Architecture
//!
//! - **Clock**: local day ordinal and `YYYY-MM-DD` date key, rolling over at
//!   local midnight
//! - **Storage**: injected key-value store (SQLite on disk, in-memory for
//!   tests) and TOML configuration
//! - **Rotation**: recency ledger plus the day-seeded selector
//! - **Streams**: daily verse, supplication, remembrance phrase, mood pair and
//!   reflection prompt
//! - **Quota**: day-scoped AI reflection message counter
//! - **Journal**: patience reflections written by the user
//!
//! Storage faults in the rotation path are recovered locally and reported to
//! a [`Diagnostics`] sink; callers always receive content.
//!
//! ## Key Components
//!
//! - [`DailyContent`]: per-stream facades
//! - [`Selector`]: deterministic selection with recency avoidance
//! - [`UsageQuotaTracker`]: daily usage counter
//! - [`Config`]: application configuration management

pub mod clock;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod journal;
pub mod quota;
pub mod rotation;
pub mod storage;
pub mod streams;

pub use clock::{Clock, DayContext, FixedClock, SystemClock};
pub use content::{
    Catalog, ContentItem, Mood, MoodContent, RemembrancePhrase, Supplication,
    SupplicationCategory, Verse, VerseCategory,
};
pub use diagnostics::{DiagnosticSink, Diagnostics, FaultKind, StorageFault};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use journal::{Reflection, ReflectionJournal};
pub use quota::{Allowance, QuotaPolicy, UsageQuotaTracker, UsageRecord};
pub use rotation::{deterministic_index, RecencyLedger, Selector};
pub use storage::{Config, KeyValueStore, MemoryStore, SqliteStore};
pub use streams::DailyContent;
