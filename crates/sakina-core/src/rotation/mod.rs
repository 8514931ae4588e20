//! Deterministic daily rotation.
//!
//! - [`RecencyLedger`]: bounded per-stream history of shown ids
//! - [`Selector`]: day-seeded index plus recency avoidance
//!
//! Selection is a pure function of the day ordinal, the candidate list, the
//! stream offset and the ledger contents. Every device showing "today's
//! verse" on the same calendar day agrees without talking to a server.

pub mod ledger;
pub mod selector;

pub use ledger::{RecencyLedger, DEFAULT_WINDOW_SIZE};
pub use selector::{
    char_code_sum, deterministic_index, deterministic_index_with, first_char_code, Selector,
    DEFAULT_PRIME,
};
