//! Upload History Module
//!
//! Small persisted list of past uploads (file name, query, timestamp, match
//! count) shown by the UI layer. Stored as JSON under one well-known key in
//! a pluggable key-value store; independent of the result cache and of the
//! orchestration contract.

pub mod store;
pub mod types;

pub use store::{FileStore, HistoryStore, KeyValueStore, MemoryStore};
pub use types::{HistoryEntry, HistoryError, HISTORY_KEY, MAX_HISTORY_ENTRIES};
