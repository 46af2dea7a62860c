//! Storage abstraction for Journalr.
//!
//! This module defines the `JournalStore` trait and the core types for
//! persisting and querying journal entries.
//!
//! ## Architecture
//!
//! - `traits`: the store interface
//! - `types`: `Entry` and the `EntryQuery` filter
//! - `sqlite`: the SQLite-backed implementation (one connection and one
//!   transaction per operation)

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteJournalStore;
pub use traits::JournalStore;
pub use types::{is_storable, DateRange, Entry, EntryQuery};
