//! # Journalr Core
//!
//! Core library for Journalr - a local, CLI-first personal journal.
//!
//! This crate provides the persistence and query engine, the entry data
//! model, and identifier generation, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `JournalStore` trait, query types, and the SQLite backend
//! - **id**: Human-memorable entry identifier generation
//! - **error**: Error taxonomy shared by all core operations

pub mod error;
pub mod id;
pub mod storage;

pub use error::{JournalError, Result};
pub use id::{generate_id, IdGenerator, WordList, WordSource};
pub use storage::{is_storable, DateRange, Entry, EntryQuery, JournalStore, SqliteJournalStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
