//! Application-level utilities for the Journalr CLI.
//!
//! This module provides:
//! - Path resolution for the config and store files
//! - The per-run context handed to command handlers

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
