//! Error types for Journalr core operations.
//!
//! Expected "nothing to do" outcomes (unknown id, zero rows affected) are
//! reported as `false` / `None` by the store. The variants here are hard
//! failures; the CLI layer maps them to user-facing messages.

use thiserror::Error;

/// Result type alias for Journalr operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for Journalr operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A required resource (word list, store directory) is missing or unwritable
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// The store file or its schema could not be created
    #[error("Store initialization failed: {0}")]
    StoreInit(String),

    /// An entry with this id already exists
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = JournalError::DuplicateId("amber-falcon-42".to_string());
        assert_eq!(err.to_string(), "Duplicate entry id: amber-falcon-42");

        let err = JournalError::ResourceUnavailable("words.txt".to_string());
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn test_sqlite_error_converts() {
        let err: JournalError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, JournalError::Sqlite { .. }));
    }
}
