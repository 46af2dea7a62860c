//! Store trait definition.
//!
//! The `JournalStore` trait defines the interface the CLI programs against.
//! Every operation runs as a single atomic transaction with no state kept
//! between calls.

use std::path::Path;

use super::types::{Entry, EntryQuery};
use crate::error::Result;

/// Journal persistence and query interface.
///
/// All implementations must ensure:
/// - Every tag row references an existing entry
/// - Multi-statement writes are all-or-nothing
/// - "Most recent" means ordered by `entry_date` descending
///
/// Expected no-op outcomes (unknown id, nothing to delete) are reported as
/// `Ok(false)` / `Ok(None)`; `Err` is reserved for hard failures.
pub trait JournalStore {
    /// Open (creating if needed) the store at `path` and ensure its schema.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::ResourceUnavailable` if the parent directory
    /// cannot be created, or `JournalError::StoreInit` if the store file or
    /// schema cannot be created.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    // --- Write operations ---

    /// Insert an entry and its non-blank tags.
    ///
    /// Returns `true` iff exactly one entry row was inserted.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::DuplicateId` if the id is already taken.
    fn add_entry(&self, entry: &Entry) -> Result<bool>;

    /// Replace an entry's text, entry date, and full tag set.
    ///
    /// Returns `true` iff exactly one entry row was updated.
    fn update_entry(&self, entry: &Entry) -> Result<bool>;

    /// Delete an entry and its tags.
    ///
    /// Returns `true` iff exactly one entry row was deleted.
    fn remove_entry(&self, id: &str) -> Result<bool>;

    /// Delete the `count` most recent entries and their tags.
    ///
    /// Returns `true` iff at least one entry row was deleted.
    fn remove_recent(&self, count: usize) -> Result<bool>;

    /// Append tags to an existing entry. Blank and duplicate tags are kept.
    ///
    /// Returns `false` without writing anything if the id does not exist.
    fn tag_entry(&self, id: &str, tags: &[String]) -> Result<bool>;

    /// Append tags to each of the `count` most recent entries.
    ///
    /// Always returns `true` once committed, even if there was nothing to tag.
    fn tag_recent(&self, count: usize, tags: &[String]) -> Result<bool>;

    // --- Read operations ---

    /// Get an entry by id, with its tags.
    ///
    /// Returns `Ok(None)` if not found.
    fn get_entry(&self, id: &str) -> Result<Option<Entry>>;

    /// List entries matching the query, newest `entry_date` first.
    ///
    /// Tag filtering is not applied here; callers filter the result.
    fn list_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>>;

    /// Total number of stored entries.
    fn count_entries(&self) -> Result<usize>;

    /// Number of tag rows referencing `id`.
    fn count_tags(&self, id: &str) -> Result<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_journal_store<T: JournalStore>(_store: T) {}
    }
}
