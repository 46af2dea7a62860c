//! Core data types for the storage layer.

use chrono::{DateTime, Datelike, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Digits of sub-second precision kept on every stored timestamp.
pub(crate) const TIMESTAMP_PRECISION: u16 = 6;

/// Earliest year a stored timestamp can carry.
pub const MIN_STORED_YEAR: i32 = 1;

/// Latest year a stored timestamp can carry. Later years need a fifth digit
/// and break the fixed-width text encoding.
pub const MAX_STORED_YEAR: i32 = 9999;

/// Whether the store can keep `instant` without losing ordering.
pub fn is_storable(instant: &DateTime<Utc>) -> bool {
    (MIN_STORED_YEAR..=MAX_STORED_YEAR).contains(&instant.year())
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier (e.g. `amber-falcon-42`)
    pub id: String,

    /// Free-form body
    pub text: String,

    /// The instant this entry is about
    pub entry_date: DateTime<Utc>,

    /// When this entry was created
    pub created_date: DateTime<Utc>,

    /// Tags associated with this entry
    pub tags: Vec<String>,
}

impl Entry {
    /// Build a new entry stamped with the current time.
    ///
    /// Timestamps are truncated to microseconds, the precision the store keeps.
    pub fn new(id: impl Into<String>, text: impl Into<String>, entry_date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            entry_date: entry_date.trunc_subsecs(TIMESTAMP_PRECISION),
            created_date: Utc::now().trunc_subsecs(TIMESTAMP_PRECISION),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date.trunc_subsecs(TIMESTAMP_PRECISION);
        self
    }

    /// Tags that would be persisted by an add or update (blank tags dropped).
    pub fn stored_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !tag.trim().is_empty())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Inclusive date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// Filter for listing entries.
///
/// The range is applied first; `count` then truncates the ordered result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    /// Maximum number of results
    pub count: Option<usize>,

    /// Inclusive `entry_date` bounds
    pub range: Option<DateRange>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.range = Some(DateRange::new(start, end));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_entry_builder() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        let entry = Entry::new("amber-falcon-42", "hello", date)
            .with_tags(vec!["x".to_string(), " ".to_string()]);

        assert_eq!(entry.id, "amber-falcon-42");
        assert_eq!(entry.entry_date, date);
        assert_eq!(entry.stored_tags().collect::<Vec<_>>(), vec!["x"]);
        assert!(entry.has_tag("x"));
        assert!(!entry.has_tag("y"));
    }

    #[test]
    fn test_timestamps_truncated_to_micros() {
        let date = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let entry = Entry::new("a-b-1", "t", date).with_created_date(date);

        assert_eq!(entry.entry_date.nanosecond(), 123_456_000);
        assert_eq!(entry.created_date.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_entry_query_builder() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let query = EntryQuery::new().count(5).range(start, end);

        assert_eq!(query.count, Some(5));
        assert_eq!(query.range, Some(DateRange::new(start, end)));
        assert_eq!(EntryQuery::new(), EntryQuery::default());
    }

    #[test]
    fn test_storable_years() {
        assert!(is_storable(&Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()));
        assert!(is_storable(&Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap()));
        assert!(!is_storable(&Utc.with_ymd_and_hms(0, 12, 31, 0, 0, 0).unwrap()));
        assert!(!is_storable(&Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap()));
        assert!(!is_storable(&Utc.with_ymd_and_hms(-1807, 9, 19, 0, 0, 0).unwrap()));
    }
}
