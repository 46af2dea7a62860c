//! Entry row type and timestamp encoding for database queries.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{JournalError, Result};
use crate::storage::types::{is_storable, Entry, MAX_STORED_YEAR, MIN_STORED_YEAR};

/// Encode a timestamp as fixed-width RFC 3339 (`2024-01-01T00:00:00.000000Z`).
///
/// Fixed width keeps lexical order equal to chronological order, which the
/// `ORDER BY` and range comparisons rely on.
///
/// # Errors
///
/// Returns `JournalError::Validation` for years outside
/// `MIN_STORED_YEAR..=MAX_STORED_YEAR`, which have no fixed-width form.
pub fn encode_timestamp(value: &DateTime<Utc>) -> Result<String> {
    if !is_storable(value) {
        return Err(JournalError::Validation(format!(
            "Timestamp {} is outside years {:04}-{:04}",
            value, MIN_STORED_YEAR, MAX_STORED_YEAR
        )));
    }
    Ok(value.to_rfc3339_opts(SecondsFormat::Micros, true))
}

/// Decode a stored timestamp.
///
/// Also accepts the naive `YYYY-MM-DD HH:MM:SS[.f]` form older journals wrote.
pub fn decode_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| JournalError::Validation(format!("Invalid timestamp {:?}: {}", value, e)))
}

/// Raw row data from the Entry table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub text: String,
    pub entry_date: String,
    pub created_date: String,
}

impl EntryRow {
    /// Column list matching `EntryRow::from_row`.
    pub const COLUMNS: &'static str = "e.id, e.text, e.entry_date, e.created_date";

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            text: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            entry_date: row.get(2)?,
            created_date: row.get(3)?,
        })
    }

    /// Convert into an `Entry`, attaching the supplied tags.
    pub fn into_entry(self, tags: Vec<String>) -> Result<Entry> {
        Ok(Entry {
            entry_date: decode_timestamp(&self.entry_date)?,
            created_date: decode_timestamp(&self.created_date)?,
            id: self.id,
            text: self.text,
            tags,
        })
    }
}
