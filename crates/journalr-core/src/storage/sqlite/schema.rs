//! Schema bootstrap for the journal store.
//!
//! Runs once per store construction, before any other operation.
//! Idempotent: every statement is `IF NOT EXISTS`, and timestamps already in
//! the fixed-width form are left alone.

use log::{info, warn};
use rusqlite::Connection;

use crate::error::{JournalError, Result};

use super::row::{decode_timestamp, encode_timestamp};

/// Table definitions.
///
/// `Entry.tags` is a comma-joined copy of the tags supplied at insert and is
/// not authoritative; the `Tag` table is. Neither a foreign key nor a
/// uniqueness constraint is declared on `Tag`: the store maintains the
/// reference itself and duplicate tag rows are allowed.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Entry (
    id TEXT PRIMARY KEY,
    text TEXT,
    entry_date DATETIME,
    created_date DATETIME,
    tags TEXT
);

CREATE TABLE IF NOT EXISTS Tag (
    entry_id TEXT,
    tag TEXT
);

CREATE INDEX IF NOT EXISTS Tag_entry_id ON Tag (entry_id);
"#;

/// `LIKE` pattern matched by values `encode_timestamp` writes.
const FIXED_WIDTH_PATTERN: &str = "____-__-__T__:__:__.______Z";

/// Create the `Entry` and `Tag` tables if they are absent, then rewrite any
/// naive `YYYY-MM-DD HH:MM:SS` timestamps into the fixed-width form.
///
/// # Errors
///
/// Returns `JournalError::StoreInit` if the statements cannot be applied.
pub fn ensure_schema(conn: &mut Connection) -> Result<()> {
    let tx = conn
        .transaction()
        .map_err(|e| JournalError::StoreInit(format!("Cannot begin schema transaction: {}", e)))?;
    tx.execute_batch(SCHEMA_SQL)
        .map_err(|e| JournalError::StoreInit(format!("Cannot create schema: {}", e)))?;
    let rewritten = normalize_timestamps(&tx)
        .map_err(|e| JournalError::StoreInit(format!("Cannot rewrite timestamps: {}", e)))?;
    if rewritten > 0 {
        info!(
            "event=schema_normalize module=storage status=ok rows={}",
            rewritten
        );
    }
    tx.commit()
        .map_err(|e| JournalError::StoreInit(format!("Cannot commit schema: {}", e)))?;
    Ok(())
}

/// Fixed-width form of a stored value, or `None` if it cannot be read or kept.
fn normalized(value: &str) -> Option<String> {
    decode_timestamp(value)
        .and_then(|parsed| encode_timestamp(&parsed))
        .ok()
}

/// Rewrite `entry_date`/`created_date` values that are not in the fixed-width
/// form. String order must match time order for `ORDER BY` and ranges.
///
/// Returns the number of rows changed. Unreadable values are kept as they are.
fn normalize_timestamps(conn: &Connection) -> rusqlite::Result<usize> {
    let mut select = conn.prepare(
        "SELECT id, entry_date, created_date FROM Entry \
         WHERE entry_date NOT LIKE ?1 OR created_date NOT LIKE ?1",
    )?;
    let rows = select.query_map([FIXED_WIDTH_PATTERN], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, Option<String>>(1)?,
            row.get::<_, Option<String>>(2)?,
        ))
    })?;
    let mut pending = Vec::new();
    for row in rows {
        pending.push(row?);
    }

    let mut update =
        conn.prepare("UPDATE Entry SET entry_date = ?, created_date = ? WHERE id = ?")?;
    let mut rewritten = 0;
    for (id, entry_date, created_date) in pending {
        let new_entry_date = entry_date
            .as_deref()
            .and_then(normalized)
            .or_else(|| entry_date.clone());
        let new_created_date = created_date
            .as_deref()
            .and_then(normalized)
            .or_else(|| created_date.clone());
        if new_entry_date == entry_date && new_created_date == created_date {
            warn!(
                "event=schema_normalize module=storage status=skipped id={}",
                id
            );
            continue;
        }
        rewritten += update.execute((&new_entry_date, &new_created_date, &id))?;
    }
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let rows = stmt.query_map([], |row| row.get::<_, String>(0)).unwrap();
        rows.map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_creates_tables() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        assert_eq!(table_names(&conn), vec!["Entry", "Tag"]);
    }

    #[test]
    fn test_is_idempotent_and_keeps_data() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO Tag (entry_id, tag) VALUES (?, ?)",
            ["amber-falcon-42", "x"],
        )
        .unwrap();

        ensure_schema(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Tag", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_naive_timestamps_are_rewritten() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO Entry (id, text, entry_date, created_date, tags) VALUES (?, ?, ?, ?, ?)",
            [
                "older-row-1",
                "t",
                "2024-01-01 08:15:00",
                "2024-01-01 08:15:00.1234567",
                "",
            ],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO Entry (id, text, entry_date, created_date, tags) VALUES (?, ?, ?, ?, ?)",
            ["broken-row-2", "t", "someday", "2024-01-01T00:00:00.000000Z", ""],
        )
        .unwrap();

        ensure_schema(&mut conn).unwrap();

        let dates = |id: &str| -> (String, String) {
            conn.query_row(
                "SELECT entry_date, created_date FROM Entry WHERE id = ?",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap()
        };
        assert_eq!(
            dates("older-row-1"),
            (
                "2024-01-01T08:15:00.000000Z".to_string(),
                "2024-01-01T08:15:00.123456Z".to_string()
            )
        );
        assert_eq!(dates("broken-row-2").0, "someday");
    }

    #[test]
    fn test_tag_rows_may_repeat() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        for _ in 0..2 {
            conn.execute(
                "INSERT INTO Tag (entry_id, tag) VALUES (?, ?)",
                ["amber-falcon-42", "x"],
            )
            .unwrap();
        }
    }
}
