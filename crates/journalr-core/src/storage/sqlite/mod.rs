//! SQLite storage backend.
//!
//! The store holds only the database path. Each operation opens its own
//! connection, runs inside one transaction, and releases both before
//! returning; a transaction dropped without commit is rolled back.

mod row;
pub mod schema;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use rusqlite::types::Value;
use rusqlite::{Connection, DatabaseName, ErrorCode, OptionalExtension, Transaction};

use crate::error::{JournalError, Result};
use crate::storage::traits::JournalStore;
use crate::storage::types::{Entry, EntryQuery};

pub use row::{decode_timestamp, encode_timestamp};
use row::EntryRow;
use schema::ensure_schema;

/// How long a connection waits on another process's lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Ordering that defines "most recent". Shared by every query so listing,
/// removing, and tagging agree on which entries come first.
const RECENT_ORDER: &str = "ORDER BY e.entry_date DESC, e.created_date DESC, e.id";

/// SQLite-backed journal store.
#[derive(Debug, Clone)]
pub struct SqliteJournalStore {
    path: PathBuf,
}

impl SqliteJournalStore {
    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Run `op` inside a fresh connection and transaction.
    ///
    /// Commits when `op` succeeds. On error the transaction is dropped
    /// uncommitted (rolled back) and the connection closed.
    fn with_transaction<T, F>(&self, name: &str, op: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let started_at = Instant::now();
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let outcome = op(&tx);
        match outcome {
            Ok(value) => {
                tx.commit()?;
                debug!(
                    "event=store_tx module=storage status=ok op={} duration_ms={}",
                    name,
                    started_at.elapsed().as_millis()
                );
                Ok(value)
            }
            Err(err) => {
                drop(tx);
                warn!(
                    "event=store_tx module=storage status=rollback op={} duration_ms={} error={}",
                    name,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Fail with `StoreInit` when SQLite opened the main database read-only.
///
/// `CREATE ... IF NOT EXISTS` succeeds on a read-only database whose tables
/// already exist, so the schema step alone does not catch this.
fn ensure_writable(conn: &Connection, path: &Path) -> Result<()> {
    let readonly = conn.is_readonly(DatabaseName::Main).map_err(|e| {
        JournalError::StoreInit(format!("Cannot inspect store {}: {}", path.display(), e))
    })?;
    if readonly {
        error!(
            "event=store_open module=storage status=error error_code=read_only path={}",
            path.display()
        );
        return Err(JournalError::StoreInit(format!(
            "Store {} is not writable",
            path.display()
        )));
    }
    Ok(())
}

/// Convert a row count into a SQL `LIMIT` value.
fn limit_value(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

fn insert_tags<'a, I>(conn: &Connection, entry_id: &str, tags: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stmt = conn.prepare_cached("INSERT INTO Tag (entry_id, tag) VALUES (?, ?)")?;
    let mut inserted = 0;
    for tag in tags {
        inserted += stmt.execute((entry_id, tag))?;
    }
    Ok(inserted)
}

fn recent_ids(conn: &Connection, count: usize) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("SELECT e.id FROM Entry e {} LIMIT ?", RECENT_ORDER))?;
    let rows = stmt.query_map([limit_value(count)], |row| row.get::<_, String>(0))?;

    let mut ids = Vec::new();
    for row in rows {
        ids.push(row?);
    }
    Ok(ids)
}

/// Fetch tags for every entry matching `where_clause`, keyed by entry id.
///
/// Entries without tag rows are absent from the map.
fn fetch_tag_map(
    conn: &Connection,
    where_clause: &str,
    params: &[Value],
) -> Result<HashMap<String, Vec<String>>> {
    let query = format!(
        "SELECT e.id, t.tag FROM Entry e LEFT JOIN Tag t ON e.id = t.entry_id{} ORDER BY e.entry_date DESC, t.rowid",
        where_clause
    );
    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
    })?;

    let mut tag_map: HashMap<String, Vec<String>> = HashMap::new();
    for row in rows {
        let (entry_id, tag) = row?;
        if let Some(tag) = tag {
            tag_map.entry(entry_id).or_default().push(tag);
        }
    }
    Ok(tag_map)
}

impl JournalStore for SqliteJournalStore {
    fn open(path: &Path) -> Result<Self> {
        let started_at = Instant::now();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                JournalError::ResourceUnavailable(format!(
                    "Cannot create store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut conn = Connection::open(path).map_err(|e| {
            error!(
                "event=store_open module=storage status=error error_code=open_failed error={}",
                e
            );
            JournalError::StoreInit(format!("Cannot open store {}: {}", path.display(), e))
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        ensure_schema(&mut conn)?;
        ensure_writable(&conn, path)?;

        info!(
            "event=store_open module=storage status=ok path={} duration_ms={}",
            path.display(),
            started_at.elapsed().as_millis()
        );

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    fn add_entry(&self, entry: &Entry) -> Result<bool> {
        let entry_date = encode_timestamp(&entry.entry_date)?;
        let created_date = encode_timestamp(&entry.created_date)?;
        self.with_transaction("add_entry", |tx| {
            let inserted = match tx.execute(
                r#"
                INSERT INTO Entry (id, text, entry_date, created_date, tags)
                VALUES (?, ?, ?, ?, ?)
                "#,
                (
                    &entry.id,
                    &entry.text,
                    &entry_date,
                    &created_date,
                    entry.tags.join(","),
                ),
            ) {
                Ok(count) => count,
                Err(rusqlite::Error::SqliteFailure(err, _))
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    return Err(JournalError::DuplicateId(entry.id.clone()));
                }
                Err(err) => return Err(err.into()),
            };

            insert_tags(tx, &entry.id, entry.stored_tags())?;

            Ok(inserted == 1)
        })
    }

    fn update_entry(&self, entry: &Entry) -> Result<bool> {
        let entry_date = encode_timestamp(&entry.entry_date)?;
        self.with_transaction("update_entry", |tx| {
            let updated = tx.execute(
                "UPDATE Entry SET text = ?, entry_date = ? WHERE id = ?",
                (&entry.text, &entry_date, &entry.id),
            )?;

            tx.execute("DELETE FROM Tag WHERE entry_id = ?", [&entry.id])?;

            // Tag rows may only reference existing entries.
            if updated == 1 {
                insert_tags(tx, &entry.id, entry.stored_tags())?;
            }

            Ok(updated == 1)
        })
    }

    fn remove_entry(&self, id: &str) -> Result<bool> {
        self.with_transaction("remove_entry", |tx| {
            tx.execute("DELETE FROM Tag WHERE entry_id = ?", [id])?;
            let deleted = tx.execute("DELETE FROM Entry WHERE id = ?", [id])?;
            Ok(deleted == 1)
        })
    }

    fn remove_recent(&self, count: usize) -> Result<bool> {
        self.with_transaction("remove_recent", |tx| {
            let limit = limit_value(count);
            tx.execute(
                &format!(
                    "DELETE FROM Tag WHERE entry_id IN (SELECT e.id FROM Entry e {} LIMIT ?)",
                    RECENT_ORDER
                ),
                [limit],
            )?;
            let deleted = tx.execute(
                &format!(
                    "DELETE FROM Entry WHERE id IN (SELECT e.id FROM Entry e {} LIMIT ?)",
                    RECENT_ORDER
                ),
                [limit],
            )?;
            Ok(deleted > 0)
        })
    }

    fn tag_entry(&self, id: &str, tags: &[String]) -> Result<bool> {
        self.with_transaction("tag_entry", |tx| {
            let exists = tx
                .query_row("SELECT 1 FROM Entry WHERE id = ?", [id], |_| Ok(()))
                .optional()?;
            if exists.is_none() {
                return Ok(false);
            }

            insert_tags(tx, id, tags.iter().map(String::as_str))?;
            Ok(true)
        })
    }

    fn tag_recent(&self, count: usize, tags: &[String]) -> Result<bool> {
        self.with_transaction("tag_recent", |tx| {
            for id in recent_ids(tx, count)? {
                insert_tags(tx, &id, tags.iter().map(String::as_str))?;
            }
            Ok(true)
        })
    }

    fn get_entry(&self, id: &str) -> Result<Option<Entry>> {
        self.with_transaction("get_entry", |tx| {
            let params = [Value::Text(id.to_string())];
            let mut tag_map = fetch_tag_map(tx, " WHERE e.id = ?", &params)?;

            let row = tx
                .query_row(
                    &format!("SELECT {} FROM Entry e WHERE e.id = ?", EntryRow::COLUMNS),
                    [id],
                    EntryRow::from_row,
                )
                .optional()?;

            match row {
                Some(row) => {
                    let tags = tag_map.remove(&row.id).unwrap_or_default();
                    Ok(Some(row.into_entry(tags)?))
                }
                None => Ok(None),
            }
        })
    }

    fn list_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>> {
        let mut where_clause = String::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(range) = query.range {
            where_clause.push_str(" WHERE e.entry_date >= ? AND e.entry_date <= ?");
            params.push(Value::Text(encode_timestamp(&range.start)?));
            params.push(Value::Text(encode_timestamp(&range.end)?));
        }

        self.with_transaction("list_entries", |tx| {
            let mut tag_map = fetch_tag_map(tx, &where_clause, &params)?;

            let mut sql = format!(
                "SELECT {} FROM Entry e{} {}",
                EntryRow::COLUMNS,
                where_clause,
                RECENT_ORDER
            );
            if let Some(count) = query.count {
                sql.push_str(" LIMIT ?");
                params.push(Value::Integer(limit_value(count)));
            }

            let mut stmt = tx.prepare(&sql)?;
            let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), EntryRow::from_row)?;

            let mut entries = Vec::new();
            for row in rows {
                let row = row?;
                let tags = tag_map.remove(&row.id).unwrap_or_default();
                entries.push(row.into_entry(tags)?);
            }

            Ok(entries)
        })
    }

    fn count_entries(&self) -> Result<usize> {
        self.with_transaction("count_entries", |tx| {
            let count: i64 = tx.query_row("SELECT COUNT(*) FROM Entry", [], |row| row.get(0))?;
            Ok(usize::try_from(count).unwrap_or(0))
        })
    }

    fn count_tags(&self, id: &str) -> Result<usize> {
        self.with_transaction("count_tags", |tx| {
            let count: i64 = tx.query_row(
                "SELECT COUNT(*) FROM Tag WHERE entry_id = ?",
                [id],
                |row| row.get(0),
            )?;
            Ok(usize::try_from(count).unwrap_or(0))
        })
    }
}
