//! Draft record data access object (key-value store)

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

/// A stored draft row: raw key, JSON text, and last-write timestamp
#[derive(Debug, Clone)]
pub struct DraftRecord {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Data access object for draft records
#[derive(Clone)]
pub struct DraftRecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl DraftRecordStore {
    /// Create a new DraftRecordStore
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Set a value (insert or update)
    pub fn set(&self, key: &str, value: &str) -> SqliteResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO drafts (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> SqliteResult<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM drafts WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    /// Delete a key (no-op when the key is absent)
    pub fn delete(&self, key: &str) -> SqliteResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM drafts WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Delete all stored drafts
    pub fn delete_all(&self) -> SqliteResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM drafts", [])?;
        Ok(())
    }

    /// Get all stored records, most recently written first
    pub fn list(&self) -> SqliteResult<Vec<DraftRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT key, value, updated_at FROM drafts ORDER BY updated_at DESC, key",
        )?;

        let records = stmt
            .query_map([], Self::row_to_record)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(records)
    }

    /// Get all records whose key starts with the given prefix,
    /// most recently written first
    pub fn list_prefix(&self, prefix: &str) -> SqliteResult<Vec<DraftRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT key, value, updated_at FROM drafts
             WHERE key LIKE ?1 || '%'
             ORDER BY updated_at DESC, key",
        )?;

        let records = stmt
            .query_map(params![prefix], Self::row_to_record)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(records)
    }

    /// Convert a database row to a DraftRecord
    fn row_to_record(row: &rusqlite::Row) -> SqliteResult<DraftRecord> {
        let updated_at_str: String = row.get(2)?;
        Ok(DraftRecord {
            key: row.get(0)?,
            value: row.get(1)?,
            updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
