//! SQLite-backed record store.
//!
//! # Responsibility
//! - Implement the raw key-value contract over the migrated `kv` table.
//! - Refuse connections whose schema has not been migrated.
//!
//! # Invariants
//! - `set_raw` upserts and refreshes `updated_at` in one statement.
//! - Construction validates `PRAGMA user_version` and `kv` table presence.

use super::{RecordStore, StoreError, StoreResult};
use crate::db::migrations::latest_version;
use rusqlite::{params, Connection, OptionalExtension};

/// Record store over a migrated SQLite connection.
pub struct SqliteRecordStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordStore<'conn> {
    /// Wraps a connection after validating its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` does not match the
    ///   latest migration known by this binary.
    /// - `MissingRequiredTable` when the `kv` table is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let has_kv_table = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'kv';",
                [],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .is_some();
        if !has_kv_table {
            return Err(StoreError::MissingRequiredTable("kv"));
        }

        Ok(Self { conn })
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value)
             VALUES (?1, ?2)
             ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}
