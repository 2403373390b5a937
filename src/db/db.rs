//! Durable key-value store backing every repository.
//!
//! One SQLite database holding a single flat `storage` table of string keys
//! to string values. Higher layers keep JSON documents in the values; this
//! module knows nothing about their shape. A missing key reads as `None`,
//! never as an error.

use crate::libs::data_storage;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use tracing::debug;

pub const DB_FILE_NAME: &str = "admcal.db";

const SCHEMA_STORAGE: &str = "CREATE TABLE IF NOT EXISTS storage (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
);";
const SELECT_VALUE: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO storage (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = data_storage::data_file(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;
        conn.execute(SCHEMA_STORAGE, [])?;

        Ok(Db { conn })
    }

    /// Raw value stored under `key`, or `None` when the key has never been
    /// written. Absence and emptiness are distinct states; the events
    /// bootstrap depends on that distinction.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_VALUE, [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, bytes = value.len(), "storage write");
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }
}

/// Decodes a stored JSON document, substituting `fallback` when the value is
/// absent or unreadable. Every repository funnels its reads through here so
/// the fail-soft policy exists in exactly one place.
pub fn decode_or<T: DeserializeOwned>(raw: Option<String>, fallback: T) -> T {
    let Some(text) = raw else {
        return fallback;
    };
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(err) => {
            debug!("discarding unreadable stored value: {err}");
            fallback
        }
    }
}
