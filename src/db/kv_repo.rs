use rusqlite::{params, Connection, OptionalExtension};

use crate::error::TaskfoldersError;
use crate::store::PersistenceAdapter;

/// Key-value string store backed by the `kv` table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn unavailable(op: &str, key: &str, e: rusqlite::Error) -> TaskfoldersError {
    TaskfoldersError::persistence(format!("Storage {op} failed for key '{key}': {e}"))
}

impl PersistenceAdapter for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, TaskfoldersError> {
        self.conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| unavailable("read", key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TaskfoldersError> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value],
            )
            .map_err(|e| unavailable("write", key, e))?;
        Ok(())
    }
}
