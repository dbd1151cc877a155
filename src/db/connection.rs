use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::TaskfoldersError;

use super::migrations;

pub const STORE_DIR: &str = ".taskfolders";
pub const DB_FILE: &str = "taskfolders.db";

fn current_dir() -> Result<PathBuf, TaskfoldersError> {
    env::current_dir().map_err(|e| TaskfoldersError::database(e.to_string()))
}

/// Find the nearest `.taskfolders/taskfolders.db` by walking up from the current directory.
pub fn find_db() -> Result<Option<PathBuf>, TaskfoldersError> {
    let mut dir = current_dir()?;
    loop {
        let candidate = dir.join(STORE_DIR).join(DB_FILE);
        if candidate.exists() {
            return Ok(Some(candidate));
        }
        if !dir.pop() {
            return Ok(None);
        }
    }
}

/// Open a connection to the database. Returns error if not initialized.
pub fn open_db(db_override: Option<&Path>) -> Result<Connection, TaskfoldersError> {
    let path = match db_override {
        Some(p) => p.to_path_buf(),
        None => find_db()?.ok_or_else(TaskfoldersError::not_initialized)?,
    };
    if !path.exists() {
        return Err(TaskfoldersError::not_initialized());
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Initialize the database: create directories, database, and run migrations.
pub fn init_db(db_override: Option<&Path>) -> Result<PathBuf, TaskfoldersError> {
    let path = match db_override {
        Some(p) => p.to_path_buf(),
        None => current_dir()?.join(STORE_DIR).join(DB_FILE),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TaskfoldersError::database(e.to_string()))?;
        }
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(path)
}

fn configure_connection(conn: &Connection) -> Result<(), TaskfoldersError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
