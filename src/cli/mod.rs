pub mod commands;
pub mod folder;
pub mod init;
pub mod list;
pub mod shell;
pub mod task;

pub use commands::*;

use std::path::Path;

use crate::db::{connection, SqliteStorage};
use crate::error::TaskfoldersError;
use crate::output;
use crate::store::TaskStore;

pub fn open_store(db: Option<&Path>) -> Result<TaskStore<SqliteStorage>, TaskfoldersError> {
    let conn = connection::open_db(db)?;
    TaskStore::load(SqliteStorage::new(conn))
}

/// Prints the error the way the caller asked for and maps the result to an exit code.
pub fn finish(result: Result<i32, TaskfoldersError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                output::json::print(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}
