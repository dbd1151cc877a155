pub mod connection;
pub mod kv_repo;
pub mod migrations;

pub use connection::*;
pub use kv_repo::SqliteStorage;
