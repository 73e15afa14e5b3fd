//! SQLite storage for the remote copy of users' plans.
//!
//! [`Database`] wraps one connection and exposes per-table queries grouped in
//! the submodules. [`SqliteStore`] puts those queries behind the
//! [`RemoteStore`](crate::sync::RemoteStore) seam, running each call on the
//! blocking thread pool with its own connection.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod course_queries;
pub mod migrations;
pub mod profile_queries;
pub mod semester_queries;
pub mod store;

pub use store::SqliteStore;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the database at `path` and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Builds `?1, ?2, ...` for an `IN (...)` clause with `count` parameters.
pub(crate) fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}
