//! Test utilities for database setup.
//!
//! Provides a fixture that reuses the authoritative schema
//! initialization, eliminating schema duplication in test code.

use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};
use tempfile::TempDir;

use crate::db::{run_migrations, DbPool};
use crate::state::AppState;

/// Test environment with a migrated quiz database in a temp directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    pub pool: DbPool,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("quizmaat.db");
        let conn = Connection::open(&db_path)?;
        run_migrations(&conn)?;

        Ok(Self {
            temp,
            pool: Arc::new(Mutex::new(conn)),
        })
    }

    /// Application state backed by this environment's database.
    pub fn state(&self) -> AppState {
        AppState::new(self.pool.clone())
    }

    /// Direct connection access for assertions and seeding.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.pool.lock().expect("test database lock")
    }
}
