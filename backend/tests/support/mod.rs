//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, which
//! makes it awkward to share small helpers without copy/paste. This module
//! holds the temporary SQLite plumbing common to the persistence and API
//! suites.

use backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use tempfile::TempDir;

/// A migrated SQLite database in a temporary directory.
///
/// Dropping the struct removes the directory and the database file with it,
/// so hold it for the lifetime of the test.
pub struct TempStore {
    _dir: TempDir,
    pub database_url: String,
}

/// Create a fresh database file and apply all embedded migrations.
pub fn migrated_store() -> TempStore {
    let dir = tempfile::tempdir().expect("create temp dir");
    let database_url = dir
        .path()
        .join("items.db")
        .to_str()
        .expect("utf-8 temp path")
        .to_owned();
    run_migrations(&database_url).expect("run migrations");
    TempStore {
        _dir: dir,
        database_url,
    }
}

/// Build a small connection pool against the given database file.
pub async fn build_pool(database_url: &str) -> DbPool {
    let config = PoolConfig::new(database_url)
        .with_max_connections(2)
        .with_min_idle(Some(1));
    DbPool::new(config).await.expect("build pool")
}
