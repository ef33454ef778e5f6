//! Embedded schema migrations for the item store.

use diesel::Connection;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::domain::ports::ItemRepositoryError;

/// Embedded migrations from the backend/migrations directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Runs all pending Diesel migrations against the given database.
///
/// SQLite creates the database file on first connection, so this also
/// bootstraps a fresh store.
pub fn run_migrations(database_url: &str) -> Result<(), ItemRepositoryError> {
    let mut conn = SqliteConnection::establish(database_url)
        .map_err(|err| ItemRepositoryError::connection(format!("{err}")))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| ItemRepositoryError::query(format!("migration: {err}")))?;
    Ok(())
}

/// Runs migrations on the blocking thread pool so async startup can await
/// them without stalling the runtime.
pub async fn apply_startup_migrations(database_url: &str) -> Result<(), ItemRepositoryError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_migrations(&url))
        .await
        .map_err(|err| ItemRepositoryError::query(format!("migration task failed: {err}")))?
}
